use super::domain::SortKey;
use super::export::portfolio_sheet;
use super::filter::{compute_visible, DimensionFilter, FilterSpec};
use super::options::compute_options;
use crate::store::{ProjectStore, StoreError, SupabaseClient};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Shared state for the catalog routes: the in-memory store serving
/// list reads, plus the optional backend client that detail reads and
/// notes updates go through.
pub struct CatalogState<S> {
    pub store: Arc<S>,
    pub backend: Option<Arc<SupabaseClient>>,
}

impl<S> Clone for CatalogState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            backend: self.backend.clone(),
        }
    }
}

/// Query-string mirror of [`FilterSpec`]; multi-value dimensions arrive
/// comma-separated.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListQuery {
    #[serde(default)]
    search: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default, rename = "type")]
    business_type: Option<String>,
    #[serde(default)]
    regime: Option<String>,
    #[serde(default)]
    floors: Option<String>,
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    sort: Option<SortKey>,
}

fn dimension_from_param(param: Option<String>) -> DimensionFilter {
    match param {
        Some(raw) if !raw.trim().is_empty() => DimensionFilter::any_of(
            raw.split(',')
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(str::to_string),
        ),
        _ => DimensionFilter::Unconstrained,
    }
}

impl ListQuery {
    fn into_spec(self) -> FilterSpec {
        FilterSpec {
            search_term: self.search.unwrap_or_default(),
            location_term: self.location.unwrap_or_default(),
            status: dimension_from_param(self.status),
            business_type: dimension_from_param(self.business_type),
            regime: dimension_from_param(self.regime),
            floors: dimension_from_param(self.floors),
            size: dimension_from_param(self.size),
            sort: self.sort.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct NotesRequest {
    notes: String,
}

pub fn catalog_router<S>(state: CatalogState<S>) -> Router
where
    S: ProjectStore + 'static,
{
    Router::new()
        .route("/api/v1/projects", get(list_handler::<S>))
        .route("/api/v1/projects/options", get(options_handler::<S>))
        .route("/api/v1/projects/sheet", get(sheet_handler::<S>))
        .route("/api/v1/projects/:ref_code", get(detail_handler::<S>))
        .route("/api/v1/projects/:ref_code/notes", put(notes_handler::<S>))
        .with_state(state)
}

fn store_failure(error: &StoreError) -> Response {
    let status = match error {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Backend { .. } | StoreError::Transport(_) => StatusCode::BAD_GATEWAY,
    };
    let body = Json(json!({ "error": error.to_string() }));
    (status, body).into_response()
}

async fn list_handler<S>(
    State(state): State<CatalogState<S>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    S: ProjectStore + 'static,
{
    let records = match state.store.fetch_all() {
        Ok(records) => records,
        Err(error) => return store_failure(&error),
    };
    let spec = query.into_spec();
    let visible = compute_visible(&records, &spec);
    let payload = json!({
        "total": records.len(),
        "visible": visible.len(),
        "projects": visible,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

async fn options_handler<S>(State(state): State<CatalogState<S>>) -> Response
where
    S: ProjectStore + 'static,
{
    match state.store.fetch_all() {
        Ok(records) => (StatusCode::OK, Json(compute_options(&records))).into_response(),
        Err(error) => store_failure(&error),
    }
}

async fn sheet_handler<S>(
    State(state): State<CatalogState<S>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    S: ProjectStore + 'static,
{
    let records = match state.store.fetch_all() {
        Ok(records) => records,
        Err(error) => return store_failure(&error),
    };
    let sheet = portfolio_sheet(&records, &query.into_spec(), Local::now().date_naive());
    (StatusCode::OK, Json(sheet)).into_response()
}

/// Detail reads go to the backend when one is configured, so the caller
/// sees the latest notes even between hydrations. The hydrated copy
/// answers when the backend cannot.
async fn detail_handler<S>(
    State(state): State<CatalogState<S>>,
    Path(ref_code): Path<String>,
) -> Response
where
    S: ProjectStore + 'static,
{
    if let Some(backend) = &state.backend {
        match backend.fetch_by_ref(&ref_code).await {
            Ok(Some(project)) => return (StatusCode::OK, Json(project)).into_response(),
            Ok(None) => {
                let body = Json(json!({ "error": format!("project {ref_code} not found") }));
                return (StatusCode::NOT_FOUND, body).into_response();
            }
            Err(error) => {
                tracing::warn!(ref_code, %error, "backend detail read failed, serving local copy");
            }
        }
    }

    match state.store.fetch_by_ref(&ref_code) {
        Ok(Some(project)) => (StatusCode::OK, Json(project)).into_response(),
        Ok(None) => {
            let body = Json(json!({ "error": format!("project {ref_code} not found") }));
            (StatusCode::NOT_FOUND, body).into_response()
        }
        Err(error) => store_failure(&error),
    }
}

/// The one write the catalog performs: update the free-text notes of a
/// project, keyed by its reference code. Backend failures come back as
/// a structured payload, never a panic.
async fn notes_handler<S>(
    State(state): State<CatalogState<S>>,
    Path(ref_code): Path<String>,
    Json(request): Json<NotesRequest>,
) -> Response
where
    S: ProjectStore + 'static,
{
    if let Some(backend) = &state.backend {
        if let Err(error) = backend.update_notes(&ref_code, &request.notes).await {
            let body = Json(json!({ "success": false, "message": error.to_string() }));
            return (StatusCode::BAD_GATEWAY, body).into_response();
        }
    }

    match state.store.update_notes(&ref_code, &request.notes) {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(StoreError::NotFound(_)) if state.backend.is_some() => {
            // The backend accepted the write but the local copy has not
            // seen the record yet; the next hydration reconciles it.
            (StatusCode::OK, Json(json!({ "success": true }))).into_response()
        }
        Err(error) => {
            let status = match error {
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            };
            let body = Json(json!({ "success": false, "message": error.to_string() }));
            (status, body).into_response()
        }
    }
}
