use super::raw::RawProjectRow;
use super::StoreError;
use crate::catalog::domain::Project;
use crate::config::BackendConfig;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client;
use tracing::{debug, error};

/// REST client for the hosted project table. All list filtering happens
/// client-side after a full fetch; the only write is the notes column.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseClient {
    pub fn new(config: &BackendConfig) -> Result<Self, StoreError> {
        let http = Client::builder()
            .user_agent("promo-portfolio/0.1")
            .build()?;
        Ok(Self {
            http,
            base_url: config.url.clone(),
            api_key: config.api_key.clone(),
            table: config.table.clone(),
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn auth_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.api_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {}", self.api_key)) {
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        headers
    }

    /// Full table fetch, newest reference codes first. No server-side
    /// filtering or pagination; the catalog engine works on the whole
    /// set in memory.
    pub async fn fetch_all(&self) -> Result<Vec<Project>, StoreError> {
        let response = self
            .http
            .get(self.table_url())
            .headers(self.auth_headers())
            .query(&[("select", "*"), ("order", "Cod.desc")])
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(%message, "project fetch rejected by backend");
            return Err(StoreError::Backend { message });
        }

        let rows: Vec<RawProjectRow> = response.json().await?;
        debug!(rows = rows.len(), "fetched project table");
        Ok(rows.into_iter().map(RawProjectRow::into_project).collect())
    }

    /// Keyed read backing the project detail route.
    pub async fn fetch_by_ref(&self, ref_code: &str) -> Result<Option<Project>, StoreError> {
        let response = self
            .http
            .get(self.table_url())
            .headers(self.auth_headers())
            .query(&[("select", "*"), ("Cod", &format!("eq.{ref_code}")[..])])
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Backend { message });
        }

        let mut rows: Vec<RawProjectRow> = response.json().await?;
        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.remove(0).into_project()))
    }

    /// Single-field write keyed by the reference code. Failures carry
    /// the backend's message so the caller can surface it verbatim.
    pub async fn update_notes(&self, ref_code: &str, notes: &str) -> Result<(), StoreError> {
        let response = self
            .http
            .patch(self.table_url())
            .headers(self.auth_headers())
            .header("Prefer", "return=minimal")
            .query(&[("Cod", &format!("eq.{ref_code}")[..])])
            .json(&serde_json::json!({ "Notas": notes }))
            .send()
            .await?;

        if !response.status().is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(ref_code, %message, "notes update rejected by backend");
            return Err(StoreError::Backend { message });
        }
        Ok(())
    }
}
