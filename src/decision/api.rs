use super::audit::{audit_table, AuditRow};
use super::questionnaire::{AnswerValue, PHASE1_QUESTIONS, PHASE2_QUESTIONS};
use super::recommendation::{
    recommend, FinishPreference, LightnessImportance, RecommendationInputs, StrategicDriver,
    SystemRecommendation,
};
use super::scoring::{viability_summary, Phase1Answers, ViabilityReport};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;

/// The assessment is stateless over HTTP: the questionnaire is static
/// content and an evaluation carries all its inputs in the request.
pub fn decision_router() -> Router {
    Router::new()
        .route("/api/v1/decision/questionnaire", get(questionnaire_handler))
        .route("/api/v1/decision/evaluate", post(evaluate_handler))
}

async fn questionnaire_handler() -> Response {
    let payload = json!({
        "phase1": PHASE1_QUESTIONS,
        "phase2": PHASE2_QUESTIONS,
    });
    (StatusCode::OK, Json(payload)).into_response()
}

/// Raw evaluation inputs. Answer values arrive as the numbers the
/// questionnaire publishes (1, 3, 5); phase-2 answers as option letters.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    answers: BTreeMap<u8, u8>,
    #[serde(default)]
    motor: Option<char>,
    #[serde(default)]
    ligereza: Option<char>,
    #[serde(default)]
    acabado: Option<char>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    #[serde(flatten)]
    viability: ViabilityReport,
    /// Present only when at least one phase-2 answer was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    recommendation: Option<SystemRecommendation>,
    audit: Vec<AuditRow>,
}

fn unprocessable(message: String) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
        .into_response()
}

async fn evaluate_handler(Json(request): Json<EvaluateRequest>) -> Response {
    let mut answers = Phase1Answers::new();
    for (id, raw) in &request.answers {
        match AnswerValue::try_from(*raw) {
            Ok(value) => answers.record(*id, value),
            Err(err) => return unprocessable(format!("pregunta {id}: {err}")),
        }
    }

    let wants_recommendation =
        request.motor.is_some() || request.ligereza.is_some() || request.acabado.is_some();

    let driver = match request.motor {
        Some(id) => match StrategicDriver::from_option_id(id) {
            Some(driver) => Some(driver),
            None => return unprocessable(format!("motor: opción desconocida '{id}'")),
        },
        None => None,
    };
    let lightness = match request.ligereza {
        Some(id) => match LightnessImportance::from_option_id(id) {
            Some(lightness) => Some(lightness),
            None => return unprocessable(format!("ligereza: opción desconocida '{id}'")),
        },
        None => None,
    };
    let finish = match request.acabado {
        Some(id) => match FinishPreference::from_option_id(id) {
            Some(finish) => Some(finish),
            None => return unprocessable(format!("acabado: opción desconocida '{id}'")),
        },
        None => None,
    };

    let recommendation = wants_recommendation.then(|| {
        recommend(&RecommendationInputs {
            height: answers.value_for(super::flow::HEIGHT_QUESTION_ID),
            standardization: answers.value_for(super::flow::STANDARDIZATION_QUESTION_ID),
            driver,
            lightness,
            finish,
        })
    });

    let response = EvaluateResponse {
        viability: viability_summary(&answers),
        recommendation,
        audit: audit_table(&answers),
    };
    (StatusCode::OK, Json(response)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn questionnaire_lists_both_phases() {
        let payload = body_json(questionnaire_handler().await).await;
        assert_eq!(payload["phase1"].as_array().map(Vec::len), Some(12));
        assert_eq!(payload["phase2"].as_array().map(Vec::len), Some(3));
    }

    #[tokio::test]
    async fn evaluate_scores_and_audits_the_answers() {
        let request = EvaluateRequest {
            answers: (1..=12).map(|id| (id, 5)).collect(),
            ..EvaluateRequest::default()
        };
        let response = evaluate_handler(Json(request)).await;
        assert_eq!(response.status(), StatusCode::OK);

        let payload = body_json(response).await;
        assert_eq!(payload["score"], json!(120));
        assert_eq!(payload["tier"], json!("high"));
        assert_eq!(payload["audit"].as_array().map(Vec::len), Some(12));
        assert!(payload.get("recommendation").is_none());
    }

    #[tokio::test]
    async fn evaluate_includes_a_recommendation_when_phase2_is_present() {
        let request = EvaluateRequest {
            answers: (1..=12).map(|id| (id, 5)).collect(),
            motor: Some('a'),
            ligereza: Some('b'),
            acabado: Some('c'),
        };
        let payload = body_json(evaluate_handler(Json(request)).await).await;
        assert_eq!(
            payload["recommendation"]["system"],
            json!("Sistemas Volumétricos 3D")
        );
    }

    #[tokio::test]
    async fn evaluate_rejects_out_of_range_values() {
        let request = EvaluateRequest {
            answers: BTreeMap::from([(1, 4)]),
            ..EvaluateRequest::default()
        };
        let response = evaluate_handler(Json(request)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn evaluate_rejects_unknown_phase2_options() {
        let request = EvaluateRequest {
            motor: Some('z'),
            ..EvaluateRequest::default()
        };
        let response = evaluate_handler(Json(request)).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
