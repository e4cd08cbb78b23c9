//! Score audit: the per-criterion breakdown that backs the exported
//! evaluation sheet.

use super::questionnaire::{AnswerValue, PHASE1_QUESTIONS};
use super::recommendation::SystemRecommendation;
use super::scoring::{Phase1Answers, Tier, MAX_SCORE};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AuditRow {
    pub criterion: &'static str,
    /// Text of the chosen option, absent when the question was skipped.
    pub answer: Option<&'static str>,
    pub points: u32,
    pub weight: u32,
    pub subtotal: u32,
}

/// One row per phase-1 question, in questionnaire order. Unanswered
/// questions appear with zero points so the subtotal column always sums
/// to the final score.
pub fn audit_table(answers: &Phase1Answers) -> Vec<AuditRow> {
    PHASE1_QUESTIONS
        .iter()
        .map(|question| {
            let value = answers.value_for(question.id);
            let points = value.map(AnswerValue::points).unwrap_or(0);
            AuditRow {
                criterion: question.criterion,
                answer: value.map(|value| question.option_text(value)),
                points,
                weight: question.weight,
                subtotal: points * question.weight,
            }
        })
        .collect()
}

/// The exportable evaluation sheet for a finished assessment.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreSheet {
    pub project_name: String,
    pub project_location: String,
    pub generated_on: NaiveDate,
    pub score: u32,
    pub max_score: u32,
    pub tier: Tier,
    pub recommendation: SystemRecommendation,
    pub audit: Vec<AuditRow>,
}

pub fn score_sheet(
    project_name: &str,
    project_location: &str,
    answers: &Phase1Answers,
    recommendation: SystemRecommendation,
    today: NaiveDate,
) -> ScoreSheet {
    let score = answers.total_score();
    ScoreSheet {
        project_name: if project_name.is_empty() {
            "Sin nombre".to_string()
        } else {
            project_name.to_string()
        },
        project_location: if project_location.is_empty() {
            "Sin ubicación".to_string()
        } else {
            project_location.to_string()
        },
        generated_on: today,
        score,
        max_score: MAX_SCORE,
        tier: Tier::classify(score),
        recommendation,
        audit: audit_table(answers),
    }
}
