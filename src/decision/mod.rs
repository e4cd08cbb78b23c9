//! Industrialization assessment: scored questionnaire, viability
//! verdict, building-system recommendation and the guided flow that
//! strings them together.

pub mod api;
pub mod audit;
pub mod flow;
pub mod questionnaire;
pub mod recommendation;
pub mod scoring;

pub use api::decision_router;
pub use audit::{audit_table, score_sheet, AuditRow, ScoreSheet};
pub use flow::{DecisionFlow, FlowError, FlowStep};
pub use questionnaire::{AnswerValue, Phase1Question, Phase2Question, PHASE1_QUESTIONS, PHASE2_QUESTIONS};
pub use recommendation::{recommend, RecommendationInputs, SystemRecommendation};
pub use scoring::{viability_summary, Phase1Answers, Tier, ViabilityReport, HIGH_THRESHOLD, LOW_THRESHOLD, MAX_SCORE};
