//! The guided assessment flow: intro, twelve phase-1 questions, a
//! viability verdict, three phase-2 questions and the final
//! recommendation, with a dedicated state for failed exports.

use super::questionnaire::{AnswerValue, PHASE1_QUESTIONS, PHASE2_QUESTIONS};
use super::recommendation::{
    recommend, FinishPreference, LightnessImportance, RecommendationInputs, StrategicDriver,
    SystemRecommendation,
};
use super::scoring::{viability_summary, Phase1Answers, ViabilityReport, HIGH_THRESHOLD};
use thiserror::Error;

pub const HEIGHT_QUESTION_ID: u8 = 3;
pub const STANDARDIZATION_QUESTION_ID: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    Intro,
    Phase1 { cursor: usize },
    Result1,
    Phase2 { cursor: usize },
    Final,
    ExportError,
}

#[derive(Debug, Error)]
pub enum FlowError {
    #[error("la acción no es válida en el paso actual")]
    WrongStep,
    #[error("la puntuación {score} no supera el umbral de {threshold} puntos")]
    ScoreBelowThreshold { score: u32, threshold: u32 },
    #[error("faltan el nombre o la ubicación de la promoción")]
    MissingProjectIdentity,
    #[error("opción desconocida: {0}")]
    UnknownOption(char),
}

/// State of a single assessment session.
#[derive(Debug, Clone)]
pub struct DecisionFlow {
    step: FlowStep,
    phase1: Phase1Answers,
    driver: Option<StrategicDriver>,
    lightness: Option<LightnessImportance>,
    finish: Option<FinishPreference>,
    project_name: String,
    project_location: String,
    last_export_error: Option<String>,
}

impl Default for DecisionFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionFlow {
    pub fn new() -> Self {
        Self {
            step: FlowStep::Intro,
            phase1: Phase1Answers::new(),
            driver: None,
            lightness: None,
            finish: None,
            project_name: String::new(),
            project_location: String::new(),
            last_export_error: None,
        }
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn phase1_answers(&self) -> &Phase1Answers {
        &self.phase1
    }

    pub fn score(&self) -> u32 {
        self.phase1.total_score()
    }

    pub fn last_export_error(&self) -> Option<&str> {
        self.last_export_error.as_deref()
    }

    /// Leave the intro and present the first phase-1 question.
    pub fn start(&mut self) -> Result<(), FlowError> {
        match self.step {
            FlowStep::Intro => {
                self.step = FlowStep::Phase1 { cursor: 0 };
                Ok(())
            }
            _ => Err(FlowError::WrongStep),
        }
    }

    /// Record the answer to the current phase-1 question and advance;
    /// answering the last question lands on the viability verdict.
    pub fn answer_phase1(&mut self, value: AnswerValue) -> Result<(), FlowError> {
        let FlowStep::Phase1 { cursor } = self.step else {
            return Err(FlowError::WrongStep);
        };
        self.phase1.record(PHASE1_QUESTIONS[cursor].id, value);
        self.step = if cursor + 1 < PHASE1_QUESTIONS.len() {
            FlowStep::Phase1 { cursor: cursor + 1 }
        } else {
            FlowStep::Result1
        };
        Ok(())
    }

    pub fn set_project(&mut self, name: &str, location: &str) {
        self.project_name = name.trim().to_string();
        self.project_location = location.trim().to_string();
    }

    /// Move from the verdict into phase 2. Only open to projects that
    /// scored above the high threshold and have been named and located.
    pub fn proceed_to_phase2(&mut self) -> Result<(), FlowError> {
        if self.step != FlowStep::Result1 {
            return Err(FlowError::WrongStep);
        }
        let score = self.score();
        if score <= HIGH_THRESHOLD {
            return Err(FlowError::ScoreBelowThreshold {
                score,
                threshold: HIGH_THRESHOLD,
            });
        }
        if self.project_name.is_empty() || self.project_location.is_empty() {
            return Err(FlowError::MissingProjectIdentity);
        }
        self.step = FlowStep::Phase2 { cursor: 0 };
        Ok(())
    }

    /// Record the chosen option for the current phase-2 question;
    /// answering the last one lands on the final recommendation.
    pub fn answer_phase2(&mut self, option_id: char) -> Result<(), FlowError> {
        let FlowStep::Phase2 { cursor } = self.step else {
            return Err(FlowError::WrongStep);
        };
        match cursor {
            0 => {
                self.driver = Some(
                    StrategicDriver::from_option_id(option_id)
                        .ok_or(FlowError::UnknownOption(option_id))?,
                );
            }
            1 => {
                self.lightness = Some(
                    LightnessImportance::from_option_id(option_id)
                        .ok_or(FlowError::UnknownOption(option_id))?,
                );
            }
            _ => {
                self.finish = Some(
                    FinishPreference::from_option_id(option_id)
                        .ok_or(FlowError::UnknownOption(option_id))?,
                );
            }
        }
        self.step = if cursor + 1 < PHASE2_QUESTIONS.len() {
            FlowStep::Phase2 { cursor: cursor + 1 }
        } else {
            FlowStep::Final
        };
        Ok(())
    }

    /// Step back one screen. Answers already given are kept.
    pub fn back(&mut self) {
        self.step = match self.step {
            FlowStep::Phase1 { cursor } if cursor > 0 => FlowStep::Phase1 { cursor: cursor - 1 },
            FlowStep::Phase1 { .. } => FlowStep::Intro,
            FlowStep::Result1 => FlowStep::Phase1 {
                cursor: PHASE1_QUESTIONS.len() - 1,
            },
            FlowStep::Phase2 { cursor } if cursor > 0 => FlowStep::Phase2 { cursor: cursor - 1 },
            FlowStep::Phase2 { .. } => FlowStep::Result1,
            FlowStep::Final => FlowStep::Phase2 {
                cursor: PHASE2_QUESTIONS.len() - 1,
            },
            FlowStep::Intro | FlowStep::ExportError => self.step,
        };
    }

    /// Wipe every answer and return to the intro.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn viability(&self) -> ViabilityReport {
        viability_summary(&self.phase1)
    }

    pub fn recommendation_inputs(&self) -> RecommendationInputs {
        RecommendationInputs {
            height: self.phase1.value_for(HEIGHT_QUESTION_ID),
            standardization: self.phase1.value_for(STANDARDIZATION_QUESTION_ID),
            driver: self.driver,
            lightness: self.lightness,
            finish: self.finish,
        }
    }

    pub fn recommendation(&self) -> Result<SystemRecommendation, FlowError> {
        if self.step != FlowStep::Final && self.step != FlowStep::ExportError {
            return Err(FlowError::WrongStep);
        }
        Ok(recommend(&self.recommendation_inputs()))
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn project_location(&self) -> &str {
        &self.project_location
    }

    /// A failed export keeps the finished assessment around so the user
    /// can retry without re-answering anything.
    pub fn export_failed(&mut self, message: String) -> Result<(), FlowError> {
        if self.step != FlowStep::Final {
            return Err(FlowError::WrongStep);
        }
        self.last_export_error = Some(message);
        self.step = FlowStep::ExportError;
        Ok(())
    }

    pub fn dismiss_export_error(&mut self) {
        if self.step == FlowStep::ExportError {
            self.last_export_error = None;
            self.step = FlowStep::Final;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flow_at_result1(value: AnswerValue) -> DecisionFlow {
        let mut flow = DecisionFlow::new();
        flow.start().expect("start from intro");
        for _ in 0..PHASE1_QUESTIONS.len() {
            flow.answer_phase1(value).expect("phase 1 answer");
        }
        flow
    }

    #[test]
    fn answering_all_phase1_questions_reaches_the_verdict() {
        let flow = flow_at_result1(AnswerValue::Neutral);
        assert_eq!(flow.step(), FlowStep::Result1);
        assert_eq!(flow.score(), 72);
    }

    #[test]
    fn medium_scores_cannot_enter_phase2() {
        let mut flow = flow_at_result1(AnswerValue::Neutral);
        flow.set_project("Residencial Norte", "Madrid");
        assert!(matches!(
            flow.proceed_to_phase2(),
            Err(FlowError::ScoreBelowThreshold { score: 72, .. })
        ));
    }

    #[test]
    fn phase2_requires_project_identity() {
        let mut flow = flow_at_result1(AnswerValue::Favorable);
        assert!(matches!(
            flow.proceed_to_phase2(),
            Err(FlowError::MissingProjectIdentity)
        ));
        flow.set_project("Residencial Norte", "Madrid");
        flow.proceed_to_phase2().expect("guard satisfied");
        assert_eq!(flow.step(), FlowStep::Phase2 { cursor: 0 });
    }

    #[test]
    fn full_walk_produces_a_recommendation() {
        let mut flow = flow_at_result1(AnswerValue::Favorable);
        flow.set_project("Residencial Norte", "Madrid");
        flow.proceed_to_phase2().expect("enter phase 2");
        flow.answer_phase2('a').expect("motor");
        flow.answer_phase2('b').expect("ligereza");
        flow.answer_phase2('c').expect("acabado");
        assert_eq!(flow.step(), FlowStep::Final);

        // Speed driver plus fully standardized design.
        let recommendation = flow.recommendation().expect("final step");
        assert_eq!(recommendation.system, "Sistemas Volumétricos 3D");
    }

    #[test]
    fn unknown_phase2_options_are_rejected() {
        let mut flow = flow_at_result1(AnswerValue::Favorable);
        flow.set_project("Residencial Norte", "Madrid");
        flow.proceed_to_phase2().expect("enter phase 2");
        assert!(matches!(
            flow.answer_phase2('z'),
            Err(FlowError::UnknownOption('z'))
        ));
        // The rejected answer does not advance the cursor.
        assert_eq!(flow.step(), FlowStep::Phase2 { cursor: 0 });
    }

    #[test]
    fn back_retraces_every_screen() {
        let mut flow = flow_at_result1(AnswerValue::Favorable);
        flow.set_project("Residencial Norte", "Madrid");
        flow.proceed_to_phase2().expect("enter phase 2");
        flow.answer_phase2('a').expect("motor");
        flow.answer_phase2('a').expect("ligereza");
        flow.answer_phase2('a').expect("acabado");

        flow.back();
        assert_eq!(flow.step(), FlowStep::Phase2 { cursor: 2 });
        flow.back();
        flow.back();
        flow.back();
        assert_eq!(flow.step(), FlowStep::Result1);
        flow.back();
        assert_eq!(flow.step(), FlowStep::Phase1 { cursor: 11 });
        for _ in 0..11 {
            flow.back();
        }
        assert_eq!(flow.step(), FlowStep::Phase1 { cursor: 0 });
        flow.back();
        assert_eq!(flow.step(), FlowStep::Intro);
        // Already answered questions are preserved.
        assert_eq!(flow.phase1_answers().answered(), 12);
    }

    #[test]
    fn failed_exports_keep_the_assessment() {
        let mut flow = flow_at_result1(AnswerValue::Favorable);
        flow.set_project("Residencial Norte", "Madrid");
        flow.proceed_to_phase2().expect("enter phase 2");
        flow.answer_phase2('c').expect("motor");
        flow.answer_phase2('b').expect("ligereza");
        flow.answer_phase2('c').expect("acabado");

        flow.export_failed("disco lleno".to_string())
            .expect("export fails from final");
        assert_eq!(flow.step(), FlowStep::ExportError);
        assert_eq!(flow.last_export_error(), Some("disco lleno"));
        // The recommendation is still available for a retry.
        assert_eq!(
            flow.recommendation().expect("still final").system,
            "Sistemas de Pórticos"
        );

        flow.dismiss_export_error();
        assert_eq!(flow.step(), FlowStep::Final);
        assert!(flow.last_export_error().is_none());
    }

    #[test]
    fn reset_returns_to_a_blank_intro() {
        let mut flow = flow_at_result1(AnswerValue::Favorable);
        flow.set_project("Residencial Norte", "Madrid");
        flow.reset();
        assert_eq!(flow.step(), FlowStep::Intro);
        assert_eq!(flow.phase1_answers().answered(), 0);
        assert!(flow.project_name().is_empty());
    }
}
