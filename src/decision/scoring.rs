//! Weighted scoring for phase 1 and the viability verdict derived from it.

use super::questionnaire::{question_by_id, AnswerValue, Phase1Question, PHASE1_QUESTIONS};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const LOW_THRESHOLD: u32 = 40;
pub const HIGH_THRESHOLD: u32 = 80;
pub const MAX_SCORE: u32 = 120;

/// Phase-1 answers keyed by question id. Partially answered sets are
/// valid; unanswered questions simply contribute nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phase1Answers(BTreeMap<u8, AnswerValue>);

impl Phase1Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: u8, value: AnswerValue) {
        self.0.insert(question_id, value);
    }

    pub fn value_for(&self, question_id: u8) -> Option<AnswerValue> {
        self.0.get(&question_id).copied()
    }

    pub fn answered(&self) -> usize {
        self.0.len()
    }

    /// Weighted total. Each answered question contributes its answer
    /// value (1, 3 or 5) times the question weight; ids without a
    /// matching question are ignored.
    pub fn total_score(&self) -> u32 {
        self.0
            .iter()
            .filter_map(|(id, value)| {
                question_by_id(*id).map(|question| value.points() * question.weight)
            })
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    Medium,
    High,
}

impl Tier {
    pub fn classify(score: u32) -> Self {
        if score < LOW_THRESHOLD {
            Tier::Low
        } else if score <= HIGH_THRESHOLD {
            Tier::Medium
        } else {
            Tier::High
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Tier::Low => "Construcción Tradicional Recomendada",
            Tier::Medium => "Potencial para Industrialización Híbrida o Parcial",
            Tier::High => "Industrialización Altamente Recomendable",
        }
    }

    pub fn banner_class(self) -> &'static str {
        match self {
            Tier::Low => "bg-red-500",
            Tier::Medium => "bg-amber-500",
            Tier::High => "bg-green-500",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ViabilityReport {
    pub score: u32,
    pub max_score: u32,
    pub tier: Tier,
    pub title: &'static str,
    pub banner_class: &'static str,
    pub narrative: String,
}

/// Questions ordered by the points their answer earned, ascending, with
/// unanswered questions counting as zero. Ties keep questionnaire order.
fn by_answered_points(answers: &Phase1Answers) -> Vec<&'static Phase1Question> {
    let mut sorted: Vec<&'static Phase1Question> = PHASE1_QUESTIONS.iter().collect();
    sorted.sort_by_key(|question| {
        answers
            .value_for(question.id)
            .map(AnswerValue::points)
            .unwrap_or(0)
    });
    sorted
}

/// The viability verdict shown after phase 1: tier, banner and a
/// narrative that names the weakest and strongest criteria.
pub fn viability_summary(answers: &Phase1Answers) -> ViabilityReport {
    let score = answers.total_score();
    let tier = Tier::classify(score);
    let sorted = by_answered_points(answers);
    let lowest1 = sorted[0];
    let lowest2 = sorted[1];
    let highest1 = sorted[sorted.len() - 1];
    let highest2 = sorted[sorted.len() - 2];
    let highest3 = sorted[sorted.len() - 3];

    let narrative = match tier {
        Tier::Low => format!(
            "Para este proyecto, la construcción tradicional parece ser la opción más segura. \
             Factores clave como {} y {} limitan los beneficios de la industrialización. \
             Intentar industrializar sería como usar una imprenta industrial para un solo folleto: \
             los costes de preparación superarían el beneficio. Recomendamos seguir el método \
             constructivo tradicional para maximizar la flexibilidad y ajustarse a las \
             características actuales de la promoción.",
            lowest1.criterion, lowest2.criterion
        ),
        Tier::Medium => format!(
            "El proyecto presenta un perfil mixto. Tiene puntos a favor de la industrialización \
             como {}, pero también desafíos importantes como {}. Se podría explorar un enfoque \
             híbrido, como industrializar componentes específicos (ej. baños prefabricados) \
             mientras el resto de la estructura es tradicional. Se recomienda un análisis más \
             profundo para determinar qué partes del 'traje' se pueden encargar a la 'línea de \
             producción industrial' y cuáles necesitan el trabajo de un 'sastre a medida'.",
            highest1.criterion, lowest1.criterion
        ),
        Tier::High => format!(
            "¡Luz verde! Esta promoción es una candidata ideal para la industrialización. \
             Su {}, {} y {} permiten aprovechar al máximo las ventajas de este método: reducción \
             de plazos de hasta un 50%, control de costes y mayor calidad gracias a la producción \
             en un entorno controlado. El diseño es como un 'ladrillo de LEGO' que permite a la \
             fábrica trabajar a pleno rendimiento. Haga clic en 'Siguiente' para definir qué tipo \
             de sistema industrializado es el más adecuado para usted.",
            highest1.criterion, highest2.criterion, highest3.criterion
        ),
    };

    ViabilityReport {
        score,
        max_score: MAX_SCORE,
        tier,
        title: tier.title(),
        banner_class: tier.banner_class(),
        narrative,
    }
}
