//! Static questionnaire content for the industrialization assessment.
//!
//! Phase 1 scores the strategic fit of industrialized construction for a
//! development; phase 2 narrows down the concrete building system. The
//! wording is the one shown to users and must stay byte-for-byte stable,
//! exports and audits quote it verbatim.

use serde::Serialize;
use thiserror::Error;

/// A phase-1 answer. The numeric value doubles as the score the answer
/// contributes before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, serde::Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AnswerValue {
    Unfavorable = 1,
    Neutral = 3,
    Favorable = 5,
}

impl AnswerValue {
    pub fn points(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Error)]
#[error("valor de respuesta inválido: {0} (se esperaba 1, 3 o 5)")]
pub struct InvalidAnswerValue(pub u8);

impl TryFrom<u8> for AnswerValue {
    type Error = InvalidAnswerValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(AnswerValue::Unfavorable),
            3 => Ok(AnswerValue::Neutral),
            5 => Ok(AnswerValue::Favorable),
            other => Err(InvalidAnswerValue(other)),
        }
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value as u8
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnswerOption {
    pub text: &'static str,
    pub value: AnswerValue,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Phase1Question {
    pub id: u8,
    pub criterion: &'static str,
    pub text: &'static str,
    pub info: &'static str,
    pub options: [AnswerOption; 3],
    pub weight: u32,
}

impl Phase1Question {
    /// Text of the option carrying the given value, for audit rows.
    pub fn option_text(&self, value: AnswerValue) -> &'static str {
        self.options
            .iter()
            .find(|option| option.value == value)
            .map(|option| option.text)
            .unwrap_or("-")
    }
}

pub fn question_by_id(id: u8) -> Option<&'static Phase1Question> {
    PHASE1_QUESTIONS.iter().find(|question| question.id == id)
}

const fn option(text: &'static str, value: AnswerValue) -> AnswerOption {
    AnswerOption { text, value }
}

pub const PHASE1_QUESTIONS: [Phase1Question; 12] = [
    Phase1Question {
        id: 1,
        criterion: "Escala del Proyecto",
        text: "¿Cuál es la dimensión aproximada de la promoción?",
        info: "Promociones de un tamaño más reducido son, a priori, menos óptimas para industrializar.",
        options: [
            option("Pequeña (< 50 uds)", AnswerValue::Unfavorable),
            option("Mediana", AnswerValue::Neutral),
            option("Grande (> 50 uds)", AnswerValue::Favorable),
        ],
        weight: 3,
    },
    Phase1Question {
        id: 2,
        criterion: "Estandarización del Diseño",
        text: "¿Qué nivel de repetición tienen las unidades (viviendas, habitaciones)?",
        info: "La repetición de unidades permite amortizar los moldes y optimizar los procesos de fábrica.",
        options: [
            option("Diseño único y personalizado", AnswerValue::Unfavorable),
            option("Moderadamente repetitivo", AnswerValue::Neutral),
            option("Altamente estandarizado (unidades idénticas)", AnswerValue::Favorable),
        ],
        weight: 3,
    },
    Phase1Question {
        id: 3,
        criterion: "Altura del Edificio",
        text: "¿Cuál es la altura prevista para el edificio?",
        info: "La altura influye en el tipo de sistema (p. ej., el hormigón es más eficiente en alturas elevadas).",
        options: [
            option("Baja altura (<3 plantas)", AnswerValue::Unfavorable),
            option("Altura media (3-8 plantas)", AnswerValue::Neutral),
            option("Gran altura (>8 plantas)", AnswerValue::Favorable),
        ],
        weight: 2,
    },
    Phase1Question {
        id: 4,
        criterion: "Accesibilidad del Solar",
        text: "¿Cómo describirías el acceso al solar para camiones y maquinaria pesada?",
        info: "El transporte de grandes módulos o paneles requiere accesos amplios y despejados.",
        options: [
            option("Complicado (calles estrechas, centro histórico)", AnswerValue::Unfavorable),
            option("Moderado", AnswerValue::Neutral),
            option("Excelente (viales anchos, acceso directo)", AnswerValue::Favorable),
        ],
        weight: 2,
    },
    Phase1Question {
        id: 5,
        criterion: "Espacio en Parcela",
        text: "¿Cuánto espacio libre quedará en la parcela durante la construcción para almacenaje y grúas?",
        info: "Se necesita espacio para el acopio de piezas y la maniobra de grúas de gran tonelaje.",
        options: [
            option("Mínimo (edificio entre medianeras)", AnswerValue::Unfavorable),
            option("Espacio funcional", AnswerValue::Neutral),
            option("Amplio espacio de maniobra", AnswerValue::Favorable),
        ],
        weight: 2,
    },
    Phase1Question {
        id: 6,
        criterion: "Urgencia del Plazo",
        text: "¿Qué tan crítico es el plazo de entrega para el éxito del negocio?",
        info: "La industrialización puede reducir los plazos de entrega hasta en un 50% frente a lo tradicional.",
        options: [
            option("Flexible, sin penalizaciones", AnswerValue::Unfavorable),
            option("Importante, pero con margen", AnswerValue::Neutral),
            option("Crítico, con fecha de entrega inamovible", AnswerValue::Favorable),
        ],
        weight: 2,
    },
    Phase1Question {
        id: 7,
        criterion: "Objetivos de Sostenibilidad",
        text: "¿La promoción necesita cumplir con altos estándares de sostenibilidad o certificaciones (BREEAM, LEED)?",
        info: "Los sistemas industrializados (como la madera) reducen drásticamente la huella de carbono.",
        options: [
            option("No es una prioridad", AnswerValue::Unfavorable),
            option("Es un factor deseable", AnswerValue::Neutral),
            option("Es un requisito indispensable (ESG)", AnswerValue::Favorable),
        ],
        weight: 2,
    },
    Phase1Question {
        id: 8,
        criterion: "Financiación Específica",
        text: "¿Se contempla el acceso a financiación verde o incentivos específicos para construcción innovadora (ej. fondos Next Generation)?",
        info: "El uso de métodos innovadores facilita el acceso a fondos verdes (ej. Next Generation).",
        options: [
            option("No, financiación estándar", AnswerValue::Unfavorable),
            option("Se está explorando", AnswerValue::Neutral),
            option("Sí, es parte de la estrategia financiera", AnswerValue::Favorable),
        ],
        weight: 1,
    },
    Phase1Question {
        id: 9,
        criterion: "Experiencia del Equipo",
        text: "¿Qué experiencia tiene la empresa en la gestión de proyectos industrializados?",
        info: "La gestión de proyectos industrializados requiere una planificación más integrada y temprana.",
        options: [
            option("Ninguna, sería el primero", AnswerValue::Unfavorable),
            option("Alguna experiencia indirecta", AnswerValue::Neutral),
            option("Experiencia directa y consolidada", AnswerValue::Favorable),
        ],
        weight: 3,
    },
    Phase1Question {
        id: 10,
        criterion: "Mano de Obra Local",
        text: "¿Cómo afecta la escasez de mano de obra cualificada tradicional a la viabilidad de nuestros proyectos en la zona?",
        info: "La escasez de mano de obra en el lugar de obra hace que la fabricación en entorno controlado sea clave.",
        options: [
            option("No es un problema relevante", AnswerValue::Unfavorable),
            option("Es un desafío moderado", AnswerValue::Neutral),
            option("Es un cuello de botella crítico", AnswerValue::Favorable),
        ],
        weight: 1,
    },
    Phase1Question {
        id: 11,
        criterion: "Percepción del Mercado",
        text: "¿Cómo valoran nuestros clientes objetivo los inmuebles construidos con métodos modernos e innovadores?",
        info: "El cliente final valora cada vez más la precisión milimétrica y la calidad del acabado industrial.",
        options: [
            option("Prefieren lo tradicional", AnswerValue::Unfavorable),
            option("Son neutrales", AnswerValue::Neutral),
            option("Lo valoran positivamente como un plus", AnswerValue::Favorable),
        ],
        weight: 1,
    },
    Phase1Question {
        id: 12,
        criterion: "Estrategia de Costes",
        text: "¿Cuál es el enfoque principal del presupuesto?",
        info: "Aunque el coste inicial sea similar, se reduce el riesgo de desviaciones y mejora el ROI financiero.",
        options: [
            option("Minimizar el coste inicial a toda costa", AnswerValue::Unfavorable),
            option("Equilibrar coste y plazo", AnswerValue::Neutral),
            option(
                "Optimizar el ROI a largo plazo y reducir riesgos de ejecución",
                AnswerValue::Favorable,
            ),
        ],
        weight: 2,
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Phase2Option {
    pub id: char,
    pub text: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Phase2Question {
    pub id: &'static str,
    pub text: &'static str,
    pub options: &'static [Phase2Option],
}

pub const PHASE2_QUESTIONS: [Phase2Question; 3] = [
    Phase2Question {
        id: "motor",
        text: "¿Cuál es el principal motor estratégico del proyecto?",
        options: &[
            Phase2Option {
                id: 'a',
                text: "Velocidad y ROI: Necesitamos entregar el activo lo antes posible para acelerar el retorno de la inversión.",
            },
            Phase2Option {
                id: 'b',
                text: "Sostenibilidad y Marketing Verde: El principal valor diferencial será la baja huella de carbono y la eficiencia energética.",
            },
            Phase2Option {
                id: 'c',
                text: "Flexibilidad Estructural: El diseño requiere grandes espacios abiertos y pocas divisiones interiores (ej. oficinas, parkings).",
            },
            Phase2Option {
                id: 'd',
                text: "Coste Competitivo: El objetivo es alcanzar un precio de construcción muy ajustado para vivienda social o similar.",
            },
        ],
    },
    Phase2Question {
        id: "ligereza",
        text: "¿Qué importancia tiene la ligereza de la estructura?",
        options: &[
            Phase2Option {
                id: 'a',
                text: "Crítica, es una remonta sobre un edificio existente o el terreno tiene poca capacidad portante.",
            },
            Phase2Option {
                id: 'b',
                text: "Indiferente, el peso no es un factor limitante.",
            },
        ],
    },
    Phase2Question {
        id: "acabado",
        text: "¿Qué acabado exterior se busca?",
        options: &[
            Phase2Option {
                id: 'a',
                text: "Un acabado arquitectónico de hormigón de alta calidad.",
            },
            Phase2Option {
                id: 'b',
                text: "Un acabado que evoque calidez y sostenibilidad, como la madera.",
            },
            Phase2Option {
                id: 'c',
                text: "Un sistema versátil que permita diferentes tipos de revestimiento.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_twenty_four() {
        let total: u32 = PHASE1_QUESTIONS.iter().map(|q| q.weight).sum();
        assert_eq!(total, 24);
    }

    #[test]
    fn question_ids_are_sequential_and_unique() {
        for (index, question) in PHASE1_QUESTIONS.iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
        }
    }

    #[test]
    fn answer_value_rejects_out_of_range_numbers() {
        assert!(AnswerValue::try_from(5).is_ok());
        assert!(AnswerValue::try_from(2).is_err());
        assert!(AnswerValue::try_from(0).is_err());
    }

    #[test]
    fn option_text_matches_answer_value() {
        let question = question_by_id(1).expect("question 1 exists");
        assert_eq!(
            question.option_text(AnswerValue::Favorable),
            "Grande (> 50 uds)"
        );
    }

    #[test]
    fn phase2_option_ids_are_lowercase_letters() {
        for question in PHASE2_QUESTIONS {
            for option in question.options {
                assert!(option.id.is_ascii_lowercase());
            }
        }
    }
}
