//! Phase-2 inputs and the first-match decision table that maps them to
//! a recommended building system.

use super::questionnaire::AnswerValue;
use serde::Serialize;

/// Answer to the "motor" question: the project's main strategic driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategicDriver {
    SpeedRoi,
    Sustainability,
    StructuralFlexibility,
    CompetitiveCost,
}

impl StrategicDriver {
    pub fn from_option_id(id: char) -> Option<Self> {
        match id {
            'a' => Some(Self::SpeedRoi),
            'b' => Some(Self::Sustainability),
            'c' => Some(Self::StructuralFlexibility),
            'd' => Some(Self::CompetitiveCost),
            _ => None,
        }
    }

    pub fn option_id(self) -> char {
        match self {
            Self::SpeedRoi => 'a',
            Self::Sustainability => 'b',
            Self::StructuralFlexibility => 'c',
            Self::CompetitiveCost => 'd',
        }
    }
}

/// Answer to the "ligereza" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightnessImportance {
    Critical,
    Indifferent,
}

impl LightnessImportance {
    pub fn from_option_id(id: char) -> Option<Self> {
        match id {
            'a' => Some(Self::Critical),
            'b' => Some(Self::Indifferent),
            _ => None,
        }
    }

    pub fn option_id(self) -> char {
        match self {
            Self::Critical => 'a',
            Self::Indifferent => 'b',
        }
    }
}

/// Answer to the "acabado" question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishPreference {
    Concrete,
    Wood,
    Versatile,
}

impl FinishPreference {
    pub fn from_option_id(id: char) -> Option<Self> {
        match id {
            'a' => Some(Self::Concrete),
            'b' => Some(Self::Wood),
            'c' => Some(Self::Versatile),
            _ => None,
        }
    }

    pub fn option_id(self) -> char {
        match self {
            Self::Concrete => 'a',
            Self::Wood => 'b',
            Self::Versatile => 'c',
        }
    }
}

/// Everything the decision table looks at. Height and standardization
/// come from phase 1 (questions 3 and 2); the rest from phase 2. Any
/// field may be absent, in which case the rules requiring it cannot
/// fire and the table falls through to the hybrid default.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationInputs {
    pub height: Option<AnswerValue>,
    pub standardization: Option<AnswerValue>,
    pub driver: Option<StrategicDriver>,
    pub lightness: Option<LightnessImportance>,
    pub finish: Option<FinishPreference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemRecommendation {
    pub system: &'static str,
    pub justification: &'static str,
    pub features: &'static [&'static str],
    pub companies: &'static [&'static str],
}

pub const PORTICO_SYSTEMS: SystemRecommendation = SystemRecommendation {
    system: "Sistemas de Pórticos",
    justification: "Basado en la altura elevada de la promoción y su necesidad de flexibilidad estructural, los Sistemas de Pórticos son la opción ideal. Permiten grandes luces diáfanas y son perfectos para edificios de oficinas o parkings que requieren espacios abiertos sin obstáculos.",
    features: &[
        "Máxima flexibilidad interior",
        "Ideal para edificios de gran altura (>8 plantas)",
        "Integración sencilla de instalaciones",
    ],
    companies: &["Hormipresa", "Grupo Avintia", "Precon"],
};

pub const VOLUMETRIC_3D: SystemRecommendation = SystemRecommendation {
    system: "Sistemas Volumétricos 3D",
    justification: "Dada la alta estandarización del diseño y la prioridad crítica en la velocidad y el ROI, los Sistemas Volumétricos 3D son la elección más eficiente. Estos módulos completamente terminados en fábrica permiten una reducción de plazos de hasta el 70%.",
    features: &[
        "Reducción drástica del plazo (70%)",
        "Calidad de acabado industrial total",
        "Listo para entrar a vivir en tiempo récord",
    ],
    companies: &["ExSitu", "Modunova", "Vigas de Hormigón"],
};

pub const CLT_TIMBER: SystemRecommendation = SystemRecommendation {
    system: "Madera CLT y Entramado Ligero",
    justification: "Su enfoque estratégico en la sostenibilidad y su preferencia por acabados naturales hacen que la Madera Contralaminada (CLT) sea la opción óptima. Actúa como un sumidero de carbono natural y es ideal para proyectos de alta eficiencia energética.",
    features: &[
        "Sostenibilidad superior (Sumidero de CO2)",
        "Precisión milimétrica y calidez natural",
        "Ahorro de tiempo en ejecución (30-40%)",
    ],
    companies: &["Egoin", "011h", "Medgon", "Lignum Tech", "Arquima"],
};

pub const STEEL_FRAME: SystemRecommendation = SystemRecommendation {
    system: "Steel Frame (Entramado Ligero de Acero)",
    justification: "Debido a la importancia crítica de la ligereza de la estructura, recomendamos el sistema Steel Frame. Es ideal para remontas sobre edificios existentes o terrenos con baja capacidad portante.",
    features: &[
        "Extremadamente ligero",
        "Alta precisión y rapidez",
        "Ideal para rehabilitaciones y ampliaciones",
    ],
    companies: &["Metalcasa", "Viviendas Steel Frame", "IDOM"],
};

pub const CONCRETE_PANELS_2D: SystemRecommendation = SystemRecommendation {
    system: "Paneles 2D de Hormigón",
    justification: "Para un objetivo de coste competitivo con acabado en hormigón, los Paneles 2D prefabricados son la solución estándar en el mercado. Ofrecen una excelente relación calidad-precio para vivienda social.",
    features: &[
        "Coste muy competitivo (~1.300 €/m²)",
        "Ideal para Vivienda de Protección Oficial (VPO)",
        "Precio cerrado y sin desviaciones",
    ],
    companies: &["Hormipresa", "BauPanel", "Grupo Avintia"],
};

pub const HYBRID_FALLBACK: SystemRecommendation = SystemRecommendation {
    system: "Sistema Híbrido Personalizado",
    justification: "Dadas las características mixtas de su proyecto, se recomienda un sistema híbrido que combine elementos prefabricados 2D con construcción tradicional en puntos críticos.",
    features: &[
        "Adaptabilidad total",
        "Mejora de plazos en zonas repetitivas",
        "Control de costes",
    ],
    companies: &["Consultar especialistas de SALAS"],
};

/// First matching rule wins; rule order is part of the contract.
pub fn recommend(inputs: &RecommendationInputs) -> SystemRecommendation {
    if inputs.height == Some(AnswerValue::Favorable)
        && inputs.driver == Some(StrategicDriver::StructuralFlexibility)
    {
        return PORTICO_SYSTEMS;
    }

    if inputs.driver == Some(StrategicDriver::SpeedRoi)
        && inputs.standardization == Some(AnswerValue::Favorable)
    {
        return VOLUMETRIC_3D;
    }

    if inputs.driver == Some(StrategicDriver::Sustainability)
        && inputs.finish == Some(FinishPreference::Wood)
    {
        return CLT_TIMBER;
    }

    if inputs.lightness == Some(LightnessImportance::Critical) {
        return STEEL_FRAME;
    }

    if inputs.driver == Some(StrategicDriver::CompetitiveCost)
        && inputs.finish == Some(FinishPreference::Concrete)
    {
        return CONCRETE_PANELS_2D;
    }

    HYBRID_FALLBACK
}
