use serde::{Deserialize, Serialize};

/// Lifecycle state of a development, using the labels the source table
/// carries. Rows with an unknown label are mapped to `EnProyecto`
/// during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[serde(rename = "En proyecto")]
    EnProyecto,
    #[serde(rename = "En Construcción")]
    EnConstruccion,
    #[serde(rename = "Completado")]
    Completado,
    #[serde(rename = "Concurso")]
    Concurso,
}

impl ProjectStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::EnProyecto,
            Self::EnConstruccion,
            Self::Completado,
            Self::Concurso,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::EnProyecto => "En proyecto",
            Self::EnConstruccion => "En Construcción",
            Self::Completado => "Completado",
            Self::Concurso => "Concurso",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|status| status.label() == label)
    }

    /// Style class the catalog UI attaches to the status badge.
    pub const fn badge_style(self) -> &'static str {
        match self {
            Self::Completado => "bg-orange-100 text-orange-800 border-orange-200",
            Self::EnProyecto => "bg-blue-100 text-blue-800 border-blue-200",
            Self::EnConstruccion => "bg-cyan-100 text-cyan-800 border-cyan-200",
            Self::Concurso => "bg-gray-100 text-gray-800 border-gray-200",
        }
    }

    /// Tender entries are rendered muted in every listing.
    pub const fn is_muted(self) -> bool {
        matches!(self, Self::Concurso)
    }
}

/// Geographic point for the map view. Rows without coordinates fall
/// back to the Madrid city centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub const MADRID_FALLBACK: Self = Self {
        lat: 40.4168,
        lng: -3.7038,
    };
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::MADRID_FALLBACK
    }
}

/// One development project as served by the backend table. String
/// fields keep the source's free-text form, with `-` standing in for
/// unknown values; numeric columns (floors, units, surfaces) stay as
/// text because the table stores them that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub ref_code: String,
    pub name: String,
    pub location: String,
    pub status: ProjectStatus,
    pub floors: String,
    pub units: String,
    pub surface: String,
    pub size: String,
    pub community: String,
    pub province: String,
    pub business_type: String,
    pub regime: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub cadastral_ref: Option<String>,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub architect: Option<String>,
    #[serde(default)]
    pub builder: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub cost_per_m2: Option<String>,
    #[serde(default)]
    pub sales_volume: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub typology: Option<String>,
    #[serde(default)]
    pub subtypology: Option<String>,
    #[serde(default)]
    pub roof_type: Option<String>,
    pub floors_below_ground: String,
    pub surface_below_ground: String,
    pub total_floors: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub plan_url: Option<String>,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(default)]
    pub coordinates: Coordinates,
}

impl Project {
    /// Minimal constructor used by tests and the demo dataset; the
    /// descriptive fields start unknown.
    pub fn bare(ref_code: &str, name: &str, location: &str, status: ProjectStatus) -> Self {
        Self {
            ref_code: ref_code.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            status,
            floors: "-".to_string(),
            units: "-".to_string(),
            surface: "-".to_string(),
            size: "-".to_string(),
            community: "-".to_string(),
            province: "-".to_string(),
            business_type: "-".to_string(),
            regime: "-".to_string(),
            address: None,
            cadastral_ref: None,
            developer: None,
            architect: None,
            builder: None,
            budget: None,
            cost_per_m2: None,
            sales_volume: None,
            description: None,
            typology: None,
            subtypology: None,
            roof_type: None,
            floors_below_ground: "-".to_string(),
            surface_below_ground: "-".to_string(),
            total_floors: "-".to_string(),
            notes: String::new(),
            image_url: None,
            plan_url: None,
            pdf_url: None,
            coordinates: Coordinates::MADRID_FALLBACK,
        }
    }
}

/// Ordering applied to the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Descending numeric order on the reference code.
    #[default]
    Recent,
    /// Lexicographic ascending on the project name.
    Name,
    /// Ascending numeric order on the unit count.
    Units,
}

impl SortKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recent => "Más recientes",
            Self::Name => "Nombre (A-Z)",
            Self::Units => "Viviendas (Menor a mayor)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_tender_status_is_muted() {
        for status in ProjectStatus::ordered() {
            assert_eq!(status.is_muted(), status == ProjectStatus::Concurso);
        }
    }

    #[test]
    fn badge_styles_are_distinct_per_status() {
        let styles: std::collections::BTreeSet<&str> = ProjectStatus::ordered()
            .into_iter()
            .map(ProjectStatus::badge_style)
            .collect();
        assert_eq!(styles.len(), 4);
    }

    #[test]
    fn status_round_trips_through_label() {
        for status in ProjectStatus::ordered() {
            assert_eq!(ProjectStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(ProjectStatus::from_label("Desconocido"), None);
    }

    #[test]
    fn status_serializes_as_source_label() {
        let json = serde_json::to_string(&ProjectStatus::EnConstruccion).expect("serialize");
        assert_eq!(json, "\"En Construcción\"");
    }
}
