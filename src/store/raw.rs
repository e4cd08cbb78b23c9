use crate::catalog::domain::{Coordinates, Project, ProjectStatus};
use serde::Deserialize;
use serde_json::Value;

/// One row of the hosted `projects` table, keyed by the source-system
/// column labels. Every column is optional; the mapping into
/// [`Project`] is total and supplies the documented fallbacks, so a
/// half-filled row can never break the list view.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProjectRow {
    #[serde(rename = "Cod", default)]
    pub cod: Value,
    #[serde(rename = "Promoción", default)]
    pub promocion: Value,
    #[serde(rename = "Municipio", default)]
    pub municipio: Value,
    #[serde(rename = "Estado2", default)]
    pub estado: Value,
    #[serde(rename = "Nº Plantas SR", default)]
    pub plantas_sr: Value,
    #[serde(rename = "Nº VIV./Nº HAB.", default)]
    pub viviendas: Value,
    #[serde(rename = "Sup Const. SR", default)]
    pub superficie_sr: Value,
    #[serde(rename = "Rango", default)]
    pub rango: Value,
    #[serde(rename = "CCAA", default)]
    pub ccaa: Value,
    #[serde(rename = "Província", default)]
    pub provincia: Value,
    #[serde(rename = "TIPO de Negocio", default)]
    pub tipo_negocio: Value,
    #[serde(rename = "Régimen", default)]
    pub regimen: Value,
    #[serde(rename = "Dirección", default)]
    pub direccion: Value,
    #[serde(rename = "Referencia Catastral", default)]
    pub referencia_catastral: Value,
    #[serde(rename = "Promotora", default)]
    pub promotora: Value,
    #[serde(rename = "Arquitecto", default)]
    pub arquitecto: Value,
    #[serde(rename = "Constructora", default)]
    pub constructora: Value,
    #[serde(rename = "Presupuesto", default)]
    pub presupuesto: Value,
    #[serde(rename = "Coste m2", default)]
    pub coste_m2: Value,
    #[serde(rename = "Ventas", default)]
    pub ventas: Value,
    #[serde(rename = "Descripción", default)]
    pub descripcion: Value,
    #[serde(rename = "Tipología", default)]
    pub tipologia: Value,
    #[serde(rename = "Subtipología", default)]
    pub subtipologia: Value,
    #[serde(rename = "Tipo CUB.", default)]
    pub tipo_cubierta: Value,
    #[serde(rename = "Nº Pl. BR", default)]
    pub plantas_br: Value,
    #[serde(rename = "Sup Const. BR", default)]
    pub superficie_br: Value,
    #[serde(rename = "Nº TOT Pl", default)]
    pub plantas_totales: Value,
    #[serde(rename = "Notas", default)]
    pub notas: Value,
    #[serde(rename = "Link IMG", default)]
    pub link_img: Value,
    #[serde(rename = "LINK MIN", default)]
    pub link_min: Value,
    #[serde(rename = "LINK PDF", default)]
    pub link_pdf: Value,
    #[serde(rename = "Latitud", default)]
    pub latitud: Value,
    #[serde(rename = "Longitud", default)]
    pub longitud: Value,
}

/// Text content of a cell: the table mixes string and numeric columns,
/// so numbers are rendered in their decimal form. Blank strings count
/// as absent.
fn cell_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn text_or(value: &Value, fallback: &str) -> String {
    cell_text(value).unwrap_or_else(|| fallback.to_string())
}

impl RawProjectRow {
    pub fn into_project(self) -> Project {
        let status = cell_text(&self.estado)
            .and_then(|label| ProjectStatus::from_label(&label))
            .unwrap_or(ProjectStatus::EnProyecto);

        let coordinates = match (self.latitud.as_f64(), self.longitud.as_f64()) {
            (Some(lat), Some(lng)) => Coordinates { lat, lng },
            _ => Coordinates::MADRID_FALLBACK,
        };

        Project {
            ref_code: text_or(&self.cod, "-"),
            name: text_or(&self.promocion, "Promoción sin nombre"),
            location: text_or(&self.municipio, "Municipio no especificado"),
            status,
            floors: text_or(&self.plantas_sr, "-"),
            units: text_or(&self.viviendas, "-"),
            surface: text_or(&self.superficie_sr, "-"),
            size: text_or(&self.rango, "-"),
            community: text_or(&self.ccaa, "-"),
            province: text_or(&self.provincia, "-"),
            business_type: text_or(&self.tipo_negocio, "-"),
            regime: text_or(&self.regimen, "-"),
            address: cell_text(&self.direccion),
            cadastral_ref: cell_text(&self.referencia_catastral),
            developer: cell_text(&self.promotora),
            architect: cell_text(&self.arquitecto),
            builder: cell_text(&self.constructora),
            budget: cell_text(&self.presupuesto),
            cost_per_m2: cell_text(&self.coste_m2),
            sales_volume: cell_text(&self.ventas),
            description: cell_text(&self.descripcion),
            typology: cell_text(&self.tipologia),
            subtypology: cell_text(&self.subtipologia),
            roof_type: cell_text(&self.tipo_cubierta),
            floors_below_ground: text_or(&self.plantas_br, "-"),
            surface_below_ground: text_or(&self.superficie_br, "-"),
            total_floors: text_or(&self.plantas_totales, "-"),
            notes: cell_text(&self.notas).unwrap_or_default(),
            image_url: cell_text(&self.link_img).or_else(|| cell_text(&self.link_min)),
            plan_url: cell_text(&self.link_min),
            pdf_url: cell_text(&self.link_pdf),
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn full_row_maps_every_column() {
        let row: RawProjectRow = serde_json::from_value(json!({
            "Cod": 2101,
            "Promoción": "Residencial Aurora",
            "Municipio": "Getafe",
            "Estado2": "En Construcción",
            "Nº Plantas SR": "6",
            "Nº VIV./Nº HAB.": 84,
            "Sup Const. SR": "7.412,50",
            "Rango": "Grande",
            "CCAA": "Madrid",
            "Província": "Madrid",
            "TIPO de Negocio": "BTR",
            "Régimen": "Alquiler",
            "Notas": "Obra en fase de estructura",
            "Latitud": 40.3083,
            "Longitud": -3.7327
        }))
        .expect("row deserializes");

        let project = row.into_project();
        assert_eq!(project.ref_code, "2101");
        assert_eq!(project.name, "Residencial Aurora");
        assert_eq!(project.status, ProjectStatus::EnConstruccion);
        assert_eq!(project.units, "84");
        assert_eq!(project.surface, "7.412,50");
        assert_eq!(project.notes, "Obra en fase de estructura");
        assert!((project.coordinates.lat - 40.3083).abs() < 1e-9);
    }

    #[test]
    fn empty_row_falls_back_everywhere() {
        let row: RawProjectRow = serde_json::from_value(json!({})).expect("empty row accepted");
        let project = row.into_project();
        assert_eq!(project.ref_code, "-");
        assert_eq!(project.name, "Promoción sin nombre");
        assert_eq!(project.location, "Municipio no especificado");
        assert_eq!(project.status, ProjectStatus::EnProyecto);
        assert_eq!(project.floors, "-");
        assert_eq!(project.notes, "");
        assert_eq!(project.coordinates, Coordinates::MADRID_FALLBACK);
    }

    #[test]
    fn unknown_status_label_defaults_to_en_proyecto() {
        let row: RawProjectRow =
            serde_json::from_value(json!({ "Estado2": "Archivado" })).expect("row deserializes");
        assert_eq!(row.into_project().status, ProjectStatus::EnProyecto);
    }

    #[test]
    fn image_prefers_main_link_then_thumbnail() {
        let row: RawProjectRow = serde_json::from_value(json!({
            "LINK MIN": "https://cdn.example/min.jpg"
        }))
        .expect("row deserializes");
        let project = row.into_project();
        assert_eq!(
            project.image_url.as_deref(),
            Some("https://cdn.example/min.jpg")
        );
    }
}
