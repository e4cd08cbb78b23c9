use super::domain::Project;
use super::filter::{compute_visible, leading_int, FilterSpec};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

/// Serializable snapshot of the visible list, handed to the external
/// sheet renderer. The core never renders; it only shapes the data.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSheet {
    pub generated_on: NaiveDate,
    pub visible: usize,
    pub total_units: i64,
    pub rows: Vec<SheetRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SheetRow {
    pub ref_code: String,
    pub name: String,
    pub location: String,
    pub status: &'static str,
    pub floors: String,
    pub units: String,
    pub size: String,
}

pub fn portfolio_sheet(records: &[Project], spec: &FilterSpec, today: NaiveDate) -> PortfolioSheet {
    let visible = compute_visible(records, spec);
    let total_units = visible
        .iter()
        .map(|project| leading_int(&project.units).unwrap_or(0))
        .sum();
    let rows: Vec<SheetRow> = visible
        .into_iter()
        .map(|project| SheetRow {
            status: project.status.label(),
            ref_code: project.ref_code,
            name: project.name,
            location: project.location,
            floors: project.floors,
            units: project.units,
            size: project.size,
        })
        .collect();

    PortfolioSheet {
        generated_on: today,
        visible: rows.len(),
        total_units,
        rows,
    }
}

impl PortfolioSheet {
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record([
            "Cod",
            "Promoción",
            "Municipio",
            "Estado",
            "Plantas",
            "Viviendas",
            "Rango",
        ])?;
        for row in &self.rows {
            out.write_record([
                row.ref_code.as_str(),
                row.name.as_str(),
                row.location.as_str(),
                row.status,
                row.floors.as_str(),
                row.units.as_str(),
                row.size.as_str(),
            ])?;
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::domain::ProjectStatus;

    fn dated() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 28).expect("valid date")
    }

    fn records() -> Vec<Project> {
        let mut a = Project::bare("10", "Alpha", "Madrid", ProjectStatus::Completado);
        a.units = "24".to_string();
        let mut b = Project::bare("20", "Beta", "Sevilla", ProjectStatus::Concurso);
        b.units = "-".to_string();
        vec![a, b]
    }

    #[test]
    fn sheet_counts_visible_rows_and_sums_units() {
        let sheet = portfolio_sheet(&records(), &FilterSpec::cleared(), dated());
        assert_eq!(sheet.visible, 2);
        assert_eq!(sheet.total_units, 24);
        assert_eq!(sheet.rows[0].ref_code, "20");
    }

    #[test]
    fn csv_output_has_header_plus_one_line_per_row() {
        let sheet = portfolio_sheet(&records(), &FilterSpec::cleared(), dated());
        let mut buffer = Vec::new();
        sheet.write_csv(&mut buffer).expect("csv writes");
        let text = String::from_utf8(buffer).expect("utf8 csv");
        assert_eq!(text.lines().count(), 3);
        assert!(text.starts_with("Cod,"));
        assert!(text.contains("Beta"));
    }
}
