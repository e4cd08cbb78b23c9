//! End-to-end checks for the portfolio filter engine, the derived
//! filter options and the CSV sheet export, over a realistic record set.

use chrono::NaiveDate;
use promo_portfolio::catalog::{
    compute_options, compute_visible, portfolio_sheet, DimensionFilter, FilterSpec, Project,
    ProjectStatus, SortKey,
};

fn project(
    ref_code: &str,
    name: &str,
    location: &str,
    status: ProjectStatus,
    floors: &str,
    units: &str,
    size: &str,
) -> Project {
    let mut project = Project::bare(ref_code, name, location, status);
    project.floors = floors.to_string();
    project.units = units.to_string();
    project.size = size.to_string();
    project
}

fn portfolio() -> Vec<Project> {
    vec![
        project(
            "2104",
            "Residencial Aurora",
            "Getafe",
            ProjectStatus::EnConstruccion,
            "6",
            "48",
            "Mediana",
        ),
        project(
            "2099",
            "Edificio Cervantes",
            "Madrid",
            ProjectStatus::Completado,
            "12",
            "120",
            "Grande",
        ),
        project(
            "2087",
            "Torre Manzanares",
            "Madrid",
            ProjectStatus::EnProyecto,
            "18",
            "96",
            "Grande",
        ),
        project(
            "2110",
            "Residencial Alcores",
            "Sevilla",
            ProjectStatus::Concurso,
            "4",
            "-",
            "Pequeña",
        ),
        project(
            "2081",
            "Residencial Turia",
            "Valencia",
            ProjectStatus::EnProyecto,
            "-",
            "-",
            "-",
        ),
    ]
}

#[test]
fn default_view_shows_everything_newest_first() {
    let visible = compute_visible(&portfolio(), &FilterSpec::default());
    let refs: Vec<&str> = visible.iter().map(|p| p.ref_code.as_str()).collect();
    assert_eq!(refs, ["2110", "2104", "2099", "2087", "2081"]);
}

#[test]
fn filters_compose_as_conjunction() {
    let spec = FilterSpec {
        location_term: "madrid".to_string(),
        status: DimensionFilter::any_of(["En proyecto".to_string()]),
        ..FilterSpec::default()
    };
    let visible = compute_visible(&portfolio(), &spec);
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Torre Manzanares");
}

#[test]
fn search_matches_name_and_reference_code() {
    let by_name = FilterSpec {
        search_term: "cervantes".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(compute_visible(&portfolio(), &by_name).len(), 1);

    let by_ref = FilterSpec {
        search_term: "2087".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(compute_visible(&portfolio(), &by_ref)[0].ref_code, "2087");
}

#[test]
fn unit_sort_treats_missing_counts_as_zero() {
    let spec = FilterSpec {
        sort: SortKey::Units,
        ..FilterSpec::default()
    };
    let visible = compute_visible(&portfolio(), &spec);
    // Ascending by unit count; the two "-" records come first.
    assert_eq!(visible[0].units, "-");
    assert_eq!(visible[4].units, "120");
}

#[test]
fn narrowing_a_filter_never_grows_the_result() {
    let records = portfolio();
    let broad = FilterSpec {
        status: DimensionFilter::any_of(["En proyecto".to_string(), "Completado".to_string()]),
        ..FilterSpec::default()
    };
    let narrow = FilterSpec {
        status: DimensionFilter::any_of(["En proyecto".to_string()]),
        ..FilterSpec::default()
    };

    let broad_refs: Vec<String> = compute_visible(&records, &broad)
        .into_iter()
        .map(|p| p.ref_code)
        .collect();
    let narrow_refs: Vec<String> = compute_visible(&records, &narrow)
        .into_iter()
        .map(|p| p.ref_code)
        .collect();

    assert!(narrow_refs.len() <= broad_refs.len());
    assert!(narrow_refs.iter().all(|r| broad_refs.contains(r)));
}

#[test]
fn options_reflect_the_record_set_without_placeholders() {
    let options = compute_options(&portfolio());
    assert_eq!(
        options.status,
        ["Completado", "Concurso", "En Construcción", "En proyecto"]
    );
    // All present floor values parse, so the axis sorts numerically.
    assert_eq!(options.floors, ["4", "6", "12", "18"]);
    assert!(!options.size.contains(&"-".to_string()));
}

#[test]
fn sheet_export_covers_the_visible_set() {
    let today = NaiveDate::from_ymd_opt(2026, 8, 28).expect("valid date");
    let spec = FilterSpec {
        status: DimensionFilter::any_of(["En proyecto".to_string()]),
        ..FilterSpec::default()
    };
    let sheet = portfolio_sheet(&portfolio(), &spec, today);

    assert_eq!(sheet.visible, 2);
    assert_eq!(sheet.total_units, 96);

    let mut buffer = Vec::new();
    sheet.write_csv(&mut buffer).expect("csv writes");
    let csv = String::from_utf8(buffer).expect("utf8");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("Cod,Promoción,Municipio,Estado,Plantas,Viviendas,Rango")
    );
    assert_eq!(lines.count(), 2);
}
