use super::domain::Project;
use super::filter::leading_int;
use serde::Serialize;

/// Distinct values available per filterable dimension, derived from the
/// full record set whenever it changes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub status: Vec<String>,
    pub business_type: Vec<String>,
    pub regime: Vec<String>,
    pub floors: Vec<String>,
    pub size: Vec<String>,
}

const UNKNOWN_SENTINEL: &str = "-";

fn distinct_values<'a, F>(records: &'a [Project], dimension: F) -> Vec<String>
where
    F: Fn(&'a Project) -> &'a str,
{
    let mut values: Vec<String> = records
        .iter()
        .map(dimension)
        .filter(|value| !value.is_empty() && *value != UNKNOWN_SENTINEL)
        .map(str::to_string)
        .collect();
    values.sort();
    values.dedup();
    values
}

/// Floor counts are stored as free text. When every candidate carries a
/// leading integer the options sort numerically ascending, coercing
/// annotated labels like `6 dúplex` by their prefix the same way unit
/// counts are read; one label with no digits at all switches the whole
/// list back to lexicographic order.
fn sort_floor_labels(values: &mut [String]) {
    let parsed: Option<Vec<i64>> = values.iter().map(|value| leading_int(value)).collect();
    if let Some(mut keyed) = parsed.map(|numbers| {
        numbers
            .into_iter()
            .zip(values.iter().cloned())
            .collect::<Vec<_>>()
    }) {
        keyed.sort_by_key(|(number, _)| *number);
        for (slot, (_, label)) in values.iter_mut().zip(keyed) {
            *slot = label;
        }
    }
}

/// Pure function of the record set; never contains the empty string or
/// the `-` sentinel.
pub fn compute_options(records: &[Project]) -> FilterOptions {
    let mut floors = distinct_values(records, |p| p.floors.as_str());
    sort_floor_labels(&mut floors);

    FilterOptions {
        status: distinct_values(records, |p| p.status.label()),
        business_type: distinct_values(records, |p| p.business_type.as_str()),
        regime: distinct_values(records, |p| p.regime.as_str()),
        floors,
        size: distinct_values(records, |p| p.size.as_str()),
    }
}
