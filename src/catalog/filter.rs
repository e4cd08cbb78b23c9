use super::domain::{Project, SortKey};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Constraint on a single filterable dimension.
///
/// `Unconstrained` accepts every value; `AnyOf` accepts only members of
/// the set, so an empty `AnyOf` set rejects every record. Callers that
/// want "no constraint" must say so explicitly instead of passing an
/// empty selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DimensionFilter {
    #[default]
    Unconstrained,
    AnyOf(BTreeSet<String>),
}

impl DimensionFilter {
    pub fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::AnyOf(values.into_iter().map(Into::into).collect())
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Unconstrained => true,
            Self::AnyOf(allowed) => allowed.contains(value),
        }
    }

    pub fn is_unconstrained(&self) -> bool {
        matches!(self, Self::Unconstrained)
    }
}

/// User-chosen constraints plus the sort key. A value object: the
/// owning layer replaces it wholesale and re-runs the pure queries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    pub search_term: String,
    pub location_term: String,
    pub status: DimensionFilter,
    pub business_type: DimensionFilter,
    pub regime: DimensionFilter,
    pub floors: DimensionFilter,
    pub size: DimensionFilter,
    pub sort: SortKey,
}

impl FilterSpec {
    /// The cleared state: empty terms, every dimension unconstrained,
    /// default recency sort.
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// Integer prefix of a free-text numeric cell, mirroring how the source
/// coerced counts: optional sign, leading digits, trailing text
/// ignored. `"-"` and fully non-numeric text yield `None`.
pub(crate) fn leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let prefix: String = digits.chars().take_while(char::is_ascii_digit).collect();
    if prefix.is_empty() {
        return None;
    }
    let value = prefix.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn matches(project: &Project, spec: &FilterSpec) -> bool {
    let matches_search = contains_ignore_case(&project.name, &spec.search_term)
        || contains_ignore_case(&project.ref_code, &spec.search_term);

    matches_search
        && contains_ignore_case(&project.location, &spec.location_term)
        && spec.status.accepts(project.status.label())
        && spec.business_type.accepts(&project.business_type)
        && spec.regime.accepts(&project.regime)
        && spec.floors.accepts(&project.floors)
        && spec.size.accepts(&project.size)
}

fn compare(a: &Project, b: &Project, sort: SortKey) -> Ordering {
    match sort {
        SortKey::Name => a.name.cmp(&b.name),
        SortKey::Units => {
            let units_a = leading_int(&a.units).unwrap_or(0);
            let units_b = leading_int(&b.units).unwrap_or(0);
            units_a.cmp(&units_b)
        }
        // Recency is descending numeric on the reference code. The
        // source compared parseInt results, which leaves non-numeric
        // refs in NaN-undefined order; here non-numeric refs sort after
        // every numeric one and keep their input order.
        SortKey::Recent => match (leading_int(&a.ref_code), leading_int(&b.ref_code)) {
            (Some(ref_a), Some(ref_b)) => ref_b.cmp(&ref_a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

/// Filter and order the record set. Pure and deterministic: ties keep
/// the input order (stable sort), malformed numeric cells degrade to 0
/// or tail placement instead of failing.
pub fn compute_visible(records: &[Project], spec: &FilterSpec) -> Vec<Project> {
    let mut visible: Vec<Project> = records
        .iter()
        .filter(|project| matches(project, spec))
        .cloned()
        .collect();
    visible.sort_by(|a, b| compare(a, b, spec.sort));
    visible
}
