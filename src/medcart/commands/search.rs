use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Medicine;

/// Queries shorter than this return nothing. A one-character query would
/// match most of the catalog on every keystroke; the cutoff is a UX rule,
/// not an error.
pub const MIN_QUERY_LEN: usize = 2;

/// Filters the catalog with a free-text query.
///
/// A medicine matches when the lowercased query is a substring of its name,
/// active ingredient, manufacturer or country (each optional field checked
/// only when present). Matches keep catalog order; there is no ranking.
pub fn run(catalog: &Catalog, term: &str) -> Result<CmdResult> {
    if term.chars().count() < MIN_QUERY_LEN {
        return Ok(CmdResult::default());
    }

    let needle = term.to_lowercase();
    let hits: Vec<Medicine> = catalog
        .iter()
        .filter(|m| matches(m, &needle))
        .cloned()
        .collect();

    Ok(CmdResult::default().with_medicines(hits))
}

fn matches(medicine: &Medicine, needle: &str) -> bool {
    let field_contains = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|v| v.to_lowercase().contains(needle))
    };

    medicine.name.to_lowercase().contains(needle)
        || medicine.active_ingredient.to_lowercase().contains(needle)
        || field_contains(&medicine.manufacturer)
        || field_contains(&medicine.country)
}
