//!
//! # Search predicate
//!
//! The term is spliced into the predicate unescaped. Callers must run
//! [`validate_search_input`] first; it admits only ASCII letters, digits,
//! `-`, `_` and the `%` wildcard.
//!

use crate::CliError;

const SEARCH_FIELDS: [&str; 5] = ["name", "owner", "cloud_provider", "region", "status"];

/// Substring match of `search` against every searchable field, `None` for an
/// empty term.
pub fn build_search_query(search: &str) -> Option<String> {
    if search.is_empty() {
        return None;
    }

    let clauses: Vec<String> = SEARCH_FIELDS
        .iter()
        .map(|field| format!("{field} like %{search}%"))
        .collect();
    Some(clauses.join(" or "))
}

pub fn validate_search_input(search: &str) -> Result<(), CliError> {
    let good_chars = search
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '%'));

    if good_chars {
        Ok(())
    } else {
        Err(CliError::InvalidSearch(search.to_owned()))
    }
}
