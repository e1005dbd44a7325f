use crate::domain::models::Prefix;

/// A query is valid iff something remains after stripping every prefix token.
///
/// Tokens are removed in vocabulary order, and only the first occurrence of
/// each token is removed; a query is expected to carry at most one tag per
/// category. This mirrors the submit-enabled check in the UI.
#[must_use]
pub fn is_valid_query(query: &str) -> bool {
    let mut remaining = query.to_string();
    for prefix in Prefix::ALL {
        remaining = remaining.replacen(&prefix.token(), "", 1);
    }
    !remaining.trim().is_empty()
}

/// Add the prefix token to the front of the query, or remove its first
/// occurrence if it is already present. Surrounding whitespace is trimmed
/// after either mutation, so a double toggle restores the original query up
/// to leading/trailing whitespace.
#[must_use]
pub fn toggle_prefix(query: &str, prefix: Prefix) -> String {
    let token = prefix.token();
    if query.contains(&token) {
        query.replacen(&token, "", 1).trim().to_string()
    } else {
        format!("{token}{query}").trim().to_string()
    }
}

/// Whether the query currently carries the given prefix token. Drives the
/// checkbox state in the advanced panel.
#[must_use]
pub fn has_prefix(query: &str, prefix: Prefix) -> bool {
    query.contains(&prefix.token())
}
