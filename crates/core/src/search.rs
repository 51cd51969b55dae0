//! Title search helpers shared by the storage backends.

/// Normalize a raw `?q=` value.
///
/// Returns `None` for a missing or blank query; callers answer those with
/// an empty result set rather than "match everything".
pub fn normalize_query(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|q| !q.is_empty())
}

/// Case-insensitive substring match of `query` against a recipe title.
pub fn title_matches(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}

/// Escape a search term for use inside a SQL `LIKE` pattern with `ESCAPE '\'`.
pub fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Build a `%term%` pattern for a contains-style `LIKE` match.
pub fn contains_pattern(query: &str) -> String {
    format!("%{}%", escape_like(query))
}
