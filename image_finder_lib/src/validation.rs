use crate::error::FinderError;

/// Longest accepted query, in characters.
pub const MAX_QUERY_LENGTH: usize = 100;

/// Strip ASCII control characters (except space), trim whitespace, and
/// enforce the 1..=[`MAX_QUERY_LENGTH`] character window.
pub fn sanitize_query(input: &str) -> Result<String, FinderError> {
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(FinderError::InvalidQuery(
            "query is empty after sanitization".to_string(),
        ));
    }
    let len = sanitized.chars().count();
    if len > MAX_QUERY_LENGTH {
        return Err(FinderError::InvalidQuery(format!(
            "query is {} characters, maximum is {}",
            len, MAX_QUERY_LENGTH
        )));
    }
    Ok(sanitized)
}
