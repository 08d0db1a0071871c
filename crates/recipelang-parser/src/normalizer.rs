/// Canonical form of one input line: trimmed and lowercased.
///
/// Returns `None` for lines that carry no command (blank or `#` comment).
pub fn normalize(input: &str) -> Option<String> {
    let normalized = input.trim().to_lowercase();
    if normalized.is_empty() || normalized.starts_with('#') {
        None
    } else {
        Some(normalized)
    }
}

/// True for lines the batch driver skips without echoing.
pub fn is_blank_or_comment(input: &str) -> bool {
    let trimmed = input.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

pub fn tokenize(normalized: &str) -> Vec<&str> {
    normalized.split_whitespace().collect()
}
