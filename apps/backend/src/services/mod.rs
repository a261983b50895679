//! Domain services. Validate input, call repositories, return `AppError`.

pub mod participants;
pub mod phase;
pub mod votes;

/// Trimmed value, or `None` when missing or blank.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
