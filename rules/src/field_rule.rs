use regex::Regex;
use std::sync::LazyLock;

/// Exactly one `@`, at least one `.` after it, no whitespace.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern should compile"));

/// A predicate applied to a field's value when its form is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required,
    Email,
}

impl FieldRule {
    /// Values are trimmed before being checked.
    pub fn accepts(&self, value: &str) -> bool {
        let value = value.trim();
        match self {
            FieldRule::Required => is_not_blank(value),
            FieldRule::Email => is_email(value),
        }
    }
}

pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
