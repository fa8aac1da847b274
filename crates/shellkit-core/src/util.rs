//! Small value helpers

/// Spellings accepted as "true" by [`to_bool`], compared case-insensitively.
const TRUTHY: &[&str] = &[
    "true",
    "1",
    "t",
    "y",
    "yes",
    "yeah",
    "yup",
    "certainly",
    "uh-huh",
    "aye",
];

/// Parse a loosely-typed boolean the way shell users write them.
///
/// Anything not on the accept-list is false, including the empty string.
pub fn to_bool(value: &str) -> bool {
    TRUTHY.contains(&value.to_lowercase().as_str())
}

/// Fresh v4 UUID in hyphenated string form.
pub fn new_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// `Some(s)` when `s` has content, `None` when it is empty.
pub fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}
