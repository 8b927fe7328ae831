//! Utility functions and types.

use std::fmt;

/// Redacts a secret-bearing string for `Debug` and `Display` output.
///
/// - Empty input renders as `EMPTY`.
/// - Input shorter than 12 characters is entirely hidden.
/// - Longer input keeps its first three and last three characters so that
///   different values stay distinguishable in logs.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl<'a> From<&'a Option<String>> for Redact<'a> {
    fn from(value: &'a Option<String>) -> Self {
        Redact(value.as_deref().unwrap_or_default())
    }
}

impl Redact<'_> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let chars = value.chars().count();
        match chars {
            0 => f.write_str("EMPTY"),
            1..=11 => f.write_str("***"),
            _ => {
                let head: String = value.chars().take(3).collect();
                let tail: String = value.chars().skip(chars - 3).collect();
                write!(f, "{head}***{tail}")
            }
        }
    }
}

impl fmt::Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}

impl fmt::Display for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
