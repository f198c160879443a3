//! Validated hyperlink value type.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=]{1,256}\.[a-zA-Z0-9()]{1,6}\b([-a-zA-Z0-9()@:%_\+.~#?&/=]*)",
    )
    .expect("link pattern is a valid regex")
});

/// Returned when a value does not contain an http(s) URL.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a valid link")]
pub struct InvalidLink(pub String);

/// A string known to contain an `http://` or `https://` URL.
///
/// The only way to obtain one is `Link::parse`, so holding a `Link` proves the value
/// passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link(String);

impl Link {
    /// Validates `value` as a link.
    ///
    /// # Returns
    /// - `Ok(Link)` - The value contains a URL such as `http://www.example.com/path`
    /// - `Err(InvalidLink)` - No http(s) URL found in the value
    pub fn parse(value: impl Into<String>) -> Result<Self, InvalidLink> {
        let value = value.into();

        if LINK_PATTERN.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(InvalidLink(value))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
