//! URI-reference attribute values.

use std::fmt;
use std::str::FromStr;

use crate::EventError;

/// A URI reference (absolute URI or relative reference).
///
/// Only the lexical shape is checked: non-empty, no whitespace or control
/// characters. Resolution and scheme checks are left to the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UriRef(String);

impl UriRef {
    pub fn parse(s: &str) -> Result<Self, EventError> {
        if s.is_empty() || s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(EventError::InvalidUri(s.to_owned()));
        }
        Ok(UriRef(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for UriRef {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UriRef::parse(s)
    }
}

impl AsRef<str> for UriRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_absolute_and_relative_references() {
        for s in ["https://github.com/cloudevents/spec/pull", "/sensors/1", "urn:x"] {
            assert_eq!(UriRef::parse(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        for s in ["", "a b", "line\nbreak"] {
            assert_eq!(UriRef::parse(s), Err(EventError::InvalidUri(s.into())));
        }
    }
}
