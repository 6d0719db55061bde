use std::fmt;
use std::str::FromStr;

use crate::AmqpBindingError;

/// How an event is laid out in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentMode {
    /// The whole event is one document in the body.
    Structured,
    /// Attributes are application-properties, `data` is the body.
    Binary,
}

impl ContentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentMode::Structured => "structured",
            ContentMode::Binary => "binary",
        }
    }
}

impl fmt::Display for ContentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentMode {
    type Err = AmqpBindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("structured") {
            Ok(ContentMode::Structured)
        } else if s.eq_ignore_ascii_case("binary") {
            Ok(ContentMode::Binary)
        } else {
            Err(AmqpBindingError::InvalidArgument(format!(
                "unknown content mode `{s}`"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Binary".parse::<ContentMode>().unwrap(), ContentMode::Binary);
        assert_eq!(
            "STRUCTURED".parse::<ContentMode>().unwrap(),
            ContentMode::Structured
        );
        assert!(matches!(
            "batch".parse::<ContentMode>(),
            Err(AmqpBindingError::InvalidArgument(_))
        ));
    }
}
