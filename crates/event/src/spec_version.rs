//! CloudEvents specification versions and their reserved attribute tables.

use std::fmt;
use std::str::FromStr;

use crate::{AttributeKind, EventError};

const V03_ATTRIBUTES: &[(&str, AttributeKind)] = &[
    ("specversion", AttributeKind::String),
    ("id", AttributeKind::String),
    ("source", AttributeKind::Uri),
    ("type", AttributeKind::String),
    ("datacontenttype", AttributeKind::String),
    ("datacontentencoding", AttributeKind::String),
    ("schemaurl", AttributeKind::Uri),
    ("subject", AttributeKind::String),
    ("time", AttributeKind::Timestamp),
];

const V10_ATTRIBUTES: &[(&str, AttributeKind)] = &[
    ("specversion", AttributeKind::String),
    ("id", AttributeKind::String),
    ("source", AttributeKind::Uri),
    ("type", AttributeKind::String),
    ("datacontenttype", AttributeKind::String),
    ("dataschema", AttributeKind::Uri),
    ("subject", AttributeKind::String),
    ("time", AttributeKind::Timestamp),
];

/// A CloudEvents specification version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpecVersion {
    V03,
    #[default]
    V10,
}

impl SpecVersion {
    /// The wire form of the version, as carried in `specversion`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpecVersion::V03 => "0.3",
            SpecVersion::V10 => "1.0",
        }
    }

    /// Reserved context attributes of this version with their declared types.
    pub fn attributes(&self) -> &'static [(&'static str, AttributeKind)] {
        match self {
            SpecVersion::V03 => V03_ATTRIBUTES,
            SpecVersion::V10 => V10_ATTRIBUTES,
        }
    }

    /// Declared type of a reserved attribute, `None` for extensions.
    pub fn attribute_kind(&self, name: &str) -> Option<AttributeKind> {
        self.attributes()
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.attribute_kind(name).is_some()
    }

    /// Name of the attribute that carries the data schema URI.
    pub fn data_schema_attribute(&self) -> &'static str {
        match self {
            SpecVersion::V03 => "schemaurl",
            SpecVersion::V10 => "dataschema",
        }
    }
}

impl fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpecVersion {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0.3" => Ok(SpecVersion::V03),
            "1.0" => Ok(SpecVersion::V10),
            other => Err(EventError::UnknownSpecVersion(other.to_owned())),
        }
    }
}

impl TryFrom<&str> for SpecVersion {
    type Error = EventError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_versions() {
        assert_eq!("1.0".parse::<SpecVersion>().unwrap(), SpecVersion::V10);
        assert_eq!("0.3".parse::<SpecVersion>().unwrap(), SpecVersion::V03);
        assert_eq!(
            "0.2".parse::<SpecVersion>(),
            Err(EventError::UnknownSpecVersion("0.2".into()))
        );
    }

    #[test]
    fn schema_attribute_differs_per_version() {
        assert_eq!(
            SpecVersion::V10.attribute_kind("dataschema"),
            Some(AttributeKind::Uri)
        );
        assert_eq!(SpecVersion::V10.attribute_kind("schemaurl"), None);
        assert_eq!(
            SpecVersion::V03.attribute_kind("schemaurl"),
            Some(AttributeKind::Uri)
        );
        assert!(SpecVersion::V03.is_reserved("datacontentencoding"));
        assert!(!SpecVersion::V10.is_reserved("datacontentencoding"));
    }
}
