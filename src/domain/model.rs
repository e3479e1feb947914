use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{Result, SplitError};
use crate::utils::validation;

/// Style identifiers accepted by the resolver, in canonical casing.
pub const CANONICAL_STYLES: [&str; 3] = ["FewestModules", "SmallestModules", "SmallModulesFor"];

/// Style used when the configuration does not name one.
pub const DEFAULT_SPLIT_STYLE: &str = "FewestModules";

/// A validated dot-separated package namespace path, e.g. `com.example.app`.
///
/// Can only be constructed through [`PackagePrefix::parse`], so a held value
/// is grammatically valid by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct PackagePrefix(String);

impl PackagePrefix {
    pub fn parse(value: &str) -> Result<Self> {
        validation::validate_package_prefix(value)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackagePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PackagePrefix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for PackagePrefix {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PackagePrefix {
    type Error = SplitError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

/// Policy governing how compiled module output is partitioned across
/// emitted files. Constructed once per build invocation, immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", content = "packages")]
pub enum SplitStyle {
    /// Minimize the number of emitted files.
    FewestModules,
    /// Maximize granularity: one emitted file per module.
    SmallestModules,
    /// Split boundaries align with the given package prefixes.
    ///
    /// Invariant: non-empty, deduplicated, first-seen order.
    SmallModulesFor(Vec<PackagePrefix>),
}

impl SplitStyle {
    pub fn style_name(&self) -> &'static str {
        match self {
            SplitStyle::FewestModules => "FewestModules",
            SplitStyle::SmallestModules => "SmallestModules",
            SplitStyle::SmallModulesFor(_) => "SmallModulesFor",
        }
    }
}

impl fmt::Display for SplitStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitStyle::FewestModules | SplitStyle::SmallestModules => {
                f.write_str(self.style_name())
            }
            SplitStyle::SmallModulesFor(packages) => {
                let joined: Vec<&str> = packages.iter().map(|p| p.as_str()).collect();
                write!(f, "SmallModulesFor({})", joined.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_prefix_parse() {
        let prefix = PackagePrefix::parse("com.example.app").unwrap();
        assert_eq!(prefix.as_str(), "com.example.app");

        assert!(PackagePrefix::parse("com..bar").is_err());
        assert!(PackagePrefix::parse("").is_err());
    }

    #[test]
    fn test_package_prefix_from_str() {
        let prefix: PackagePrefix = "com.example".parse().unwrap();
        assert_eq!(prefix.to_string(), "com.example");
    }

    #[test]
    fn test_split_style_display() {
        assert_eq!(SplitStyle::FewestModules.to_string(), "FewestModules");

        let style = SplitStyle::SmallModulesFor(vec![
            PackagePrefix::parse("com.foo").unwrap(),
            PackagePrefix::parse("com.bar").unwrap(),
        ]);
        assert_eq!(style.to_string(), "SmallModulesFor(com.foo, com.bar)");
    }

    #[test]
    fn test_split_style_json_shape() {
        let style = SplitStyle::SmallModulesFor(vec![PackagePrefix::parse("com.foo").unwrap()]);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["style"], "SmallModulesFor");
        assert_eq!(json["packages"][0], "com.foo");
    }

    #[test]
    fn test_deserialize_rejects_malformed_prefix() {
        let result: std::result::Result<SplitStyle, _> =
            serde_json::from_str(r#"{"style": "SmallModulesFor", "packages": ["com..bar"]}"#);
        assert!(result.is_err());
    }
}
