use crate::utils::error::{Result, SplitError};
use regex::Regex;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

// One or more dot-separated identifier segments: no empty segments,
// no leading or trailing dots.
fn package_prefix_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$").unwrap()
    })
}

pub fn validate_package_prefix(value: &str) -> Result<()> {
    if !package_prefix_re().is_match(value) {
        return Err(SplitError::MalformedPackageName(value.to_string()));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SplitError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
