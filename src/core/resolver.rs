use std::collections::HashSet;

use crate::domain::model::{PackagePrefix, SplitStyle};
use crate::domain::ports::SplitConfigProvider;
use crate::utils::error::{Result, SplitError};

/// Resolve a requested split style name plus package prefixes into a
/// validated [`SplitStyle`] policy.
///
/// Style names match case-insensitively after trimming surrounding
/// whitespace. All validation happens here, at configuration-resolution
/// time: a malformed build configuration fails immediately instead of
/// corrupting splitting decisions later in code generation.
pub fn resolve(style_name: &str, packages: &[String]) -> Result<SplitStyle> {
    let normalized = style_name.trim();

    if normalized.eq_ignore_ascii_case("FewestModules") {
        require_no_packages("FewestModules", packages)?;
        return Ok(SplitStyle::FewestModules);
    }

    if normalized.eq_ignore_ascii_case("SmallestModules") {
        require_no_packages("SmallestModules", packages)?;
        return Ok(SplitStyle::SmallestModules);
    }

    if normalized.eq_ignore_ascii_case("SmallModulesFor") {
        if packages.is_empty() {
            return Err(SplitError::MissingPackages {
                style: "SmallModulesFor".to_string(),
            });
        }
        let prefixes = validate_and_dedup(packages)?;
        return Ok(SplitStyle::SmallModulesFor(prefixes));
    }

    Err(SplitError::UnknownSplitStyle(style_name.to_string()))
}

/// Resolve from any configuration source implementing the provider seam.
pub fn resolve_from(provider: &impl SplitConfigProvider) -> Result<SplitStyle> {
    resolve(provider.split_style(), provider.split_packages())
}

fn require_no_packages(style: &str, packages: &[String]) -> Result<()> {
    if !packages.is_empty() {
        // fail fast rather than silently ignoring the extra arguments
        return Err(SplitError::UnexpectedPackages {
            style: style.to_string(),
        });
    }
    Ok(())
}

// Validates every entry (duplicates included), dropping repeats while
// preserving first-seen order. Order must be deterministic for
// reproducible build output.
fn validate_and_dedup(packages: &[String]) -> Result<Vec<PackagePrefix>> {
    let mut seen = HashSet::new();
    let mut prefixes = Vec::with_capacity(packages.len());
    for entry in packages {
        let prefix = PackagePrefix::parse(entry)?;
        if seen.insert(entry.as_str()) {
            prefixes.push(prefix);
        }
    }
    Ok(prefixes)
}
