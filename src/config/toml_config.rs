use crate::core::resolver;
use crate::domain::model::{SplitStyle, DEFAULT_SPLIT_STYLE};
use crate::domain::ports::SplitConfigProvider;
use crate::utils::error::{Result, SplitError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub project: ProjectConfig,
    pub splitting: Option<SplittingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SplittingConfig {
    pub style: Option<String>,
    pub packages: Option<Vec<String>>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SplitError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SplitError::InvalidConfigValue {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    // Replaces ${VAR_NAME} occurrences with the environment value,
    // leaving unset variables untouched.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static RE: OnceLock<Regex> = OnceLock::new();
        let re = RE.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    /// Resolve the splitting section into a validated policy.
    pub fn resolve_split_style(&self) -> Result<SplitStyle> {
        resolver::resolve_from(self)
    }
}

impl SplitConfigProvider for TomlConfig {
    fn split_style(&self) -> &str {
        self.splitting
            .as_ref()
            .and_then(|s| s.style.as_deref())
            .unwrap_or(DEFAULT_SPLIT_STYLE)
    }

    fn split_packages(&self) -> &[String] {
        self.splitting
            .as_ref()
            .and_then(|s| s.packages.as_deref())
            .unwrap_or(&[])
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("project.name", &self.project.name)?;

        // validation is resolution: a splitting section that resolves is valid
        self.resolve_split_style().map(|_| ())
    }
}
