pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
use crate::domain::model::DEFAULT_SPLIT_STYLE;
#[cfg(feature = "cli")]
use crate::domain::ports::SplitConfigProvider;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "modsplit")]
#[command(about = "Resolve a module splitting policy for the JS module emitter")]
pub struct CliConfig {
    /// Splitting strategy: FewestModules, SmallestModules or SmallModulesFor
    #[arg(long, default_value = DEFAULT_SPLIT_STYLE)]
    pub split_style: String,

    /// Package prefixes anchoring split boundaries (SmallModulesFor only)
    #[arg(long = "split-package", value_delimiter = ',')]
    pub split_packages: Vec<String>,

    /// Print the resolved policy as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl SplitConfigProvider for CliConfig {
    fn split_style(&self) -> &str {
        &self.split_style
    }

    fn split_packages(&self) -> &[String] {
        &self.split_packages
    }
}
