pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::resolver::{resolve, resolve_from};
pub use domain::model::{PackagePrefix, SplitStyle, CANONICAL_STYLES, DEFAULT_SPLIT_STYLE};
pub use domain::ports::SplitConfigProvider;
pub use utils::error::{Result, SplitError};
