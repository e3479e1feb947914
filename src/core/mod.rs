pub mod resolver;

pub use crate::domain::model::{PackagePrefix, SplitStyle};
pub use crate::domain::ports::SplitConfigProvider;
pub use crate::utils::error::Result;
