pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::frames::{FileFrames, HtmlDocument, InMemoryFrames};
pub use crate::adapters::warnings::WarningsData;
#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::HelpersConfig;
pub use crate::core::BaseHelpers;
pub use crate::domain::model::NameRules;
pub use crate::utils::error::{BaseError, Result};
