#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use crate::core::client::ActClient;
pub use domain::model::*;
pub use domain::paging::PageRequest;
pub use domain::ports::{ConfigProvider, ProcessEngine};
pub use utils::error::{ActError, Result};
