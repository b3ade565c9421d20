pub mod client;
pub mod engine;
pub mod process_definitions;
pub mod process_instances;
pub mod tasks;

pub use crate::domain::model::*;
pub use crate::domain::paging::PageRequest;
pub use crate::domain::ports::{ConfigProvider, ProcessEngine};
pub use crate::utils::error::Result;
