pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::esp32::Esp32Helper;
pub use config::workspace::Workspace;
pub use config::{Cli, Commands};
pub use crate::core::idf::IdfForwarder;
pub use crate::core::{HelperRegistry, IdfInvocation, Platform, PlatformHelper, ProjectStatus};
pub use utils::error::{CliError, Result};
