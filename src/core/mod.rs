pub mod idf;
pub mod project;

pub use crate::domain::model::{IdfInvocation, Platform, ProjectStatus};
pub use crate::domain::ports::{HelperRegistry, PlatformHelper};
pub use crate::utils::error::Result;
