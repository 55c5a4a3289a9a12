//! # npr-core
//!
//! Core library for the npr project initializer providing:
//! - The project model (`Project`) and external tool definitions (`Tool`)
//! - Hierarchical configuration loading (embedded defaults, user file, environment)
//! - Shared utilities

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use types::{Project, RuntimeConfig, Tool};
pub use utils::get_home_dir;
