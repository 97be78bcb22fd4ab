//! Cockpit core crate - domain types, configuration and the top-level error.
//!
//! Shared by the ranking engine and the command-line harness.

pub mod config;
pub mod error;
pub mod types;

pub use config::CockpitConfig;
pub use error::{CockpitError, Result};
pub use types::*;
