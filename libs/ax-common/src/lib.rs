//! Axlink common library
//!
//! Plumbing shared by the axlink tools:
//! - layered configuration (defaults, YAML file, environment)
//! - logging initialisation
//! - the error type for both

pub mod config;
pub mod error;
pub mod logging;

pub use config::{AppConfig, FramingConfig, LoggingConfig, OutputConfig};
pub use error::{CommonError, Result};
