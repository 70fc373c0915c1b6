//! Core types and configuration for runenv.
//!
//! This crate defines env file loading ([`EnvFile`]), the resolved variable
//! view ([`Environment`]), the `runenv.toml` schema ([`RunenvConfig`]),
//! deploy target resolution ([`DeploySpec`]), and shared error types.

pub mod config;
pub mod deploy;
pub mod env_file;
pub mod environment;
pub mod error;

pub use config::{CONFIG_FILE, DeployConfig, LogsConfig, RunenvConfig};
pub use deploy::{DeploySpec, ServiceTarget};
pub use env_file::EnvFile;
pub use environment::Environment;
pub use error::{Error, Result};
