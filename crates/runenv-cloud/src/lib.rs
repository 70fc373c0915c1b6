pub mod client;
pub mod command;
pub mod executor;
pub mod gcloud;

pub use client::{CheckResult, DeployError, DoctorReport, GcloudClient, VariableCheck};
pub use command::{deploy_args, env_vars_flag, render_command};
pub use executor::{GCLOUD_BIN_ENV, GcloudExecutor, RealExecutor};
pub use gcloud::GcloudError;
