mod deploy;
mod destroy;
mod doctor;
mod list;
mod logs;
mod status;

use runenv_cloud::GcloudError;
use runenv_core::{EnvFile, Environment, RunenvConfig, ServiceTarget};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub use deploy::{DeployOptions, deploy};
pub use destroy::destroy;
pub use doctor::doctor;
pub use list::list;
pub use logs::logs;
pub use status::status;

/// Configuration, env file, and the environment resolved from both.
pub(crate) struct Context {
    pub config: RunenvConfig,
    pub env_file: EnvFile,
    pub env: Environment,
}

impl Context {
    pub fn load(env_file_override: Option<&Path>) -> anyhow::Result<Self> {
        let config = RunenvConfig::load(Path::new("."))?;
        let path = env_file_path(&config, env_file_override);
        let env_file = EnvFile::load(&path)?;
        let env = Environment::from_process().overlay(&env_file);

        Ok(Self {
            config,
            env_file,
            env,
        })
    }

    /// Service target, warning about each variable that is not set.
    pub fn target(&self) -> ServiceTarget {
        warn_missing(&ServiceTarget::missing_variables(&self.env));
        ServiceTarget::resolve(&self.env)
    }

    /// Pairs exported to every gcloud child process.
    pub fn child_env(&self) -> Vec<(String, String)> {
        self.env_file.vars().to_vec()
    }
}

pub(crate) fn env_file_path(config: &RunenvConfig, env_file_override: Option<&Path>) -> PathBuf {
    env_file_override
        .map(Path::to_path_buf)
        // arch-lint: allow(no-silent-result-drop) reason="no --env-file flag means the configured path applies"
        .unwrap_or_else(|| config.deploy.env_file.clone())
}

pub(crate) fn warn_missing(names: &[String]) {
    for name in names {
        tracing::warn!(variable = %name, "not set; substituting an empty string");
    }
}

/// gcloud's own exit code when it ran and failed, otherwise 1.
pub fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<GcloudError>())
        .and_then(GcloudError::exit_code);

    code.filter(|c| (1..=255).contains(c))
        .map_or(ExitCode::FAILURE, |c| ExitCode::from(c as u8))
}
