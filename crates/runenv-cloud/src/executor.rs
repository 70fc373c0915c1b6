use std::path::{Path, PathBuf};

use crate::gcloud::GcloudError;

/// Environment variable that overrides the gcloud binary path.
pub const GCLOUD_BIN_ENV: &str = "RUNENV_GCLOUD";

/// Abstraction over gcloud CLI execution for testability.
///
/// Production code uses [`RealExecutor`], tests use mockall-generated mocks.
#[allow(async_fn_in_trait)]
pub trait GcloudExecutor: Send + Sync {
    /// Execute a gcloud command and capture stdout.
    async fn exec(&self, args: &[String]) -> Result<String, GcloudError>;

    /// Execute a gcloud command, streaming output to the terminal.
    async fn exec_streaming(&self, args: &[String]) -> Result<(), GcloudError>;
}

/// Real gcloud CLI executor.
///
/// Every child inherits the current process environment plus the pairs
/// given to [`RealExecutor::with_env`], which take precedence.
#[derive(Debug, Clone)]
pub struct RealExecutor {
    program: PathBuf,
    envs: Vec<(String, String)>,
}

impl RealExecutor {
    pub fn new() -> Self {
        let program = std::env::var_os(GCLOUD_BIN_ENV)
            .filter(|p| !p.is_empty())
            .map_or_else(|| PathBuf::from("gcloud"), PathBuf::from);
        Self {
            program,
            envs: Vec::new(),
        }
    }

    pub fn with_env(envs: Vec<(String, String)>) -> Self {
        Self {
            envs,
            ..Self::new()
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command(&self, args: &[String]) -> tokio::process::Command {
        tracing::debug!(
            program = %self.program.display(),
            ?args,
            env_count = self.envs.len(),
            "spawning gcloud"
        );
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(args)
            .envs(self.envs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        cmd
    }
}

impl Default for RealExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl GcloudExecutor for RealExecutor {
    async fn exec(&self, args: &[String]) -> Result<String, GcloudError> {
        use std::process::Stdio;

        let output = self
            .command(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| GcloudError::NotFound { source: e })?;

        if output.status.success() {
            String::from_utf8(output.stdout).map_err(|e| GcloudError::InvalidUtf8 { source: e })
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            Err(GcloudError::CommandFailed {
                args: args.to_vec(),
                stderr,
                code: output.status.code(),
            })
        }
    }

    async fn exec_streaming(&self, args: &[String]) -> Result<(), GcloudError> {
        use std::process::Stdio;

        let status = self
            .command(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| GcloudError::NotFound { source: e })?;

        if status.success() {
            Ok(())
        } else {
            Err(GcloudError::Exited {
                args: args.to_vec(),
                code: status.code(),
            })
        }
    }
}
