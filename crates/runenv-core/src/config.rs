use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::deploy::{GOOGLE_CLOUD_LOCATION, GOOGLE_CLOUD_PROJECT, GOOGLE_GENAI_USE_VERTEXAI};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "runenv.toml";

/// runenv.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunenvConfig {
    #[serde(default)]
    pub deploy: DeployConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Env file to read variables from
    #[serde(default = "default_env_file")]
    pub env_file: PathBuf,
    /// Source directory passed to `--source`
    #[serde(default = "default_source")]
    pub source: String,
    /// Port the container listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Pass `--allow-unauthenticated`
    #[serde(default = "default_allow_unauthenticated")]
    pub allow_unauthenticated: bool,
    /// Variables forwarded to the service via `--set-env-vars`
    #[serde(default = "default_forward_env")]
    pub forward_env: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    /// Number of log entries `runenv logs` reads
    #[serde(default = "default_log_limit")]
    pub limit: u32,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            source: default_source(),
            port: default_port(),
            allow_unauthenticated: default_allow_unauthenticated(),
            forward_env: default_forward_env(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            limit: default_log_limit(),
        }
    }
}

impl RunenvConfig {
    /// Load from runenv.toml in the given directory, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join(CONFIG_FILE);
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading config");
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_env_file() -> PathBuf {
    PathBuf::from(".env")
}

fn default_source() -> String {
    ".".to_owned()
}

fn default_port() -> u16 {
    8000
}

fn default_allow_unauthenticated() -> bool {
    true
}

fn default_forward_env() -> Vec<String> {
    [
        GOOGLE_CLOUD_PROJECT,
        GOOGLE_CLOUD_LOCATION,
        GOOGLE_GENAI_USE_VERTEXAI,
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect()
}

fn default_log_limit() -> u32 {
    100
}
