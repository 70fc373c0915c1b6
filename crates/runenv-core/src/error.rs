use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Env file ──
    #[error("env file not found: {path} — create it or pass --env-file")]
    EnvFileNotFound { path: PathBuf },

    #[error("failed to read env file {path}")]
    EnvFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Only the byte position is reported; env file lines carry credentials.
    #[error("failed to parse env file {path} at position {position}")]
    EnvFileParse { path: PathBuf, position: usize },

    #[error("failed to load env file {path}")]
    EnvFileLoad { path: PathBuf },
}
