#[derive(Debug, thiserror::Error)]
pub enum GcloudError {
    #[error("gcloud CLI not found — install: https://cloud.google.com/sdk/docs/install")]
    NotFound { source: std::io::Error },

    #[error("gcloud command failed: {args:?}\n{stderr}")]
    CommandFailed {
        args: Vec<String>,
        stderr: String,
        code: Option<i32>,
    },

    #[error("gcloud exited with {}: {args:?}", format_code(*code))]
    Exited { args: Vec<String>, code: Option<i32> },

    #[error("gcloud output was not valid UTF-8")]
    InvalidUtf8 { source: std::string::FromUtf8Error },
}

impl GcloudError {
    /// Exit code of the gcloud process, when it ran and exited normally.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::CommandFailed { code, .. } | Self::Exited { code, .. } => *code,
            _ => None,
        }
    }
}

fn format_code(code: Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "a signal".to_owned(),
    }
}
