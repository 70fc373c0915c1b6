use crate::command::deploy_args;
use crate::executor::{GcloudExecutor, RealExecutor};
use crate::gcloud::GcloudError;
use runenv_core::deploy::{
    GOOGLE_CLOUD_LOCATION, GOOGLE_CLOUD_PROJECT, GOOGLE_GENAI_USE_VERTEXAI, SERVICE_NAME,
};
use runenv_core::{DeploySpec, Environment, ServiceTarget};
use std::fmt;

/// Cloud Run operations client, parameterized over the executor for testability.
pub struct GcloudClient<E: GcloudExecutor = RealExecutor> {
    executor: E,
}

impl GcloudClient<RealExecutor> {
    /// Client whose gcloud children receive `envs` on top of the inherited environment.
    pub fn with_env(envs: Vec<(String, String)>) -> Self {
        Self {
            executor: RealExecutor::with_env(envs),
        }
    }
}

impl<E: GcloudExecutor> GcloudClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Cloud Run Deploy ──

    /// Run `gcloud run deploy`, streaming its output.
    ///
    /// There is no retry or interpretation: a non-zero exit is returned as
    /// [`DeployError::Deploy`] carrying gcloud's exit code.
    pub async fn deploy(&self, spec: &DeploySpec) -> Result<(), DeployError> {
        let cmd = deploy_args(spec);
        tracing::info!(
            service = %spec.target.service_name,
            region = %spec.target.region,
            project = %spec.target.project,
            "deploying to Cloud Run"
        );

        self.executor
            .exec_streaming(&cmd)
            .await
            .map_err(|e| DeployError::Deploy { source: e })
    }

    pub async fn describe_service(&self, target: &ServiceTarget) -> Result<String, DeployError> {
        self.executor
            .exec(&args([
                "run",
                "services",
                "describe",
                &target.service_name,
                "--project",
                &target.project,
                "--region",
                &target.region,
                "--format",
                "yaml(status)",
            ]))
            .await
            .map_err(|e| DeployError::Describe { source: e })
    }

    /// Names of the Cloud Run services in `project` and `region`.
    pub async fn list_services(
        &self,
        project: &str,
        region: &str,
    ) -> Result<Vec<String>, DeployError> {
        let output = self
            .executor
            .exec(&args([
                "run",
                "services",
                "list",
                "--project",
                project,
                "--region",
                region,
                "--format",
                "value(metadata.name)",
            ]))
            .await
            .map_err(|e| DeployError::List { source: e })?;

        Ok(output
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_owned)
            .collect())
    }

    pub async fn delete_service(&self, target: &ServiceTarget) -> Result<(), DeployError> {
        self.executor
            .exec(&args([
                "run",
                "services",
                "delete",
                &target.service_name,
                "--project",
                &target.project,
                "--region",
                &target.region,
                "--quiet",
            ]))
            .await
            .map_err(|e| DeployError::Delete { source: e })?;

        Ok(())
    }

    pub async fn read_logs(&self, target: &ServiceTarget, limit: u32) -> Result<(), DeployError> {
        let limit = limit.to_string();
        self.executor
            .exec_streaming(&args([
                "run",
                "services",
                "logs",
                "read",
                &target.service_name,
                "--project",
                &target.project,
                "--region",
                &target.region,
                "--limit",
                &limit,
            ]))
            .await
            .map_err(|e| DeployError::Logs { source: e })
    }

    // ── Doctor ──

    /// Run all diagnostic checks without early return.
    /// Returns a report with pass/fail for each check item.
    pub async fn doctor(&self, env: &Environment, env_file: CheckResult) -> DoctorReport {
        let mut report = DoctorReport {
            env_file,
            ..DoctorReport::default()
        };

        // 1. gcloud CLI
        match self.executor.exec(&args(["version"])).await {
            Ok(v) => {
                // Parse "Google Cloud SDK X.Y.Z" from first line
                let version = v
                    .lines()
                    .next()
                    .and_then(|line| line.strip_prefix("Google Cloud SDK "))
                    // arch-lint: allow(no-silent-result-drop) reason="unrecognized version banner is shown as-is"
                    .unwrap_or(v.trim());
                report.gcloud = CheckResult::ok(version.trim());
            }
            Err(e) => report.gcloud = CheckResult::fail(&e.to_string()),
        }

        // 2. Active account
        match self
            .executor
            .exec(&args(["config", "get-value", "account"]))
            .await
        {
            Ok(a) if !a.trim().is_empty() => report.account = CheckResult::ok(a.trim()),
            _ => report.account = CheckResult::fail("no active account"),
        }

        // 3. Variables interpolated into the deploy command. Values may be
        //    credentials, so only their presence is reported.
        for name in [
            SERVICE_NAME,
            GOOGLE_CLOUD_LOCATION,
            GOOGLE_CLOUD_PROJECT,
            GOOGLE_GENAI_USE_VERTEXAI,
        ] {
            let result = match env.lookup(name) {
                Some(v) if !v.is_empty() => CheckResult::ok("set"),
                Some(_) => CheckResult::fail("empty"),
                None => CheckResult::fail("not set"),
            };
            report.variables.push(VariableCheck {
                name: name.to_owned(),
                result,
            });
        }

        report
    }
}

// ── Helper ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

// ── Doctor types ──

#[derive(Debug, Default)]
pub struct DoctorReport {
    pub gcloud: CheckResult,
    pub account: CheckResult,
    pub env_file: CheckResult,
    pub variables: Vec<VariableCheck>,
}

impl DoctorReport {
    pub fn all_passed(&self) -> bool {
        self.gcloud.passed
            && self.account.passed
            && self.env_file.passed
            && self.variables.iter().all(|v| v.result.passed)
    }
}

impl fmt::Display for DoctorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |f: &mut fmt::Formatter<'_>, label: &str, r: &CheckResult| {
            writeln!(f, "  [{}] {label:<28} {}", r.icon(), r.detail)
        };

        writeln!(f, "Tooling")?;
        row(f, "gcloud CLI", &self.gcloud)?;
        row(f, "Active account", &self.account)?;
        writeln!(f, "Environment")?;
        row(f, "Env file", &self.env_file)?;
        for v in &self.variables {
            row(f, &v.name, &v.result)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct CheckResult {
    pub passed: bool,
    pub detail: String,
}

impl CheckResult {
    pub fn ok(detail: &str) -> Self {
        Self {
            passed: true,
            detail: detail.to_owned(),
        }
    }

    pub fn fail(detail: &str) -> Self {
        Self {
            passed: false,
            detail: detail.to_owned(),
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

#[derive(Debug, Clone)]
pub struct VariableCheck {
    pub name: String,
    pub result: CheckResult,
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("cloud run deployment failed")]
    Deploy { source: GcloudError },

    #[error("failed to describe cloud run service")]
    Describe { source: GcloudError },

    #[error("failed to list cloud run services")]
    List { source: GcloudError },

    #[error("failed to delete cloud run service")]
    Delete { source: GcloudError },

    #[error("failed to read cloud run logs")]
    Logs { source: GcloudError },
}

impl DeployError {
    /// The underlying gcloud failure.
    pub fn gcloud(&self) -> &GcloudError {
        match self {
            Self::Deploy { source }
            | Self::Describe { source }
            | Self::List { source }
            | Self::Delete { source }
            | Self::Logs { source } => source,
        }
    }
}
