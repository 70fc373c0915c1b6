//! Deploy target resolution.
//!
//! Turns a resolved [`Environment`] plus [`DeployConfig`] into the values
//! interpolated into `gcloud run deploy`. Substitution is literal: a variable
//! that is not set becomes an empty string, and the caller decides whether to
//! warn about it.

use crate::{DeployConfig, Environment};

pub const SERVICE_NAME: &str = "SERVICE_NAME";
pub const GOOGLE_CLOUD_LOCATION: &str = "GOOGLE_CLOUD_LOCATION";
pub const GOOGLE_CLOUD_PROJECT: &str = "GOOGLE_CLOUD_PROJECT";
pub const GOOGLE_GENAI_USE_VERTEXAI: &str = "GOOGLE_GENAI_USE_VERTEXAI";

/// The Cloud Run service addressed by every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceTarget {
    pub service_name: String,
    pub region: String,
    pub project: String,
}

impl ServiceTarget {
    /// Read `SERVICE_NAME`, `GOOGLE_CLOUD_LOCATION`, and `GOOGLE_CLOUD_PROJECT`.
    pub fn resolve(env: &Environment) -> Self {
        Self {
            service_name: env.value(SERVICE_NAME).to_owned(),
            region: env.value(GOOGLE_CLOUD_LOCATION).to_owned(),
            project: env.value(GOOGLE_CLOUD_PROJECT).to_owned(),
        }
    }

    /// Names of the target variables that are not set.
    pub fn missing_variables(env: &Environment) -> Vec<String> {
        [SERVICE_NAME, GOOGLE_CLOUD_LOCATION, GOOGLE_CLOUD_PROJECT]
            .iter()
            .filter(|key| !env.contains(key))
            .map(|key| (*key).to_owned())
            .collect()
    }
}

/// Everything needed to build one `gcloud run deploy` invocation.
///
/// # Examples
///
/// ```
/// use runenv_core::{DeployConfig, DeploySpec, Environment};
///
/// let env = Environment::from_pairs([
///     ("SERVICE_NAME", "foo"),
///     ("GOOGLE_CLOUD_LOCATION", "us-central1"),
/// ]);
/// let spec = DeploySpec::resolve(&env, &DeployConfig::default());
///
/// assert_eq!(spec.target.service_name, "foo");
/// assert_eq!(spec.target.project, "");
/// assert_eq!(spec.port, 8000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploySpec {
    pub target: ServiceTarget,
    pub source: String,
    pub port: u16,
    pub allow_unauthenticated: bool,
    /// Forwarded `KEY=VALUE` pairs, in config order, values verbatim.
    pub env_vars: Vec<(String, String)>,
    missing: Vec<String>,
}

impl DeploySpec {
    pub fn resolve(env: &Environment, config: &DeployConfig) -> Self {
        let mut missing = ServiceTarget::missing_variables(env);

        let mut env_vars: Vec<(String, String)> = Vec::with_capacity(config.forward_env.len());
        for key in &config.forward_env {
            if env_vars.iter().any(|(k, _)| k == key) {
                continue;
            }
            if !env.contains(key) && !missing.contains(key) {
                missing.push(key.clone());
            }
            env_vars.push((key.clone(), env.value(key).to_owned()));
        }

        Self {
            target: ServiceTarget::resolve(env),
            source: config.source.clone(),
            port: config.port,
            allow_unauthenticated: config.allow_unauthenticated,
            env_vars,
            missing,
        }
    }

    /// Referenced variables that were absent and substituted as `""`.
    pub fn missing_variables(&self) -> &[String] {
        &self.missing
    }
}
