use runenv_cloud::{CheckResult, GcloudClient};
use runenv_core::{EnvFile, Environment, RunenvConfig};
use std::path::Path;

use super::env_file_path;

pub async fn doctor(env_file: Option<&Path>) -> anyhow::Result<()> {
    let config = RunenvConfig::load(Path::new("."))?;
    let path = env_file_path(&config, env_file);

    // Report a missing or malformed env file instead of aborting.
    let (env, env_check, child_env) = match EnvFile::load(&path) {
        Ok(file) => (
            Environment::from_process().overlay(&file),
            CheckResult::ok(&format!(
                "{} ({} variables)",
                path.display(),
                file.len()
            )),
            file.vars().to_vec(),
        ),
        Err(e) => (
            Environment::from_process(),
            CheckResult::fail(&e.to_string()),
            Vec::new(),
        ),
    };

    let client = GcloudClient::with_env(child_env);
    let report = client.doctor(&env, env_check).await;

    println!();
    println!("{report}");

    if !report.all_passed() {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}
