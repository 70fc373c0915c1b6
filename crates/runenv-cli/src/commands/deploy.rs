use runenv_cloud::{GcloudClient, RealExecutor, deploy_args, render_command};
use runenv_core::DeploySpec;
use std::path::Path;

use super::{Context, warn_missing};

pub struct DeployOptions {
    pub dry_run: bool,
    pub source: Option<String>,
    pub port: Option<u16>,
}

/// Load the env file and hand the interpolated command to `gcloud run deploy`.
pub async fn deploy(env_file: Option<&Path>, opts: DeployOptions) -> anyhow::Result<()> {
    let ctx = Context::load(env_file)?;

    let mut config = ctx.config.deploy.clone();
    if let Some(source) = opts.source {
        config.source = source;
    }
    if let Some(port) = opts.port {
        config.port = port;
    }

    let spec = DeploySpec::resolve(&ctx.env, &config);
    warn_missing(spec.missing_variables());

    let executor = RealExecutor::with_env(ctx.child_env());
    if opts.dry_run {
        let program = executor.program().to_string_lossy();
        println!("{}", render_command(&program, &deploy_args(&spec)));
        return Ok(());
    }

    println!(
        "Deploying '{service}' to Cloud Run ({region})...",
        service = spec.target.service_name,
        region = spec.target.region,
    );

    let client = GcloudClient::with_executor(executor);
    client.deploy(&spec).await?;

    println!();
    println!("Deployed: {}", spec.target.service_name);

    Ok(())
}
