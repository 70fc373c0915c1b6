use runenv_cloud::GcloudClient;
use std::path::Path;

use super::Context;

/// List the Cloud Run services in the project and region from the env file.
pub async fn list(env_file: Option<&Path>) -> anyhow::Result<()> {
    let ctx = Context::load(env_file)?;
    let target = ctx.target();

    let client = GcloudClient::with_env(ctx.child_env());
    let services = client.list_services(&target.project, &target.region).await?;

    if services.is_empty() {
        println!("No services found.");
        return Ok(());
    }

    println!("Services:");
    for name in &services {
        let marker = if *name == target.service_name { " *" } else { "" };
        println!("- {name}{marker}");
    }
    Ok(())
}
