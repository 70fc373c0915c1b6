use runenv_cloud::GcloudClient;
use std::io::Write;
use std::path::Path;

use super::Context;

/// Delete the Cloud Run service named by `SERVICE_NAME`.
pub async fn destroy(env_file: Option<&Path>, skip_confirm: bool) -> anyhow::Result<()> {
    let ctx = Context::load(env_file)?;
    let target = ctx.target();

    if !skip_confirm {
        println!(
            "This will delete Cloud Run service '{}' in {} (project {}).",
            target.service_name, target.region, target.project
        );
        print!("Are you sure? [y/N] ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !matches!(input.trim(), "y" | "Y" | "yes" | "YES") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Deleting Cloud Run service '{}'...", target.service_name);
    let client = GcloudClient::with_env(ctx.child_env());
    client.delete_service(&target).await?;
    println!("  Deleted.");

    Ok(())
}
