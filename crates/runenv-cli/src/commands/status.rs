use runenv_cloud::GcloudClient;
use std::path::Path;

use super::Context;

pub async fn status(env_file: Option<&Path>) -> anyhow::Result<()> {
    let ctx = Context::load(env_file)?;
    let target = ctx.target();

    let client = GcloudClient::with_env(ctx.child_env());
    let output = client.describe_service(&target).await?;

    println!("{output}");
    Ok(())
}
