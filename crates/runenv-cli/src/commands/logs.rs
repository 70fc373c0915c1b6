use runenv_cloud::GcloudClient;
use std::path::Path;

use super::Context;

pub async fn logs(env_file: Option<&Path>, limit: Option<u32>) -> anyhow::Result<()> {
    let ctx = Context::load(env_file)?;
    let target = ctx.target();
    let limit = limit
        // arch-lint: allow(no-silent-result-drop) reason="no --limit flag means the configured default applies"
        .unwrap_or(ctx.config.logs.limit);

    let client = GcloudClient::with_env(ctx.child_env());
    client.read_logs(&target, limit).await?;

    Ok(())
}
