use anyhow::Result;
use diagnostics::log_info;
use filestore::Path;

use crate::common::ShellContext;

pub async fn touch_command(ctx: &ShellContext, path: &str) -> Result<()> {
    let path = Path::parse(path);
    let (parent, name) = ctx.parent_of(&path).await?;
    parent.touch(&name).await?;

    log_info!("File created: {path}", path: path.raw());
    Ok(())
}

pub async fn mkdir_command(ctx: &ShellContext, path: &str) -> Result<()> {
    let path = Path::parse(path);
    let (parent, name) = ctx.parent_of(&path).await?;
    parent.mkdir(&name).await?;

    log_info!("Directory created: {path}", path: path.raw());
    Ok(())
}
