use anyhow::Result;
use diagnostics::log_info;
use filestore::Path;

use crate::common::ShellContext;

/// Remove a file; with `force`, remove anything and ignore absence
pub async fn remove_command(ctx: &ShellContext, path: &str, force: bool) -> Result<()> {
    let path = Path::parse(path);
    let (parent, name) = ctx.parent_of(&path).await?;
    if force {
        parent.removeforce(&name).await?;
    } else {
        parent.remove(&name).await?;
    }

    log_info!("Removed {path}", path: path.raw());
    Ok(())
}
