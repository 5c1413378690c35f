use anyhow::{Result, bail};
use diagnostics::log_info;
use filestore::Path;

use crate::common::ShellContext;

/// Rename within one directory. `destination` may be a bare name or a path
/// with the same parent as `source`.
pub async fn rename_command(ctx: &ShellContext, source: &str, destination: &str) -> Result<()> {
    let source = Path::parse(source);
    let destination = if destination.contains('/') {
        Path::parse(destination)
    } else {
        source.parent().join(destination)
    };

    if destination.is_root() || source.parent() != destination.parent() {
        bail!(
            "Cannot move {} to {}: only renames within one directory are supported",
            source,
            destination
        );
    }

    let (parent, from) = ctx.parent_of(&source).await?;
    let to = destination.basename();
    parent.rename(&from, &to).await?;

    log_info!("Renamed {source} to {destination}", source: source.raw(), destination: destination.raw());
    Ok(())
}
