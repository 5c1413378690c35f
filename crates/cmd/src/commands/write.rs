use anyhow::Result;
use diagnostics::log_debug;
use filestore::Path;

use crate::common::ShellContext;

/// Write (or append) `text` to the file at `path`, creating it if needed
pub async fn write_command(ctx: &ShellContext, path: &str, text: &str, append: bool) -> Result<()> {
    let path = Path::parse(path);
    let (parent, name) = ctx.parent_of(&path).await?;
    let file = parent.open(&name, true).await?;

    if append {
        file.append(text.as_bytes()).await?;
    } else {
        file.write(text.as_bytes()).await?;
    }

    log_debug!("Wrote {size} bytes to {path}", size: text.len(), path: path.raw());
    Ok(())
}
