use anyhow::Result;
use diagnostics::log_debug;
use filestore::Path;

use crate::common::ShellContext;

/// Append a file's content to `output`, lossily decoded as UTF-8
pub async fn cat_command(ctx: &ShellContext, path: &str, output: &mut String) -> Result<()> {
    let path = Path::parse(path);
    let file = ctx.resolve(&path).await?.into_file(&path.raw())?;
    let content = file.read().await?;

    log_debug!("Read {size} bytes from {path}", size: content.len(), path: path.raw());
    output.push_str(&String::from_utf8_lossy(&content));
    Ok(())
}
