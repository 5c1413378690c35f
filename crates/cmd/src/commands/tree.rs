use anyhow::Result;
use filestore::Path;

use crate::common::ShellContext;
use crate::tree_format::{build_tree, format_tree};

/// Render the subtree under `path`
pub async fn tree_command(ctx: &ShellContext, path: &str, output: &mut String) -> Result<()> {
    let path = Path::parse(path);
    let dir = ctx.resolve_dir(&path).await?;
    let tree = build_tree(path.raw(), dir).await?;
    output.push_str(&format_tree(&tree));
    Ok(())
}
