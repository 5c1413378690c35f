use std::fmt::Write;

use anyhow::Result;
use filestore::Path;

use crate::common::{ShellContext, format_timestamp};

/// Print a node's metadata as `key: value` lines, or as JSON
pub async fn stat_command(ctx: &ShellContext, path: &str, json: bool, output: &mut String) -> Result<()> {
    let path = Path::parse(path);
    let stat = ctx.resolve(&path).await?.stat().await?;

    if json {
        writeln!(output, "{}", serde_json::to_string(&stat)?)?;
        return Ok(());
    }

    writeln!(output, "name:  {}", stat.name)?;
    writeln!(output, "type:  {}", stat.entry_type)?;
    writeln!(output, "size:  {}", stat.size)?;
    writeln!(output, "id:    {}", stat.id)?;
    writeln!(output, "ctime: {}", format_timestamp(stat.ctime))?;
    writeln!(output, "mtime: {}", format_timestamp(stat.mtime))?;
    writeln!(output, "atime: {}", format_timestamp(stat.atime))?;
    Ok(())
}
