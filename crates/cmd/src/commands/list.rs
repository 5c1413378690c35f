use std::fmt::Write;

use anyhow::Result;
use filestore::{EntryType, Node, Path, StatItem};

use crate::common::{ShellContext, format_bytes, format_timestamp};

/// List a directory's children, or a single file.
///
/// Short form prints names, with a trailing `/` on directories. Long form adds
/// type, size (bytes for files, item count for directories), mtime and id.
pub async fn list_command(ctx: &ShellContext, path: &str, long: bool, output: &mut String) -> Result<()> {
    let path = Path::parse(path);
    let stats = match ctx.resolve(&path).await? {
        Node::Directory(dir) => dir.liststat().await?,
        file @ Node::File(_) => vec![file.stat().await?],
    };

    for stat in &stats {
        if long {
            writeln!(output, "{}", format_long(stat))?;
        } else if stat.entry_type.is_dir() {
            writeln!(output, "{}/", stat.name)?;
        } else {
            writeln!(output, "{}", stat.name)?;
        }
    }
    Ok(())
}

fn format_long(stat: &StatItem) -> String {
    let (marker, size) = match stat.entry_type {
        EntryType::Directory => ('d', format!("{} items", stat.size)),
        EntryType::File => ('-', format_bytes(stat.size, 2)),
    };
    format!(
        "{} {:>12} {} {} {}",
        marker,
        size,
        format_timestamp(stat.mtime),
        stat.id.short(),
        stat.name
    )
}
