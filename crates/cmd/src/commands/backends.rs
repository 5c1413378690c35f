use std::fmt::Write;

use anyhow::Result;
use filestore::BackendRegistry;

/// One line per registered backend: name and description
pub fn backends_command(registry: &BackendRegistry, output: &mut String) -> Result<()> {
    for backend in registry.iter() {
        writeln!(output, "{:<12} {}", backend.name, backend.description)?;
    }
    Ok(())
}
