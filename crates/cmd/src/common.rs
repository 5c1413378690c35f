use anyhow::{Result, anyhow, bail};
use filestore::{BackendRegistry, DirHandle, FileStore, FilestoreError, Node, Path};

/// Environment variable naming the backend, read by clap; `--backend` wins
pub const BACKEND_ENV: &str = "MEMFS_BACKEND";

/// Backend used when neither flag nor environment names one
pub const DEFAULT_BACKEND: &str = filestore::memory::BACKEND_NAME;

/// An initialized store that shell commands run against
pub struct ShellContext {
    store: Box<dyn FileStore>,
}

impl ShellContext {
    /// Construct and initialize the named backend
    pub async fn open(registry: &BackendRegistry, backend: &str) -> Result<Self> {
        let mut store = registry.create(backend).ok_or_else(|| {
            let known: Vec<_> = registry.names().collect();
            anyhow!("Unknown backend '{}' (available: {})", backend, known.join(", "))
        })?;
        store.init().await?;
        diagnostics::log_info!("Opened {backend} filestore", backend: backend);
        Ok(Self { store })
    }

    /// Resolve a path to a node; a missing path is `NotFound` naming it
    pub async fn resolve(&self, path: &Path) -> Result<Node> {
        self.store
            .nested_item(&path.raw())
            .await?
            .ok_or_else(|| FilestoreError::not_found(path.raw()).into())
    }

    /// Resolve a path that must be a directory
    pub async fn resolve_dir(&self, path: &Path) -> Result<DirHandle> {
        Ok(self.resolve(path).await?.into_dir(&path.raw())?)
    }

    /// Split a path into its parent directory and final component.
    /// The root has no parent, so it cannot be created, renamed or removed.
    pub async fn parent_of(&self, path: &Path) -> Result<(DirHandle, String)> {
        if path.is_root() {
            bail!("The root directory cannot be modified");
        }
        let parent = self.resolve_dir(&path.parent()).await?;
        Ok((parent, path.basename()))
    }
}

/// Human-readable byte count in base 1024: "0 Bytes", "1.5 KB", "2 MB"
pub fn format_bytes(bytes: u64, decimal_places: usize) -> String {
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    // Trailing zeros are trimmed, so 1536 renders as "1.5 KB" and 2048 as "2 KB".
    let rounded = format!("{:.*}", decimal_places, size);
    let trimmed = if rounded.contains('.') {
        rounded.trim_end_matches('0').trim_end_matches('.')
    } else {
        rounded.as_str()
    };
    format!("{} {}", trimmed, UNITS[unit_index])
}

/// Millisecond timestamp as RFC 3339, or the raw number if out of range
pub fn format_timestamp(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
        .unwrap_or_else(|| millis.to_string())
}
