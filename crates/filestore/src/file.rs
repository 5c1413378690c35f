use crate::error::Result;
use crate::metadata::{Metadata, StatItem};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Whole-buffer file operations every backend provides.
///
/// There is no path argument: a file is identified by its handle.
#[async_trait]
pub trait File: Metadata {
    /// The entire content. Counts as an access (updates `atime`).
    async fn read(&mut self) -> Result<Vec<u8>>;

    /// Replace the content wholesale.
    async fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Add `data` after the existing content. Same as `write` on an empty file.
    async fn append(&mut self, data: &[u8]) -> Result<()>;
}

/// A handle for a refcounted file.
#[derive(Clone)]
pub struct Handle(Arc<Mutex<Box<dyn File>>>);

impl Handle {
    pub fn new(r: Arc<Mutex<Box<dyn File>>>) -> Self {
        Self(r)
    }

    pub async fn read(&self) -> Result<Vec<u8>> {
        self.0.lock().await.read().await
    }

    pub async fn write(&self, data: &[u8]) -> Result<()> {
        self.0.lock().await.write(data).await
    }

    pub async fn append(&self, data: &[u8]) -> Result<()> {
        self.0.lock().await.append(data).await
    }

    pub async fn stat(&self) -> Result<StatItem> {
        self.0.lock().await.stat().await
    }

    pub(crate) async fn set_name(&self, name: &str) {
        self.0.lock().await.set_name(name);
    }

    /// True if both handles refer to the same node
    pub fn same_node(&self, other: &Handle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "file::Handle")
    }
}
