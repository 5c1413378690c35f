use crate::EntryType;
use crate::error::Result;
use crate::file::{File, Handle};
use crate::metadata::{Metadata, NodeMetadata, StatItem};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Represents a file backed by memory
/// Content lives in a Vec<u8>; its length is the reported size.
pub struct MemoryFile {
    meta: NodeMetadata,
    content: Vec<u8>,
}

#[async_trait]
impl Metadata for MemoryFile {
    async fn stat(&self) -> Result<StatItem> {
        Ok(self.meta.stat(self.content.len() as u64, EntryType::File))
    }

    fn set_name(&mut self, name: &str) {
        self.meta.name = name.to_string();
    }
}

#[async_trait]
impl File for MemoryFile {
    async fn read(&mut self) -> Result<Vec<u8>> {
        self.meta.accessed();
        Ok(self.content.clone())
    }

    async fn write(&mut self, data: &[u8]) -> Result<()> {
        self.meta.modified();
        self.content = data.to_vec();
        Ok(())
    }

    async fn append(&mut self, data: &[u8]) -> Result<()> {
        self.meta.modified();
        self.content.extend_from_slice(data);
        Ok(())
    }
}

impl MemoryFile {
    /// Create a new MemoryFile handle with the given name and content
    pub fn new_handle<S: Into<String>, T: AsRef<[u8]>>(name: S, content: T) -> Handle {
        let file: Box<dyn File> = Box::new(MemoryFile {
            meta: NodeMetadata::new(name),
            content: content.as_ref().to_vec(),
        });
        Handle::new(Arc::new(Mutex::new(file)))
    }
}
