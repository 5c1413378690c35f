use crate::EntryType;
use crate::dir::{Directory, Handle};
use crate::error::{FilestoreError, Result};
use crate::file::Handle as FileHandle;
use crate::memory::MemoryFile;
use crate::metadata::{Metadata, NodeMetadata, StatItem};
use crate::node::Node;
use async_trait::async_trait;
use diagnostics::log_debug;
use futures::future::try_join_all;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Represents a directory backed by a BTreeMap
/// Children are owned by name; listings come back in name order.
pub struct MemoryDirectory {
    meta: NodeMetadata,
    entries: BTreeMap<String, Node>,
}

#[async_trait]
impl Metadata for MemoryDirectory {
    async fn stat(&self) -> Result<StatItem> {
        // Size is the live child count, derived here rather than maintained.
        Ok(self.meta.stat(self.entries.len() as u64, EntryType::Directory))
    }

    fn set_name(&mut self, name: &str) {
        self.meta.name = name.to_string();
    }
}

#[async_trait]
impl Directory for MemoryDirectory {
    async fn get(&self, name: &str) -> Result<Option<Node>> {
        Ok(self.entries.get(name).cloned())
    }

    async fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.entries.contains_key(name))
    }

    async fn open(&mut self, name: &str, create: bool) -> Result<FileHandle> {
        check_name(name)?;
        if let Some(node) = self.entries.get(name) {
            return node.clone().into_file(name);
        }
        if !create {
            return Err(FilestoreError::not_found(name));
        }
        let handle = MemoryFile::new_handle(name, b"");
        self.insert(name, Node::File(handle.clone()));
        Ok(handle)
    }

    async fn opendir(&self, name: &str) -> Result<Handle> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| FilestoreError::not_found(name))?
            .into_dir(name)
    }

    async fn touch(&mut self, name: &str) -> Result<()> {
        check_name(name)?;
        self.check_vacant(name)?;
        self.insert(name, Node::File(MemoryFile::new_handle(name, b"")));
        Ok(())
    }

    async fn mkdir(&mut self, name: &str) -> Result<()> {
        check_name(name)?;
        self.check_vacant(name)?;
        self.insert(name, Node::Directory(MemoryDirectory::new_handle(name)));
        Ok(())
    }

    async fn rename(&mut self, source: &str, destination: &str) -> Result<()> {
        if !self.entries.contains_key(source) {
            return Err(FilestoreError::not_found(source));
        }
        check_name(destination)?;
        self.check_vacant(destination)?;

        let node = self
            .entries
            .remove(source)
            .ok_or_else(|| FilestoreError::not_found(source))?;
        node.set_name(destination).await;
        _ = self.entries.insert(destination.to_string(), node);
        self.meta.modified();

        log_debug!("Renamed {source} to {destination}", source: source, destination: destination);
        Ok(())
    }

    async fn remove(&mut self, name: &str) -> Result<()> {
        let is_dir = self
            .entries
            .get(name)
            .ok_or_else(|| FilestoreError::not_found(name))?
            .is_dir();
        if is_dir {
            return Err(FilestoreError::is_a_directory(name));
        }
        self.unlink(name);
        Ok(())
    }

    async fn removeforce(&mut self, name: &str) -> Result<()> {
        self.unlink(name);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Node>> {
        Ok(self.entries.values().cloned().collect())
    }

    async fn liststat(&self) -> Result<Vec<StatItem>> {
        try_join_all(self.entries.values().map(Node::stat)).await
    }

    async fn put_in(&mut self, name: &str, node: Node) -> Result<()> {
        check_name(name)?;
        self.check_vacant(name)?;
        node.set_name(name).await;
        self.insert(name, node);
        Ok(())
    }
}

/// A child name must be a single path component, or path lookup could
/// never reach it. Anything else does not address a child: `NotFound`.
fn check_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains('/') {
        return Err(FilestoreError::not_found(name));
    }
    Ok(())
}

impl MemoryDirectory {
    /// Create a new, empty MemoryDirectory handle
    pub fn new_handle<S: Into<String>>(name: S) -> Handle {
        let dir: Box<dyn Directory> = Box::new(MemoryDirectory {
            meta: NodeMetadata::new(name),
            entries: BTreeMap::new(),
        });
        Handle::new(Arc::new(Mutex::new(dir)))
    }

    fn check_vacant(&self, name: &str) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(FilestoreError::already_exists(name));
        }
        Ok(())
    }

    fn insert(&mut self, name: &str, node: Node) {
        log_debug!("Creating {kind} {name}", kind: node.entry_type().as_str(), name: name);
        _ = self.entries.insert(name.to_string(), node);
        self.meta.modified();
    }

    fn unlink(&mut self, name: &str) {
        if self.entries.remove(name).is_some() {
            log_debug!("Removed {name}", name: name);
            self.meta.modified();
        }
    }
}
