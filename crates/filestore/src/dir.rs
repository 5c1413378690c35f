use crate::error::Result;
use crate::file::Handle as FileHandle;
use crate::metadata::{Metadata, StatItem};
use crate::node::Node;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Operations on the immediate children of a directory.
///
/// Every method takes a bare child name, never a multi-component path.
/// Creating or relinking under `""`, `.`, `..` or a name containing `/`
/// fails `NotFound`, since no path could address such a child.
/// Implementations perform each check-and-mutate sequence as one step while
/// holding `&mut self`, which the handle guards with a per-directory lock.
#[async_trait]
pub trait Directory: Metadata {
    /// Single-component lookup without any type check
    async fn get(&self, name: &str) -> Result<Option<Node>>;

    async fn exists(&self, name: &str) -> Result<bool>;

    /// Open the file `name`, creating an empty one if absent and `create` is set.
    /// Fails `NotFound` if absent otherwise, `IsADirectory` if `name` is a directory.
    async fn open(&mut self, name: &str, create: bool) -> Result<FileHandle>;

    /// Fails `NotFound` if absent, `NotADirectory` if `name` is a file. Never creates.
    async fn opendir(&self, name: &str) -> Result<Handle>;

    /// Create an empty file. Fails `AlreadyExists` if `name` is taken.
    async fn touch(&mut self, name: &str) -> Result<()>;

    /// Create an empty directory. Fails `AlreadyExists` if `name` is taken.
    async fn mkdir(&mut self, name: &str) -> Result<()>;

    /// Relink `source` as `destination` within this directory.
    async fn rename(&mut self, source: &str, destination: &str) -> Result<()>;

    /// Delete a file. Fails `NotFound` if absent, `IsADirectory` for directories.
    async fn remove(&mut self, name: &str) -> Result<()>;

    /// Delete any child. Absent names are not an error.
    async fn removeforce(&mut self, name: &str) -> Result<()>;

    /// Children in ascending name order
    async fn list(&self) -> Result<Vec<Node>>;

    /// Stats of the children, in the same order as `list`
    async fn liststat(&self) -> Result<Vec<StatItem>>;

    /// Attach a detached node under `name`. Backend composition only.
    async fn put_in(&mut self, name: &str, node: Node) -> Result<()>;
}

/// A handle for a refcounted directory.
#[derive(Clone)]
pub struct Handle(Arc<Mutex<Box<dyn Directory>>>);

impl Handle {
    pub fn new(r: Arc<Mutex<Box<dyn Directory>>>) -> Self {
        Self(r)
    }

    pub async fn get(&self, name: &str) -> Result<Option<Node>> {
        self.0.lock().await.get(name).await
    }

    pub async fn exists(&self, name: &str) -> Result<bool> {
        self.0.lock().await.exists(name).await
    }

    pub async fn open(&self, name: &str, create: bool) -> Result<FileHandle> {
        self.0.lock().await.open(name, create).await
    }

    pub async fn opendir(&self, name: &str) -> Result<Handle> {
        self.0.lock().await.opendir(name).await
    }

    pub async fn touch(&self, name: &str) -> Result<()> {
        self.0.lock().await.touch(name).await
    }

    pub async fn mkdir(&self, name: &str) -> Result<()> {
        self.0.lock().await.mkdir(name).await
    }

    pub async fn rename(&self, source: &str, destination: &str) -> Result<()> {
        self.0.lock().await.rename(source, destination).await
    }

    pub async fn remove(&self, name: &str) -> Result<()> {
        self.0.lock().await.remove(name).await
    }

    pub async fn removeforce(&self, name: &str) -> Result<()> {
        self.0.lock().await.removeforce(name).await
    }

    pub async fn list(&self) -> Result<Vec<Node>> {
        self.0.lock().await.list().await
    }

    pub async fn liststat(&self) -> Result<Vec<StatItem>> {
        self.0.lock().await.liststat().await
    }

    pub async fn stat(&self) -> Result<StatItem> {
        self.0.lock().await.stat().await
    }

    pub(crate) async fn put_in(&self, name: &str, node: Node) -> Result<()> {
        self.0.lock().await.put_in(name, node).await
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
        write!(f, "dir::Handle")
    }
}
