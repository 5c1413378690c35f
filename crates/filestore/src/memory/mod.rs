//! In-memory backend
//!
//! The whole tree lives in process memory: directories own their children
//! in a BTreeMap, files own a Vec<u8>. Nothing survives the process.
//!
//! Operations never wait on I/O but go through the same async contract as
//! any other backend, so callers can swap backends freely.

mod directory;
mod file;

pub use directory::MemoryDirectory;
pub use file::MemoryFile;

use crate::dir::Handle as DirHandle;
use crate::error::Result;
use crate::node::Node;
use crate::store::FileStore;
use async_trait::async_trait;
use diagnostics::log_debug;

/// Directory created by [`MemoryStore::init`]
pub const SEED_DIR: &str = "openme";
/// File created inside [`SEED_DIR`]
pub const SEED_FILE: &str = "hello.txt";
/// Content of [`SEED_FILE`]
pub const SEED_CONTENT: &[u8] = b"Welcome to memfs! Everything here lives in memory.\n";

/// Registry name of the memory backend
pub const BACKEND_NAME: &str = "memory";

/// Filestore holding its tree in memory
pub struct MemoryStore {
    root: DirHandle,
    initialized: bool,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// An empty store. Call `init` to seed it.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: MemoryDirectory::new_handle("root"),
            initialized: false,
        }
    }
}

#[async_trait]
impl FileStore for MemoryStore {
    fn name(&self) -> &str {
        BACKEND_NAME
    }

    async fn init(&mut self) -> Result<()> {
        if self.initialized {
            log_debug!("Memory store already initialized");
            return Ok(());
        }

        // Build the welcome directory detached, then attach it in one step.
        let welcome = MemoryDirectory::new_handle(SEED_DIR);
        welcome.open(SEED_FILE, true).await?.write(SEED_CONTENT).await?;
        self.root.put_in(SEED_DIR, Node::Directory(welcome)).await?;

        self.initialized = true;
        log_debug!("Seeded memory store with /{dir}/{file}", dir: SEED_DIR, file: SEED_FILE);
        Ok(())
    }

    fn root(&self) -> DirHandle {
        self.root.clone()
    }
}

/// A freshly initialized memory store
pub async fn new_store() -> Result<MemoryStore> {
    let mut store = MemoryStore::new();
    store.init().await?;
    Ok(store)
}
