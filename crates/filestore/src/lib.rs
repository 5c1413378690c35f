//! Pluggable virtual filesystem contracts and an in-memory backend.
//!
//! A backend implements [`FileStore`] for its root plus the [`File`] and
//! [`Directory`] traits for its nodes. Callers hold [`FileHandle`]s and
//! [`DirHandle`]s, operate on one directory level at a time, and use
//! [`FileStore::nested_item`] for multi-component lookups.
//!
//! ```
//! # tokio_test::block_on(async {
//! use filestore::{FileStore, memory::new_store};
//!
//! let store = new_store().await?;
//! let root = store.root();
//! root.mkdir("docs").await?;
//! root.opendir("docs").await?.touch("readme.txt").await?;
//!
//! let node = store.nested_item("/docs/readme.txt").await?;
//! assert!(node.is_some());
//! # Ok::<(), filestore::FilestoreError>(())
//! # }).unwrap();
//! ```

mod entry_type;
mod node;

pub mod dir;
pub mod error;
pub mod file;
pub mod memory;
pub mod metadata;
pub mod path;
pub mod registry;
pub mod store;

pub use dir::Directory;
pub use dir::Handle as DirHandle;
pub use entry_type::EntryType;
pub use error::{ErrorKind, FilestoreError, Result};
pub use file::File;
pub use file::Handle as FileHandle;
pub use metadata::{Metadata, NodeID, StatItem, Timestamp};
pub use node::Node;
pub use path::Path;
pub use registry::{BackendDescriptor, BackendRegistry};
pub use store::FileStore;

#[cfg(test)]
mod tests;
