use crate::EntryType;
use crate::dir::Handle as DirHandle;
use crate::error::{FilestoreError, Result};
use crate::file::Handle as FileHandle;
use crate::metadata::StatItem;

/// A live reference to a file or directory in some backend's tree
#[derive(Clone)]
pub enum Node {
    File(FileHandle),
    Directory(DirHandle),
}

impl Node {
    pub fn entry_type(&self) -> EntryType {
        match self {
            Node::File(_) => EntryType::File,
            Node::Directory(_) => EntryType::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory(_))
    }

    pub async fn stat(&self) -> Result<StatItem> {
        match self {
            Node::File(f) => f.stat().await,
            Node::Directory(d) => d.stat().await,
        }
    }

    pub(crate) async fn set_name(&self, name: &str) {
        match self {
            Node::File(f) => f.set_name(name).await,
            Node::Directory(d) => d.set_name(name).await,
        }
    }

    /// The file handle, or `IsADirectory` naming `name`
    pub fn into_file(self, name: &str) -> Result<FileHandle> {
        match self {
            Node::File(f) => Ok(f),
            Node::Directory(_) => Err(FilestoreError::is_a_directory(name)),
        }
    }

    /// The directory handle, or `NotADirectory` naming `name`
    pub fn into_dir(self, name: &str) -> Result<DirHandle> {
        match self {
            Node::Directory(d) => Ok(d),
            Node::File(_) => Err(FilestoreError::not_a_directory(name)),
        }
    }

    pub fn as_dir(&self) -> Option<&DirHandle> {
        match self {
            Node::Directory(d) => Some(d),
            Node::File(_) => None,
        }
    }
}

impl From<FileHandle> for Node {
    fn from(handle: FileHandle) -> Self {
        Node::File(handle)
    }
}

impl From<DirHandle> for Node {
    fn from(handle: DirHandle) -> Self {
        Node::Directory(handle)
    }
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::File(_) => write!(f, "(file)"),
            Node::Directory(_) => write!(f, "(directory)"),
        }
    }
}
