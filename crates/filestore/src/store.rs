use crate::dir::Handle as DirHandle;
use crate::error::Result;
use crate::node::Node;
use crate::path::Path;
use async_trait::async_trait;

/// Root entry point of a backend.
///
/// Call [`FileStore::init`] once before anything else; behavior before that
/// is up to the backend.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Backend name, for display
    fn name(&self) -> &str;

    /// Asynchronous setup: seeding, connecting, handshakes
    async fn init(&mut self) -> Result<()>;

    /// The backend's root directory
    fn root(&self) -> DirHandle;

    /// Resolve a multi-component path from the root.
    ///
    /// A missing component, or a file with components left to descend, yields
    /// `Ok(None)`. Errors are reserved for backend failures.
    async fn nested_item(&self, path: &str) -> Result<Option<Node>> {
        let path = Path::parse(path);
        let mut current = Node::Directory(self.root());
        for component in path.components() {
            // Descending through a file is impossible
            let next = match current.as_dir() {
                Some(dir) => dir.get(component).await?,
                None => return Ok(None),
            };
            match next {
                Some(child) => current = child,
                None => return Ok(None),
            }
        }
        Ok(Some(current))
    }
}
