use crate::EntryType;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Unique identifier for a node, assigned at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeID(uuid7::Uuid);

impl NodeID {
    /// Generate a fresh identifier, unique for the life of the process
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid7::uuid7())
    }

    /// Short form for listings: the last 8 hex digits (the random part)
    #[must_use]
    pub fn short(&self) -> String {
        let hex: String = self
            .0
            .to_string()
            .chars()
            .filter(char::is_ascii_hexdigit)
            .collect();
        hex[hex.len().saturating_sub(8)..].to_string()
    }
}

impl std::fmt::Display for NodeID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Milliseconds since the Unix epoch
pub type Timestamp = i64;

/// Current wall-clock time, never earlier than `previous`
#[must_use]
pub fn now_after(previous: Timestamp) -> Timestamp {
    chrono::Utc::now().timestamp_millis().max(previous)
}

/// Read-only metadata snapshot of a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatItem {
    pub name: String,

    /// Bytes for a file, child count for a directory
    pub size: u64,

    pub ctime: Timestamp,
    pub mtime: Timestamp,
    pub atime: Timestamp,

    pub id: NodeID,

    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Identity and timestamps shared by every node kind.
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    pub id: NodeID,
    pub name: String,
    pub ctime: Timestamp,
    pub mtime: Timestamp,
    pub atime: Timestamp,
}

impl NodeMetadata {
    pub fn new<S: Into<String>>(name: S) -> Self {
        let now = now_after(0);
        Self {
            id: NodeID::generate(),
            name: name.into(),
            ctime: now,
            mtime: now,
            atime: now,
        }
    }

    pub fn accessed(&mut self) {
        self.atime = now_after(self.atime);
    }

    pub fn modified(&mut self) {
        self.mtime = now_after(self.mtime);
    }

    pub fn stat(&self, size: u64, entry_type: EntryType) -> StatItem {
        StatItem {
            name: self.name.clone(),
            size,
            ctime: self.ctime,
            mtime: self.mtime,
            atime: self.atime,
            id: self.id,
            entry_type,
        }
    }
}

/// Common metadata interface for all filesystem nodes
#[async_trait]
pub trait Metadata: Send + Sync {
    /// Snapshot of the node's metadata. Does not count as an access.
    async fn stat(&self) -> Result<StatItem>;

    /// Update the node's own name after its parent relinks it.
    fn set_name(&mut self, name: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<_> = (0..1000).map(|_| NodeID::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_short_id() {
        let id = NodeID::generate();
        let short = id.short();
        assert_eq!(short.len(), 8);
        assert!(id.to_string().replace('-', "").ends_with(&short));
    }

    #[test]
    fn test_timestamps_never_decrease() {
        let mut meta = NodeMetadata::new("x");
        let far_future = meta.mtime + 1_000_000;
        meta.mtime = far_future;
        meta.modified();
        assert_eq!(meta.mtime, far_future);
        meta.accessed();
        assert!(meta.atime >= meta.ctime);
    }

    #[test]
    fn test_stat_serializes_type_field() {
        let meta = NodeMetadata::new("notes.txt");
        let stat = meta.stat(5, EntryType::File);
        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(json["type"], "file");
        assert_eq!(json["name"], "notes.txt");
        assert_eq!(json["size"], 5);
    }
}
