use crate::EntryType;
use crate::error::{ErrorKind, FilestoreError};
use crate::memory::MemoryDirectory;

#[tokio::test]
async fn test_touch_creates_empty_file() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("f").await.unwrap();

    assert!(dir.exists("f").await.unwrap());
    let content = dir.open("f", false).await.unwrap().read().await.unwrap();
    assert!(content.is_empty());
}

#[tokio::test]
async fn test_touch_twice_already_exists() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("f").await.unwrap();

    let result = dir.touch("f").await;
    assert_eq!(result, Err(FilestoreError::already_exists("f")));

    // Either type blocks creation
    dir.mkdir("d").await.unwrap();
    assert_eq!(dir.touch("d").await, Err(FilestoreError::already_exists("d")));
    assert_eq!(dir.mkdir("f").await, Err(FilestoreError::already_exists("f")));
}

#[tokio::test]
async fn test_open_missing_not_found() {
    let dir = MemoryDirectory::new_handle("root");
    let err = dir.open("missing", false).await.unwrap_err();
    assert_eq!(err, FilestoreError::not_found("missing"));
    assert!(!dir.exists("missing").await.unwrap());
}

#[tokio::test]
async fn test_open_creates_when_asked() {
    let dir = MemoryDirectory::new_handle("root");
    let file = dir.open("new.txt", true).await.unwrap();
    file.write(b"data").await.unwrap();

    // A second create-open returns the same node, not a fresh one
    let again = dir.open("new.txt", true).await.unwrap();
    assert!(file.same_node(&again));
    assert_eq!(again.read().await.unwrap(), b"data");
}

#[tokio::test]
async fn test_open_directory_is_a_directory() {
    let dir = MemoryDirectory::new_handle("root");
    dir.mkdir("d").await.unwrap();

    assert_eq!(dir.open("d", false).await.unwrap_err().kind(), ErrorKind::IsADirectory);
    assert_eq!(dir.open("d", true).await.unwrap_err().kind(), ErrorKind::IsADirectory);
}

#[tokio::test]
async fn test_opendir_file_not_a_directory() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("f").await.unwrap();

    assert_eq!(dir.opendir("f").await.unwrap_err(), FilestoreError::not_a_directory("f"));
    assert_eq!(dir.opendir("nope").await.unwrap_err(), FilestoreError::not_found("nope"));
    // opendir never creates
    assert!(!dir.exists("nope").await.unwrap());
}

#[tokio::test]
async fn test_opendir_returns_live_directory() {
    let root = MemoryDirectory::new_handle("root");
    root.mkdir("docs").await.unwrap();
    root.opendir("docs").await.unwrap().touch("a").await.unwrap();

    let docs = root.opendir("docs").await.unwrap();
    assert!(docs.exists("a").await.unwrap());
}

#[tokio::test]
async fn test_rename() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("a").await.unwrap();
    let before = dir.open("a", false).await.unwrap().stat().await.unwrap();

    dir.rename("a", "b").await.unwrap();

    assert!(!dir.exists("a").await.unwrap());
    assert!(dir.exists("b").await.unwrap());
    let after = dir.open("b", false).await.unwrap().stat().await.unwrap();
    assert_eq!(after.name, "b");
    assert_eq!(after.id, before.id);
}

#[tokio::test]
async fn test_rename_directory_updates_name() {
    let dir = MemoryDirectory::new_handle("root");
    dir.mkdir("old").await.unwrap();
    dir.rename("old", "new").await.unwrap();

    let stat = dir.opendir("new").await.unwrap().stat().await.unwrap();
    assert_eq!(stat.name, "new");
    assert_eq!(stat.entry_type, EntryType::Directory);
}

#[tokio::test]
async fn test_rename_errors() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("a").await.unwrap();
    dir.touch("b").await.unwrap();

    assert_eq!(dir.rename("x", "y").await, Err(FilestoreError::not_found("x")));
    assert_eq!(dir.rename("a", "b").await, Err(FilestoreError::already_exists("b")));
    assert_eq!(dir.rename("a", "a").await, Err(FilestoreError::already_exists("a")));

    // Failed renames leave both entries in place
    assert!(dir.exists("a").await.unwrap());
    assert!(dir.exists("b").await.unwrap());
}

#[tokio::test]
async fn test_unaddressable_names_rejected() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("a").await.unwrap();

    for name in ["", ".", "..", "a/b", "/x", "x/"] {
        let err = Err(FilestoreError::not_found(name));
        assert_eq!(dir.touch(name).await, err);
        assert_eq!(dir.mkdir(name).await, err);
        assert_eq!(dir.open(name, true).await.map(|_| ()), err);
        assert_eq!(dir.rename("a", name).await, err);

        let detached = MemoryDirectory::new_handle("detached");
        assert_eq!(dir.put_in(name, detached.into()).await, err);
    }

    // Nothing was created, and the source of the failed renames is intact
    assert_eq!(dir.stat().await.unwrap().size, 1);
    assert!(dir.exists("a").await.unwrap());
}

#[tokio::test]
async fn test_remove_file() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("f").await.unwrap();
    dir.remove("f").await.unwrap();
    assert!(!dir.exists("f").await.unwrap());

    assert_eq!(dir.remove("f").await, Err(FilestoreError::not_found("f")));
}

#[tokio::test]
async fn test_remove_directory_needs_force() {
    let dir = MemoryDirectory::new_handle("root");
    dir.mkdir("d").await.unwrap();
    dir.opendir("d").await.unwrap().touch("inner").await.unwrap();

    assert_eq!(dir.remove("d").await, Err(FilestoreError::is_a_directory("d")));
    assert!(dir.exists("d").await.unwrap());

    dir.removeforce("d").await.unwrap();
    assert!(!dir.exists("d").await.unwrap());
}

#[tokio::test]
async fn test_removeforce_missing_is_noop() {
    let dir = MemoryDirectory::new_handle("root");
    dir.removeforce("missing").await.unwrap();
    dir.touch("f").await.unwrap();
    dir.removeforce("f").await.unwrap();
    assert!(!dir.exists("f").await.unwrap());
}

#[tokio::test]
async fn test_list_and_liststat() {
    let dir = MemoryDirectory::new_handle("root");
    dir.touch("b.txt").await.unwrap();
    dir.mkdir("a").await.unwrap();
    dir.open("c.txt", true).await.unwrap().write(b"abc").await.unwrap();

    let nodes = dir.list().await.unwrap();
    assert_eq!(nodes.len(), 3);
    assert!(nodes[0].is_dir());

    let stats = dir.liststat().await.unwrap();
    let names: Vec<_> = stats.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b.txt", "c.txt"]);
    assert_eq!(stats[0].entry_type, EntryType::Directory);
    assert_eq!(stats[2].size, 3);

    for (node, stat) in nodes.iter().zip(&stats) {
        assert_eq!(node.stat().await.unwrap(), *stat);
    }
}

#[tokio::test]
async fn test_directory_size_is_child_count() {
    let dir = MemoryDirectory::new_handle("root");
    assert_eq!(dir.stat().await.unwrap().size, 0);

    dir.touch("a").await.unwrap();
    dir.mkdir("b").await.unwrap();
    assert_eq!(dir.stat().await.unwrap().size, 2);

    dir.removeforce("b").await.unwrap();
    assert_eq!(dir.stat().await.unwrap().size, 1);
}

#[tokio::test]
async fn test_put_in_attaches_detached_node() {
    let root = MemoryDirectory::new_handle("root");
    let staged = MemoryDirectory::new_handle("staging");
    staged.touch("inside").await.unwrap();

    root.put_in("published", staged.clone().into()).await.unwrap();

    let published = root.opendir("published").await.unwrap();
    assert!(published.same_node(&staged));
    assert_eq!(published.stat().await.unwrap().name, "published");
    assert!(published.exists("inside").await.unwrap());

    let other = MemoryDirectory::new_handle("other");
    assert_eq!(
        root.put_in("published", other.into()).await,
        Err(FilestoreError::already_exists("published"))
    );
}

#[tokio::test]
async fn test_concurrent_touch_creates_once() {
    let dir = MemoryDirectory::new_handle("root");

    let attempts = (0..16).map(|_| {
        let dir = dir.clone();
        tokio::spawn(async move { dir.touch("contended").await })
    });
    let results = futures::future::join_all(attempts).await;

    let created = results
        .into_iter()
        .filter(|r| matches!(r, Ok(Ok(()))))
        .count();
    assert_eq!(created, 1);
    assert_eq!(dir.stat().await.unwrap().size, 1);
}
