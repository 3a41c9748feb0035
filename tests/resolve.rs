mod common;

use common::{Call, MockRemote, ROOT_ID, session};
use tbpan::{ErrorKind, KindFilter, NodeKind, PanError};

#[tokio::test]
async fn test_resolve_root_touches_nothing() {
    let remote = MockRemote::new();
    let session = session(&remote, 4);

    for path in ["/", "", "//"] {
        let node = session.resolve(path, KindFilter::Any).await.unwrap();
        assert_eq!(node.id, ROOT_ID);
        assert!(node.is_folder());
    }
    assert!(remote.calls().is_empty());
    assert!(session.cache().is_empty());
}

#[tokio::test]
async fn test_resolve_nested_path_cold_then_warm() {
    let remote = MockRemote::new();
    let a = remote.add_folder(ROOT_ID, "a");
    let b = remote.add_folder(&a, "b");
    let c = remote.add_file(&b, "c.txt", b"hello");
    let session = session(&remote, 8);

    let node = session.resolve("/a/b/c.txt", KindFilter::File).await.unwrap();
    assert_eq!(node.id, c);
    assert_eq!(
        remote.calls(),
        vec![
            Call::List(ROOT_ID.to_string()),
            Call::List(a.clone()),
            Call::List(b.clone()),
        ]
    );
    assert_eq!(session.cache().get("/a").as_deref(), Some(a.as_str()));
    assert_eq!(session.cache().get("/a/b").as_deref(), Some(b.as_str()));

    remote.clear_calls();
    let node = session.resolve("a/b/c.txt/", KindFilter::Any).await.unwrap();
    assert_eq!(node.id, c);
    assert_eq!(remote.calls(), vec![Call::List(b)]);
}

#[tokio::test]
async fn test_resolve_walks_down_from_deepest_cached_ancestor() {
    let remote = MockRemote::new();
    let a = remote.add_folder(ROOT_ID, "a");
    let b = remote.add_folder(&a, "b");
    let c = remote.add_folder(&b, "c");
    remote.add_file(&c, "leaf", b"x");
    let session = session(&remote, 8);
    session.cache().put("/a", a.clone());

    session.resolve("/a/b/c/leaf", KindFilter::File).await.unwrap();
    assert_eq!(
        remote.calls(),
        vec![Call::List(a), Call::List(b), Call::List(c)]
    );
}

#[tokio::test]
async fn test_evicted_folder_is_listed_again() {
    let remote = MockRemote::new();
    for name in ["a", "b", "c"] {
        let id = remote.add_folder(ROOT_ID, name);
        remote.add_file(&id, "x", b"x");
    }
    let session = session(&remote, 2);

    for path in ["/a/x", "/b/x", "/c/x"] {
        session.resolve(path, KindFilter::File).await.unwrap();
    }
    assert_eq!(session.cache().len(), 2);
    assert!(session.cache().get("/a").is_none());
    assert_eq!(remote.list_calls(ROOT_ID), 3);

    session.resolve("/a/x", KindFilter::File).await.unwrap();
    assert_eq!(remote.list_calls(ROOT_ID), 4);
}

#[tokio::test]
async fn test_kind_filter_picks_between_same_names() {
    let remote = MockRemote::new();
    let file = remote.add_file(ROOT_ID, "report", b"pdf");
    let folder = remote.add_folder(ROOT_ID, "report");
    let session = session(&remote, 4);

    let node = session.resolve("/report", KindFilter::File).await.unwrap();
    assert_eq!(node.id, file);
    assert_eq!(node.kind, NodeKind::File);

    let node = session.resolve("/report", KindFilter::Folder).await.unwrap();
    assert_eq!(node.id, folder);

    // First in listing order wins.
    let node = session.resolve("/report", KindFilter::Any).await.unwrap();
    assert_eq!(node.id, file);
}

#[tokio::test]
async fn test_file_is_not_a_folder_ancestor() {
    let remote = MockRemote::new();
    remote.add_file(ROOT_ID, "a", b"x");
    let session = session(&remote, 4);

    let err = session.resolve("/a/b", KindFilter::Any).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(session.cache().is_empty());
}

#[tokio::test]
async fn test_not_found_names_path_and_parent() {
    let remote = MockRemote::new();
    remote.add_folder(ROOT_ID, "docs");
    let session = session(&remote, 4);

    let err = session
        .resolve("/docs/missing.txt", KindFilter::File)
        .await
        .unwrap_err();
    match err.root_cause() {
        PanError::NotFound { path, parent } => {
            assert_eq!(path, "/docs/missing.txt");
            assert_eq!(parent, "/docs");
        }
        other => panic!("unexpected error: {other:?}"),
    }

    let err = session.resolve("/nope", KindFilter::Any).await.unwrap_err();
    assert_eq!(err.to_string(), "\"/nope\" not found in \"/\"");
}

#[tokio::test]
async fn test_stat() {
    let remote = MockRemote::new();
    let id = remote.add_file(ROOT_ID, "notes.txt", b"abc");
    let session = session(&remote, 4);

    let node = session.stat("/notes.txt").await.unwrap().unwrap();
    assert_eq!(node.id, id);
    assert_eq!(node.size, 3);

    assert!(session.stat("/other.txt").await.unwrap().is_none());
    assert!(session.stat("/missing/other.txt").await.unwrap().is_none());
}
