use std::sync::Arc;

use pindo::state::{Action, Dispatcher};
use pindo::store::{load_or_default, SledSnapshotStore, SnapshotStore};
use pindo::tree::path::resolve_path;
use pindo::tree::{create_initial_tree, Tree};
use tempfile::TempDir;

fn open(dir: &TempDir) -> Arc<SledSnapshotStore> {
    Arc::new(SledSnapshotStore::open(&dir.path().join("db"), "fs").unwrap())
}

#[test]
fn dispatcher_changes_survive_reopen() {
    let dir = TempDir::new().unwrap();

    let expected = {
        let store = open(&dir);
        let mut dispatcher = Dispatcher::new(store.clone() as Arc<dyn SnapshotStore>);
        let projects = resolve_path(dispatcher.state().tree(), "/Projects").unwrap();
        dispatcher.dispatch(Action::CreateFile {
            parent_id: projects,
            name: "server".to_string(),
            ext: "rs".to_string(),
        });
        dispatcher.state().tree().clone()
    };

    let store = open(&dir);
    let dispatcher = Dispatcher::new(store as Arc<dyn SnapshotStore>);
    assert_eq!(dispatcher.state().tree(), &expected);
    assert!(resolve_path(dispatcher.state().tree(), "/Projects/server.rs").is_some());
}

#[test]
fn empty_store_loads_seed_tree() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    assert!(store.load().unwrap().is_none());

    let tree = load_or_default(store.as_ref());
    assert_eq!(tree.len(), create_initial_tree().len());
    assert_eq!(tree.root().unwrap().name, "Root");
}

#[test]
fn unusable_snapshots_fall_back_to_seed() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);

    store.put_raw(b"{\"nodes\": {}, ").unwrap();
    assert!(store.load().unwrap().is_none());

    store.put_raw(br#"{"nodes": {}, "rootId": "gone"}"#).unwrap();
    assert!(store.load().unwrap().is_none());

    let dispatcher = Dispatcher::new(store as Arc<dyn SnapshotStore>);
    assert_eq!(dispatcher.state().tree().len(), 7);
}

#[test]
fn stored_blob_uses_wire_field_names() {
    let dir = TempDir::new().unwrap();
    let store = open(&dir);
    let tree = Tree::with_root("Only");
    store.save(&tree).unwrap();

    let loaded = store.load().unwrap().unwrap();
    assert_eq!(loaded, tree);

    let json: serde_json::Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
    let root_id = json["rootId"].as_str().unwrap();
    assert_eq!(json["nodes"][root_id]["type"], "folder");
    assert!(json["nodes"][root_id]["parentId"].is_null());
    assert_eq!(json["nodes"][root_id]["children"], serde_json::json!([]));
}
