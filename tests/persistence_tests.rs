//! Layout persistence through the key/value boundary: round-trips via the
//! file-backed store, fault tolerance, and session restore.

use std::fs;
use std::time::SystemTime;

use dock_grid::{
    default_layout, FileStore, GridConfig, Layout, LayoutStore, MemoryStore, PanelRegistry,
    CURRENT_LAYOUT_KEY, LAYOUTS_KEY,
};

fn named_layout(id: &str, name: &str) -> Layout {
    Layout {
        id: id.to_string(),
        name: name.to_string(),
        panels: default_layout().panels,
        grid_cols: 12,
        grid_rows: 8,
        created_at: SystemTime::now(),
        is_default: false,
    }
}

#[test]
fn file_store_round_trips_a_layout_deep_equal() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LayoutStore::new(FileStore::new(dir.path()));

    let mut original = named_layout("motions", "Motion practice");
    original.panels[0].is_minimized = true;
    original.panels[1].z_index = 42;

    store.save_layout(original.clone());
    assert_eq!(store.load_layout("motions"), Some(original));
}

#[test]
fn file_store_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = LayoutStore::new(FileStore::new(dir.path()));
        store.save_layout(named_layout("l1", "first session"));
        store.save_current_layout(&default_layout().panels[..2]);
    }

    let store = LayoutStore::new(FileStore::new(dir.path()));
    assert_eq!(store.load_layout("l1").unwrap().name, "first session");
    assert_eq!(store.load_current_layout().unwrap().len(), 2);
}

#[test]
fn clear_all_wipes_the_store_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = LayoutStore::new(FileStore::new(dir.path()));
    store.save_layout(named_layout("l1", "gone soon"));
    store.save_current_layout(&default_layout().panels);

    store.clear_all();
    assert!(store.list_layouts().is_empty());
    assert_eq!(store.load_current_layout(), None);
    assert!(!dir.path().join(format!("{}.json", LAYOUTS_KEY)).exists());
    assert!(!dir
        .path()
        .join(format!("{}.json", CURRENT_LAYOUT_KEY))
        .exists());
}

#[test]
fn corrupt_files_read_as_missing_not_errors() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(format!("{}.json", LAYOUTS_KEY)), "{{{{").unwrap();
    fs::write(
        dir.path().join(format!("{}.json", CURRENT_LAYOUT_KEY)),
        "[1,2,3]",
    )
    .unwrap();

    let store = LayoutStore::new(FileStore::new(dir.path()));
    assert!(store.list_layouts().is_empty());
    assert_eq!(store.load_current_layout(), None);
    assert_eq!(store.load_layout("anything"), None);
}

#[test]
fn registry_session_restores_from_file_store() {
    let dir = tempfile::tempdir().unwrap();

    let saved_id;
    {
        let store = LayoutStore::new(FileStore::new(dir.path()));
        let mut reg = PanelRegistry::new(GridConfig::default(), store);
        reg.toggle_minimize("documents");
        reg.bring_to_front("appointments");
        saved_id = reg.save_layout("end of day");
    }

    let store = LayoutStore::new(FileStore::new(dir.path()));
    let mut reg = PanelRegistry::new(GridConfig::default(), store);
    assert!(reg.panel("documents").unwrap().is_minimized);

    let top = reg.panels().iter().max_by_key(|p| p.z_index).unwrap();
    assert_eq!(top.id, "appointments");

    assert_eq!(reg.list_layouts().len(), 1);
    assert!(reg.load_layout(&saved_id));
    reg.delete_layout(&saved_id);
    assert!(reg.list_layouts().is_empty());
}

#[test]
fn fresh_store_yields_the_default_layout() {
    let store = LayoutStore::new(MemoryStore::new());
    let reg = PanelRegistry::new(GridConfig::default(), store);

    let default = default_layout();
    assert_eq!(reg.panels(), &default.panels[..]);
    assert!(default.is_default);
}

#[test]
fn layout_json_uses_plain_field_names() {
    // The persisted format is consumed by the dashboard frontend as-is;
    // keep the key names stable.
    let layout = named_layout("wire", "wire check");
    let json = serde_json::to_string(&layout).unwrap();
    for key in [
        "\"id\"",
        "\"name\"",
        "\"panels\"",
        "\"grid_cols\"",
        "\"grid_rows\"",
        "\"created_at\"",
        "\"content_ref\"",
        "\"z_index\"",
        "\"is_pinned\"",
    ] {
        assert!(json.contains(key), "missing {} in {}", key, json);
    }
}
