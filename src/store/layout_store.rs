// Layout store - durable persistence of named layouts plus the "current"
// working snapshot, behind the key/value boundary. Storage faults are
// logged and swallowed here; the worst outcome of a bad store is a layout
// that did not persist, never an error surfaced to the interaction layer.

use std::time::SystemTime;

use log::{info, warn};
use once_cell::sync::Lazy;

use crate::geometry::GridRect;
use crate::panel::Panel;
use crate::store::kv::KeyValueStore;

/// Well-known storage keys. No schema versioning; a format change requires
/// a manual migration or `clear_all`.
pub const LAYOUTS_KEY: &str = "dock_grid_layouts";
pub const CURRENT_LAYOUT_KEY: &str = "dock_grid_current";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layout {
    pub id: String,
    pub name: String,
    pub panels: Vec<Panel>,
    pub grid_cols: usize,
    pub grid_rows: usize,
    pub created_at: SystemTime,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(serde::Serialize, serde::Deserialize)]
struct CurrentSnapshot {
    panels: Vec<Panel>,
}

static DEFAULT_LAYOUT: Lazy<Layout> = Lazy::new(|| {
    let mut panels = vec![
        Panel::new("case-list", "Active Cases", "cases", GridRect::new(0, 0, 6, 4)),
        Panel::new(
            "hearing-schedule",
            "Upcoming Hearings",
            "hearings",
            GridRect::new(6, 0, 6, 4),
        ),
        Panel::new(
            "appointments",
            "Appointments",
            "appointments",
            GridRect::new(0, 4, 6, 4),
        ),
        Panel::new(
            "documents",
            "Recent Documents",
            "documents",
            GridRect::new(6, 4, 6, 4),
        ),
    ];
    for (i, panel) in panels.iter_mut().enumerate() {
        panel.z_index = i as i32 + 1;
    }

    Layout {
        id: "default".to_string(),
        name: "Default".to_string(),
        panels,
        grid_cols: 12,
        grid_rows: 8,
        created_at: SystemTime::UNIX_EPOCH,
        is_default: true,
    }
});

/// The built-in starter layout: four non-overlapping panels spanning the
/// 12-column grid. Used whenever no current snapshot has ever been saved.
pub fn default_layout() -> Layout {
    DEFAULT_LAYOUT.clone()
}

pub struct LayoutStore<S: KeyValueStore> {
    backend: S,
}

impl<S: KeyValueStore> LayoutStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Read and decode a key, degrading every failure mode to `None`.
    fn read_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                warn!("failed to read '{}': {}", key, err);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("failed to decode '{}': {}", key, err);
                None
            }
        }
    }

    fn write_json<T: serde::Serialize>(&mut self, key: &str, value: &T) {
        let encoded = match serde_json::to_string(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!("failed to encode '{}': {}", key, err);
                return;
            }
        };
        if let Err(err) = self.backend.set(key, &encoded) {
            warn!("failed to write '{}': {}", key, err);
        }
    }

    /// Upsert by id into the named-layout list and persist the whole list.
    pub fn save_layout(&mut self, layout: Layout) {
        let mut layouts = self.list_layouts();
        match layouts.iter_mut().find(|l| l.id == layout.id) {
            Some(existing) => *existing = layout,
            None => layouts.push(layout),
        }
        self.write_json(LAYOUTS_KEY, &layouts);
    }

    pub fn load_layout(&self, id: &str) -> Option<Layout> {
        self.list_layouts().into_iter().find(|l| l.id == id)
    }

    /// Remove by id; a no-op when the id is unknown.
    pub fn delete_layout(&mut self, id: &str) {
        let mut layouts = self.list_layouts();
        let before = layouts.len();
        layouts.retain(|l| l.id != id);
        if layouts.len() != before {
            info!("deleted layout '{}'", id);
            self.write_json(LAYOUTS_KEY, &layouts);
        }
    }

    pub fn list_layouts(&self) -> Vec<Layout> {
        self.read_json(LAYOUTS_KEY).unwrap_or_default()
    }

    /// Overwrite the current working snapshot wholesale.
    pub fn save_current_layout(&mut self, panels: &[Panel]) {
        let snapshot = CurrentSnapshot {
            panels: panels.to_vec(),
        };
        self.write_json(CURRENT_LAYOUT_KEY, &snapshot);
    }

    pub fn load_current_layout(&self) -> Option<Vec<Panel>> {
        self.read_json::<CurrentSnapshot>(CURRENT_LAYOUT_KEY)
            .map(|snapshot| snapshot.panels)
    }

    /// Drop both the named-layout list and the current snapshot.
    pub fn clear_all(&mut self) {
        for key in [LAYOUTS_KEY, CURRENT_LAYOUT_KEY] {
            if let Err(err) = self.backend.remove(key) {
                warn!("failed to remove '{}': {}", key, err);
            }
        }
    }
}
