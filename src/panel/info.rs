// Panel records and related structures. A panel is one dashboard widget:
// it knows where it sits on the grid and how it is stacked, but never what
// it renders — `content_ref` is an opaque key resolved by the host UI.

use crate::geometry::GridRect;

/// Optional size bounds in grid cells. Present on the panel record and
/// persisted, but not consulted by placement or resize (known gap).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PanelSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Panel {
    pub id: String,
    pub title: String,
    /// Opaque content key; the layout engine never interprets it.
    pub content_ref: String,
    pub position: GridRect,
    pub is_minimized: bool,
    pub is_pinned: bool,
    pub is_visible: bool,
    pub z_index: i32,
    #[serde(default)]
    pub min_size: Option<PanelSize>,
    #[serde(default)]
    pub max_size: Option<PanelSize>,
}

impl Panel {
    pub fn new(id: &str, title: &str, content_ref: &str, position: GridRect) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content_ref: content_ref.to_string(),
            position,
            is_minimized: false,
            is_pinned: false,
            is_visible: true,
            z_index: 0,
            min_size: None,
            max_size: None,
        }
    }

    /// Whether this panel blocks grid cells. Minimized and hidden panels
    /// keep their rect but do not occupy space.
    pub fn occupies_space(&self) -> bool {
        self.is_visible && !self.is_minimized
    }
}

/// Request for a new panel. Position and z-order are assigned by the
/// registry, not the caller.
#[derive(Clone, Debug)]
pub struct PanelSpec {
    pub id: String,
    pub title: String,
    pub content_ref: String,
    pub w: i32,
    pub h: i32,
    pub min_size: Option<PanelSize>,
    pub max_size: Option<PanelSize>,
}

impl PanelSpec {
    pub fn new(id: &str, title: &str, content_ref: &str, w: i32, h: i32) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            content_ref: content_ref.to_string(),
            w: w.max(1),
            h: h.max(1),
            min_size: None,
            max_size: None,
        }
    }
}

/// Advisory drag-target hint beside another panel. Computed at drag start,
/// rendered as a highlight, never consulted for the final drop position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DropZone {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub is_active: bool,
}
