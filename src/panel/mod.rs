// Panel module - panel records, transient interaction state, and the
// registry that owns both.

mod drag;
mod info;
mod registry;

pub use drag::{DragState, InteractionState, NoopCapture, PointerCapture, ResizeHandle, ResizeState};
pub use info::{DropZone, Panel, PanelSize, PanelSpec};
pub use registry::PanelRegistry;
