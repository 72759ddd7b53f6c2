// Transient interaction state. One drag or resize may be active at a time
// for the whole registry; the state lives only between the start and end
// pointer events and is never persisted.

use crate::geometry::GridRect;
use crate::panel::DropZone;

/// Which edge or corner an active resize grabs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeHandle {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

#[derive(Clone, Debug)]
pub struct DragState {
    pub panel_id: String,
    /// Pointer offset from the panel's pixel origin at grab time.
    pub drag_offset: (f32, f32),
    /// Position held when the drag began; restored on cancellation.
    pub start_position: GridRect,
    /// Advisory hints computed once at drag start.
    pub drop_zones: Vec<DropZone>,
}

#[derive(Clone, Debug)]
pub struct ResizeState {
    pub panel_id: String,
    pub handle: ResizeHandle,
    /// Pointer position at grab time.
    pub anchor: (f32, f32),
    pub start_position: GridRect,
}

#[derive(Clone, Debug, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragState),
    Resizing(ResizeState),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, InteractionState::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, InteractionState::Resizing(_))
    }
}

/// Surface-wide pointer subscription held for the lifetime of one
/// interaction. `acquire` is called when a drag or resize actually starts,
/// and the registry guarantees exactly one `release` per `acquire` on every
/// exit path, normal release or external cancellation. A leaked capture is
/// a permanently-active listener, so the pairing is treated as a hard
/// invariant rather than a best-effort cleanup.
pub trait PointerCapture {
    fn acquire(&mut self);
    fn release(&mut self);
}

/// Capture used when no interaction surface is wired in (tests, demos).
#[derive(Default)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&mut self) {}
    fn release(&mut self) {}
}
