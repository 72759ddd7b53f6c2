// Presentation adapter - the thin shim between raw pointer events and the
// interaction controller, plus the grid-to-screen projection used for
// rendering. No placement logic lives here.

mod formatters;

pub use formatters::{format_grid, format_panel_list, panel_tag};

use crate::geometry::{grid_to_pixels, PixelRect};
use crate::panel::{Panel, PanelRegistry, ResizeHandle};
use crate::store::KeyValueStore;

pub struct PresentationAdapter<S: KeyValueStore> {
    registry: PanelRegistry<S>,
}

impl<S: KeyValueStore> PresentationAdapter<S> {
    pub fn new(registry: PanelRegistry<S>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &PanelRegistry<S> {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut PanelRegistry<S> {
        &mut self.registry
    }

    /// Screen rectangle for one panel under the current container size.
    pub fn screen_rect(&self, panel: &Panel) -> PixelRect {
        grid_to_pixels(&panel.position, self.registry.config())
    }

    /// Visible panels with their screen rects, back to front, ready to
    /// paint in order.
    pub fn paint_order(&self) -> Vec<(&Panel, PixelRect)> {
        let mut visible: Vec<&Panel> = self
            .registry
            .panels()
            .iter()
            .filter(|p| p.is_visible)
            .collect();
        visible.sort_by_key(|p| p.z_index);
        visible
            .into_iter()
            .map(|p| (p, grid_to_pixels(&p.position, self.registry.config())))
            .collect()
    }

    // ---- input boundary ----

    /// Pointer pressed on a panel's title bar; `offset` is the pointer
    /// position relative to the panel's pixel origin.
    pub fn pointer_down(&mut self, panel_id: &str, offset: (f32, f32)) -> bool {
        self.registry.start_drag(panel_id, offset)
    }

    /// Pointer pressed on a panel's resize handle.
    pub fn resize_down(&mut self, panel_id: &str, handle: ResizeHandle, pointer: (f32, f32)) -> bool {
        self.registry.start_resize(panel_id, handle, pointer)
    }

    /// Pointer moved on the interaction surface. Routed to whichever
    /// interaction is active; ignored when idle.
    pub fn pointer_move(&mut self, position: (f32, f32)) {
        if self.registry.interaction().is_dragging() {
            self.registry.update_drag(position);
        } else if self.registry.interaction().is_resizing() {
            self.registry.update_resize(position);
        }
    }

    /// Pointer released anywhere on the surface.
    pub fn pointer_up(&mut self) {
        if self.registry.interaction().is_dragging() {
            self.registry.end_drag();
        } else if self.registry.interaction().is_resizing() {
            self.registry.end_resize();
        }
    }

    /// The surface lost the pointer (focus change, window blur). Any
    /// active interaction is cancelled, not committed.
    pub fn surface_lost(&mut self) {
        if self.registry.interaction().is_dragging() {
            self.registry.cancel_drag();
        } else if self.registry.interaction().is_resizing() {
            self.registry.cancel_resize();
        }
    }

    pub fn container_resized(&mut self, width: f32, height: f32) {
        self.registry.container_resized(width, height);
    }
}
