// Panel registry and interaction controller. Owns the authoritative panel
// collection, the single-active drag/resize state machine, z-order
// bookkeeping, and the write-through to the layout store. The presentation
// layer only ever reads from here.

use log::{debug, info};

use crate::config::GridConfig;
use crate::geometry::{grid_to_pixels, pixels_to_grid, GridRect};
use crate::grid::{auto_arrange, find_available_position, generate_drop_zones, snap_to_grid};
use crate::panel::drag::{
    DragState, InteractionState, NoopCapture, PointerCapture, ResizeHandle, ResizeState,
};
use crate::panel::{DropZone, Panel, PanelSpec};
use crate::store::{default_layout, KeyValueStore, Layout, LayoutStore};

pub struct PanelRegistry<S: KeyValueStore> {
    config: GridConfig,
    panels: Vec<Panel>,
    interaction: InteractionState,
    capture: Box<dyn PointerCapture>,
    store: LayoutStore<S>,
}

impl<S: KeyValueStore> PanelRegistry<S> {
    /// Restore the previous session's panel collection, or fall back to the
    /// built-in default layout when nothing was ever saved.
    pub fn new(config: GridConfig, store: LayoutStore<S>) -> Self {
        Self::with_capture(config, store, Box::new(NoopCapture))
    }

    pub fn with_capture(
        config: GridConfig,
        store: LayoutStore<S>,
        capture: Box<dyn PointerCapture>,
    ) -> Self {
        let panels = store
            .load_current_layout()
            .unwrap_or_else(|| default_layout().panels);

        Self {
            config,
            panels,
            interaction: InteractionState::Idle,
            capture,
            store,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Read-only projection of the panel collection.
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Drop zones of the active drag, empty otherwise.
    pub fn drop_zones(&self) -> &[DropZone] {
        match &self.interaction {
            InteractionState::Dragging(drag) => &drag.drop_zones,
            _ => &[],
        }
    }

    fn next_z_index(&self) -> i32 {
        self.panels.iter().map(|p| p.z_index).max().unwrap_or(0) + 1
    }

    fn persist(&mut self) {
        self.store.save_current_layout(&self.panels);
    }

    /// Tear down the active interaction, releasing the pointer capture
    /// exactly once. Interactions only start from `Idle` and this is the
    /// only path back to `Idle`, so the acquire/release pairing holds on
    /// every exit, normal or cancelled.
    fn finish_interaction(&mut self) -> InteractionState {
        let state = std::mem::take(&mut self.interaction);
        if !state.is_idle() {
            self.capture.release();
        }
        state
    }

    // ---- panel lifecycle ----

    /// Add a panel at the first free position, on top of the stack.
    /// Refused when the id is already taken.
    pub fn add_panel(&mut self, spec: PanelSpec) -> bool {
        if self.panels.iter().any(|p| p.id == spec.id) {
            debug!("add_panel refused, duplicate id '{}'", spec.id);
            return false;
        }

        let position = find_available_position(spec.w, spec.h, &self.panels, &self.config);
        let mut panel = Panel::new(&spec.id, &spec.title, &spec.content_ref, position);
        panel.z_index = self.next_z_index();
        panel.min_size = spec.min_size;
        panel.max_size = spec.max_size;

        self.panels.push(panel);
        self.persist();
        true
    }

    /// Remove a panel. Other panels keep their z indices and positions.
    pub fn remove_panel(&mut self, id: &str) -> bool {
        let before = self.panels.len();
        self.panels.retain(|p| p.id != id);
        if self.panels.len() == before {
            return false;
        }
        self.persist();
        true
    }

    pub fn toggle_minimize(&mut self, id: &str) -> bool {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        panel.is_minimized = !panel.is_minimized;
        self.persist();
        true
    }

    pub fn toggle_pin(&mut self, id: &str) -> bool {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        panel.is_pinned = !panel.is_pinned;
        self.persist();
        true
    }

    pub fn set_visible(&mut self, id: &str, visible: bool) -> bool {
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        panel.is_visible = visible;
        self.persist();
        true
    }

    /// Raise a panel above every other. Always increments, even when the
    /// panel is already on top.
    pub fn bring_to_front(&mut self, id: &str) -> bool {
        let next_z = self.next_z_index();
        let Some(panel) = self.panels.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        panel.z_index = next_z;
        self.persist();
        true
    }

    // ---- drag state machine ----

    /// Begin dragging a panel. Refused (silently, no state change) when
    /// another interaction is active, the panel is unknown or hidden, or
    /// the panel is pinned. On success the panel is brought to the front,
    /// drop zones are computed, and the surface-wide pointer capture is
    /// acquired.
    pub fn start_drag(&mut self, id: &str, offset: (f32, f32)) -> bool {
        if !self.interaction.is_idle() {
            return false;
        }
        let Some(panel) = self.panel(id) else {
            return false;
        };
        if panel.is_pinned || !panel.is_visible {
            debug!("start_drag refused for '{}'", id);
            return false;
        }

        let start_position = panel.position;
        let drop_zones = generate_drop_zones(id, &self.panels, &self.config);

        self.bring_to_front(id);
        self.capture.acquire();
        self.interaction = InteractionState::Dragging(DragState {
            panel_id: id.to_string(),
            drag_offset: offset,
            start_position,
            drop_zones,
        });
        true
    }

    /// Track the pointer mid-drag. The raw pointer-derived rect is written
    /// straight to the panel so rendering follows the pointer smoothly;
    /// intermediate rects may be grid-invalid and are deliberately not
    /// persisted. Only `end_drag` writes a snapped rect through the store.
    pub fn update_drag(&mut self, pointer: (f32, f32)) {
        let InteractionState::Dragging(drag) = &self.interaction else {
            return;
        };
        let panel_id = drag.panel_id.clone();
        let (off_x, off_y) = drag.drag_offset;

        let Some(panel) = self.panels.iter_mut().find(|p| p.id == panel_id) else {
            return;
        };
        let px = grid_to_pixels(&panel.position, &self.config);
        let raw = pixels_to_grid(pointer.0 - off_x, pointer.1 - off_y, px.w, px.h, &self.config);
        panel.position = GridRect::new(raw.x, raw.y, panel.position.w, panel.position.h);
    }

    /// Finish the drag: snap the live rect onto the grid and go back to
    /// `Idle`. No overlap check happens here; two panels may end a drag
    /// overlapping and that is accepted behavior.
    pub fn end_drag(&mut self) -> bool {
        if !self.interaction.is_dragging() {
            return false;
        }
        let InteractionState::Dragging(drag) = self.finish_interaction() else {
            return false;
        };
        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == drag.panel_id) {
            panel.position = snap_to_grid(&panel.position, &self.config);
        }
        self.persist();
        true
    }

    /// Abort the drag (surface lost focus, escape pressed). The panel
    /// returns to the rect it held when the drag began, so a raw invalid
    /// rect can never outlive the interaction.
    pub fn cancel_drag(&mut self) -> bool {
        if !self.interaction.is_dragging() {
            return false;
        }
        let InteractionState::Dragging(drag) = self.finish_interaction() else {
            return false;
        };
        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == drag.panel_id) {
            panel.position = drag.start_position;
        }
        self.persist();
        true
    }

    // ---- resize state machine (mirrors drag) ----

    pub fn start_resize(&mut self, id: &str, handle: ResizeHandle, pointer: (f32, f32)) -> bool {
        if !self.interaction.is_idle() {
            return false;
        }
        let Some(panel) = self.panel(id) else {
            return false;
        };
        if panel.is_pinned || panel.is_minimized || !panel.is_visible {
            debug!("start_resize refused for '{}'", id);
            return false;
        }

        let start_position = panel.position;
        self.bring_to_front(id);
        self.capture.acquire();
        self.interaction = InteractionState::Resizing(ResizeState {
            panel_id: id.to_string(),
            handle,
            anchor: pointer,
            start_position,
        });
        true
    }

    /// Grow or shrink the rect from its grab-time shape by the pointer
    /// delta, quantized to whole cells. Sizes are floored at one cell;
    /// origins may leave the grid mid-resize just as they may mid-drag.
    /// `min_size`/`max_size` are not consulted.
    pub fn update_resize(&mut self, pointer: (f32, f32)) {
        let InteractionState::Resizing(resize) = &self.interaction else {
            return;
        };
        let panel_id = resize.panel_id.clone();
        let start = resize.start_position;
        let handle = resize.handle;

        let dx = ((pointer.0 - resize.anchor.0) / self.config.cell_width()).round() as i32;
        let dy = ((pointer.1 - resize.anchor.1) / self.config.cell_height()).round() as i32;

        let mut rect = start;
        match handle {
            ResizeHandle::Right => rect.w = start.w + dx,
            ResizeHandle::Left => {
                rect.x = start.x + dx;
                rect.w = start.w - dx;
            }
            ResizeHandle::Bottom => rect.h = start.h + dy,
            ResizeHandle::Top => {
                rect.y = start.y + dy;
                rect.h = start.h - dy;
            }
            ResizeHandle::TopLeft => {
                rect.x = start.x + dx;
                rect.w = start.w - dx;
                rect.y = start.y + dy;
                rect.h = start.h - dy;
            }
            ResizeHandle::TopRight => {
                rect.w = start.w + dx;
                rect.y = start.y + dy;
                rect.h = start.h - dy;
            }
            ResizeHandle::BottomLeft => {
                rect.x = start.x + dx;
                rect.w = start.w - dx;
                rect.h = start.h + dy;
            }
            ResizeHandle::BottomRight => {
                rect.w = start.w + dx;
                rect.h = start.h + dy;
            }
        }
        rect.w = rect.w.max(1);
        rect.h = rect.h.max(1);

        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == panel_id) {
            panel.position = rect;
        }
    }

    pub fn end_resize(&mut self) -> bool {
        if !self.interaction.is_resizing() {
            return false;
        }
        let InteractionState::Resizing(resize) = self.finish_interaction() else {
            return false;
        };
        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == resize.panel_id) {
            panel.position = snap_to_grid(&panel.position, &self.config);
        }
        self.persist();
        true
    }

    pub fn cancel_resize(&mut self) -> bool {
        if !self.interaction.is_resizing() {
            return false;
        }
        let InteractionState::Resizing(resize) = self.finish_interaction() else {
            return false;
        };
        if let Some(panel) = self.panels.iter_mut().find(|p| p.id == resize.panel_id) {
            panel.position = resize.start_position;
        }
        self.persist();
        true
    }

    // ---- whole-collection operations ----

    /// Largest-first repack of every space-occupying panel.
    pub fn auto_arrange(&mut self) {
        self.panels = auto_arrange(&self.panels, &self.config);
        self.persist();
    }

    /// Replace the collection with the built-in default layout.
    pub fn reset_layout(&mut self) {
        self.panels = default_layout().panels;
        self.persist();
        info!("layout reset to default");
    }

    /// Snapshot the current collection as a named layout; returns its id.
    pub fn save_layout(&mut self, name: &str) -> String {
        let now = std::time::SystemTime::now();
        let id = now
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis().to_string())
            .unwrap_or_else(|_| format!("layout-{}", self.store.list_layouts().len() + 1));

        self.store.save_layout(Layout {
            id: id.clone(),
            name: name.to_string(),
            panels: self.panels.clone(),
            grid_cols: self.config.cols,
            grid_rows: self.config.rows,
            created_at: now,
            is_default: false,
        });
        info!("saved layout '{}' as {}", name, id);
        id
    }

    /// Replace the collection wholesale from a named layout.
    pub fn load_layout(&mut self, id: &str) -> bool {
        let Some(layout) = self.store.load_layout(id) else {
            return false;
        };
        self.panels = layout.panels;
        self.persist();
        true
    }

    pub fn delete_layout(&mut self, id: &str) {
        self.store.delete_layout(id);
    }

    pub fn list_layouts(&self) -> Vec<Layout> {
        self.store.list_layouts()
    }

    /// Container-resize notification: only the derived cell dimensions
    /// change, grid coordinates stay put.
    pub fn container_resized(&mut self, width: f32, height: f32) {
        self.config.update_container(width, height);
    }
}
