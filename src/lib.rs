// dock_grid - dockable panel layout engine for a dashboard surface.
//
// Panels live on a fixed-resolution cell grid (12x8 by default) stretched
// over a pixel container. The crate answers where panels can go
// (first-fit placement over an occupancy matrix), tracks one active
// drag/resize interaction at a time, and persists layouts as JSON behind a
// small key/value boundary. What a panel renders is opaque here: each
// panel carries only a content key resolved by the host UI.

pub mod config;
pub mod display;
pub mod geometry;
pub mod grid;
pub mod panel;
pub mod store;

pub use config::GridConfig;
pub use geometry::{grid_to_pixels, pixels_to_grid, GridRect, PixelRect};
pub use grid::{
    auto_arrange, find_available_position, generate_drop_zones, is_valid_position, snap_to_grid,
    OccupancyGrid,
};
pub use panel::{
    DragState, DropZone, InteractionState, NoopCapture, Panel, PanelRegistry, PanelSize, PanelSpec,
    PointerCapture, ResizeHandle, ResizeState,
};
pub use store::{
    default_layout, FileStore, KeyValueStore, Layout, LayoutStore, MemoryStore, StoreError,
    StoreResult, CURRENT_LAYOUT_KEY, LAYOUTS_KEY,
};

// Default grid resolution
pub const GRID_COLS: usize = 12;
pub const GRID_ROWS: usize = 8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        assert_eq!(GRID_COLS, 12);
        assert_eq!(GRID_ROWS, 8);
        let config = GridConfig::default();
        assert_eq!(config.cols, GRID_COLS);
        assert_eq!(config.rows, GRID_ROWS);
    }
}
