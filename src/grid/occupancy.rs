// Occupancy grid - boolean matrix of which cells are covered by panels.
// Only panels that occupy space (visible and not minimized) mark cells;
// spans reaching outside the grid are clamped while marking.

use crate::config::GridConfig;
use crate::geometry::GridRect;
use crate::panel::Panel;

pub struct OccupancyGrid {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<bool>>,
}

impl OccupancyGrid {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            cols: config.cols,
            rows: config.rows,
            cells: vec![vec![false; config.cols]; config.rows],
        }
    }

    /// Build the matrix from every space-occupying panel in `panels`.
    pub fn from_panels(config: &GridConfig, panels: &[Panel]) -> Self {
        let mut grid = Self::new(config);
        for panel in panels.iter().filter(|p| p.occupies_space()) {
            grid.mark(&panel.position);
        }
        grid
    }

    /// Mark every cell in `[y, y+h) x [x, x+w)`, clamped to the grid.
    pub fn mark(&mut self, rect: &GridRect) {
        let x0 = rect.x.max(0) as usize;
        let y0 = rect.y.max(0) as usize;
        let x1 = (rect.x + rect.w).clamp(0, self.cols as i32) as usize;
        let y1 = (rect.y + rect.h).clamp(0, self.rows as i32) as usize;

        for row in self.cells.iter_mut().take(y1).skip(y0) {
            for cell in row.iter_mut().take(x1).skip(x0) {
                *cell = true;
            }
        }
    }

    /// Whether a `w x h` window anchored at `(x, y)` is entirely free.
    /// Windows that reach outside the grid are never free.
    pub fn is_region_free(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        if x + w > self.cols || y + h > self.rows {
            return false;
        }
        self.cells[y..y + h]
            .iter()
            .all(|row| row[x..x + w].iter().all(|occupied| !occupied))
    }

    pub fn is_cell_occupied(&self, x: usize, y: usize) -> bool {
        y < self.rows && x < self.cols && self.cells[y][x]
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|occupied| **occupied)
            .count()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::GridRect;

    fn config() -> GridConfig {
        GridConfig::default()
    }

    fn panel_at(id: &str, x: i32, y: i32, w: i32, h: i32) -> Panel {
        Panel::new(id, id, id, GridRect::new(x, y, w, h))
    }

    #[test]
    fn marks_only_space_occupying_panels() {
        let mut hidden = panel_at("hidden", 0, 0, 4, 4);
        hidden.is_visible = false;
        let mut minimized = panel_at("min", 4, 0, 4, 4);
        minimized.is_minimized = true;
        let solid = panel_at("solid", 8, 0, 2, 2);

        let grid = OccupancyGrid::from_panels(&config(), &[hidden, minimized, solid]);
        assert_eq!(grid.occupied_cells(), 4);
        assert!(grid.is_cell_occupied(8, 0));
        assert!(!grid.is_cell_occupied(0, 0));
        assert!(!grid.is_cell_occupied(4, 0));
    }

    #[test]
    fn out_of_bounds_spans_are_clamped() {
        let mut grid = OccupancyGrid::new(&config());
        grid.mark(&GridRect::new(-2, -1, 4, 3));
        // Only the in-grid 2x2 corner is marked
        assert_eq!(grid.occupied_cells(), 4);
        assert!(grid.is_cell_occupied(0, 0));
        assert!(grid.is_cell_occupied(1, 1));

        grid.mark(&GridRect::new(11, 7, 5, 5));
        assert!(grid.is_cell_occupied(11, 7));
        assert_eq!(grid.occupied_cells(), 5);
    }

    #[test]
    fn region_free_checks_window_and_bounds() {
        let mut grid = OccupancyGrid::new(&config());
        grid.mark(&GridRect::new(3, 0, 3, 2));

        assert!(grid.is_region_free(0, 0, 3, 2));
        assert!(!grid.is_region_free(2, 0, 3, 2));
        assert!(grid.is_region_free(6, 0, 3, 2));
        assert!(!grid.is_region_free(10, 7, 3, 2)); // spills past the edge
    }
}
