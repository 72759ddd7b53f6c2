// Grid configuration: fixed cell resolution plus the pixel size of the
// container it is stretched over. Cell dimensions are derived, never stored
// independently of the container size.

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridConfig {
    pub cols: usize,
    pub rows: usize,
    pub container_width: f32,
    pub container_height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 12, // Default grid size
            rows: 8,
            container_width: 1200.0,
            container_height: 800.0,
        }
    }
}

impl GridConfig {
    pub fn new(cols: usize, rows: usize, container_width: f32, container_height: f32) -> Self {
        Self {
            cols: cols.max(1),
            rows: rows.max(1),
            container_width,
            container_height,
        }
    }

    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn cell_width(&self) -> f32 {
        self.container_width / self.cols as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.container_height / self.rows as f32
    }

    /// Apply a container-resize event. Only the pixel dimensions change;
    /// the grid resolution is immutable for the session. Idempotent.
    pub fn update_container(&mut self, width: f32, height: f32) {
        self.container_width = width;
        self.container_height = height;
    }
}
