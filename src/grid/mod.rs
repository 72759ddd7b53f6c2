// Grid module - occupancy tracking and the placement engine built on it.

mod occupancy;
mod placement;

pub use occupancy::OccupancyGrid;
pub use placement::{
    auto_arrange, find_available_position, generate_drop_zones, is_valid_position, snap_to_grid,
};
