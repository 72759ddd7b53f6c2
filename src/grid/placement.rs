// Placement engine - answers where a rectangle can go without overlapping
// the panels that currently occupy grid cells, and provides the derived
// helpers built on that question (snap clamp, drop-zone hints, auto-arrange).

use log::debug;

use crate::config::GridConfig;
use crate::geometry::GridRect;
use crate::grid::occupancy::OccupancyGrid;
use crate::panel::{DropZone, Panel};

/// First-fit search: scan candidate top-left corners in row-major order and
/// return the first `w x h` window that is entirely unoccupied.
///
/// When the grid has no free window of that size the rect is placed at the
/// origin, overlapping whatever is there. That fallback is policy, not an
/// error; callers decide whether overlap is acceptable.
pub fn find_available_position(w: i32, h: i32, panels: &[Panel], config: &GridConfig) -> GridRect {
    let w = w.max(1);
    let h = h.max(1);
    let occupancy = OccupancyGrid::from_panels(config, panels);

    if w <= config.cols as i32 && h <= config.rows as i32 {
        for y in 0..=(config.rows - h as usize) {
            for x in 0..=(config.cols - w as usize) {
                if occupancy.is_region_free(x, y, w as usize, h as usize) {
                    return GridRect::new(x as i32, y as i32, w, h);
                }
            }
        }
    }

    debug!("no free {}x{} region, falling back to overlap at origin", w, h);
    GridRect::new(0, 0, w, h)
}

/// The five-clause validity invariant. Overlap with other panels is not
/// checked; the model permits it when unavoidable.
pub fn is_valid_position(rect: &GridRect, config: &GridConfig) -> bool {
    rect.is_valid(config)
}

/// Clamp a possibly out-of-bounds rect back onto the grid: sizes to
/// `[1, cols] x [1, rows]`, then the origin so the rect fits. The result
/// always satisfies the validity invariant.
pub fn snap_to_grid(rect: &GridRect, config: &GridConfig) -> GridRect {
    let cols = config.cols as i32;
    let rows = config.rows as i32;

    let w = rect.w.clamp(1, cols);
    let h = rect.h.clamp(1, rows);
    let x = rect.x.clamp(0, cols - w);
    let y = rect.y.clamp(0, rows - h);

    GridRect::new(x, y, w, h)
}

/// Emit up to four single-cell-depth strips beside every other
/// space-occupying panel, one per side that lies inside the grid. Purely
/// advisory: these render as drag-target highlights and are never used to
/// decide the final drop position.
pub fn generate_drop_zones(
    dragged_id: &str,
    panels: &[Panel],
    config: &GridConfig,
) -> Vec<DropZone> {
    let cols = config.cols as i32;
    let rows = config.rows as i32;
    let mut zones = Vec::new();

    for panel in panels
        .iter()
        .filter(|p| p.id != dragged_id && p.occupies_space())
    {
        let pos = &panel.position;
        let sides = [
            ("left", pos.x - 1, pos.y, 1, pos.h),
            ("right", pos.x + pos.w, pos.y, 1, pos.h),
            ("top", pos.x, pos.y - 1, pos.w, 1),
            ("bottom", pos.x, pos.y + pos.h, pos.w, 1),
        ];

        for (side, x, y, w, h) in sides {
            if x >= 0 && y >= 0 && x + w <= cols && y + h <= rows {
                zones.push(DropZone {
                    id: format!("{}-{}", panel.id, side),
                    x,
                    y,
                    w,
                    h,
                    is_active: false,
                });
            }
        }
    }

    zones
}

/// Re-place every space-occupying panel with a largest-first first-fit pass
/// to reduce fragmentation. The sort is stable, so equal-area panels keep
/// their input order and the result is deterministic. Each placement is
/// seeded by the panels already placed in this pass, not by the original
/// positions. Hidden and minimized panels are appended untouched.
pub fn auto_arrange(panels: &[Panel], config: &GridConfig) -> Vec<Panel> {
    let mut arrangeable: Vec<Panel> = panels
        .iter()
        .filter(|p| p.occupies_space())
        .cloned()
        .collect();
    arrangeable.sort_by(|a, b| b.position.area().cmp(&a.position.area()));

    let mut placed: Vec<Panel> = Vec::with_capacity(arrangeable.len());
    for mut panel in arrangeable {
        panel.position = find_available_position(
            panel.position.w,
            panel.position.h,
            &placed,
            config,
        );
        placed.push(panel);
    }

    placed.extend(panels.iter().filter(|p| !p.occupies_space()).cloned());
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GridConfig {
        GridConfig::default()
    }

    fn panel_at(id: &str, x: i32, y: i32, w: i32, h: i32) -> Panel {
        Panel::new(id, id, id, GridRect::new(x, y, w, h))
    }

    #[test]
    fn first_fit_scans_row_major() {
        let c = config();
        let first = find_available_position(3, 2, &[], &c);
        assert_eq!(first, GridRect::new(0, 0, 3, 2));

        let placed = panel_at("a", 0, 0, 3, 2);
        let second = find_available_position(3, 2, &[placed], &c);
        assert_eq!(second, GridRect::new(3, 0, 3, 2));
    }

    #[test]
    fn first_fit_skips_minimized_panels() {
        let mut minimized = panel_at("a", 0, 0, 12, 8);
        minimized.is_minimized = true;
        let pos = find_available_position(2, 2, &[minimized], &config());
        assert_eq!(pos, GridRect::new(0, 0, 2, 2));
    }

    #[test]
    fn full_grid_falls_back_to_origin_overlap() {
        let c = GridConfig::new(2, 2, 200.0, 200.0);
        let blocker = panel_at("a", 0, 0, 2, 2);
        let pos = find_available_position(1, 1, &[blocker], &c);
        assert_eq!(pos, GridRect::new(0, 0, 1, 1));
    }

    #[test]
    fn oversized_request_falls_back_to_origin() {
        let pos = find_available_position(13, 2, &[], &config());
        assert_eq!(pos, GridRect::new(0, 0, 13, 2));
    }

    #[test]
    fn snap_clamps_into_bounds() {
        let c = config();
        assert_eq!(
            snap_to_grid(&GridRect::new(-2, -1, 3, 2), &c),
            GridRect::new(0, 0, 3, 2)
        );
        assert_eq!(
            snap_to_grid(&GridRect::new(11, 7, 3, 2), &c),
            GridRect::new(9, 6, 3, 2)
        );
        assert_eq!(
            snap_to_grid(&GridRect::new(0, 0, 20, 20), &c),
            GridRect::new(0, 0, 12, 8)
        );
        assert!(snap_to_grid(&GridRect::new(40, -9, 0, 99), &c).is_valid(&c));
    }

    #[test]
    fn drop_zones_skip_dragged_and_out_of_bounds_sides() {
        let c = config();
        let corner = panel_at("corner", 0, 0, 3, 2);
        let dragged = panel_at("dragged", 6, 4, 2, 2);

        let zones = generate_drop_zones("dragged", &[corner.clone(), dragged], &c);
        // Corner panel: left and top sides are off-grid
        let ids: Vec<&str> = zones.iter().map(|z| z.id.as_str()).collect();
        assert_eq!(ids, vec!["corner-right", "corner-bottom"]);
        assert_eq!(zones[0].x, 3);
        assert_eq!(zones[0].h, 2);
        assert!(zones.iter().all(|z| !z.is_active));
    }

    #[test]
    fn auto_arrange_packs_largest_first() {
        let c = config();
        let small = panel_at("small", 9, 6, 2, 2);
        let large = panel_at("large", 5, 3, 6, 4);
        let arranged = auto_arrange(&[small, large], &c);

        assert_eq!(arranged[0].id, "large");
        assert_eq!(arranged[0].position, GridRect::new(0, 0, 6, 4));
        assert_eq!(arranged[1].id, "small");
        assert_eq!(arranged[1].position, GridRect::new(6, 0, 2, 2));
    }

    #[test]
    fn auto_arrange_leaves_hidden_panels_untouched() {
        let c = config();
        let mut hidden = panel_at("hidden", 4, 4, 3, 3);
        hidden.is_visible = false;
        let shown = panel_at("shown", 7, 5, 2, 2);

        let arranged = auto_arrange(&[hidden.clone(), shown], &c);
        assert_eq!(arranged.len(), 2);
        assert_eq!(arranged[0].id, "shown");
        assert_eq!(arranged[1].id, "hidden");
        assert_eq!(arranged[1].position, hidden.position);
    }

    #[test]
    fn auto_arrange_ties_keep_input_order() {
        let c = config();
        let a = panel_at("a", 8, 6, 2, 2);
        let b = panel_at("b", 2, 2, 2, 2);
        let arranged = auto_arrange(&[a, b], &c);
        assert_eq!(arranged[0].id, "a");
        assert_eq!(arranged[0].position, GridRect::new(0, 0, 2, 2));
        assert_eq!(arranged[1].id, "b");
        assert_eq!(arranged[1].position, GridRect::new(2, 0, 2, 2));
    }
}
