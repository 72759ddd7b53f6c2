// Display formatting utilities for the grid: plain-text dumps used by the
// demo binary and by tests that want to eyeball an arrangement.

use crate::config::GridConfig;
use crate::panel::Panel;

/// Single-character tag for a panel cell: first character of the id,
/// uppercased, '?' for an empty id.
pub fn panel_tag(panel: &Panel) -> char {
    panel
        .id
        .chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}

/// Render the occupancy of the grid as text, column headers included.
/// Where panels overlap the topmost (highest z) wins, matching what the
/// user would see on screen.
pub fn format_grid(panels: &[Panel], config: &GridConfig) -> String {
    let mut out = String::new();

    out.push_str("    ");
    for col in 0..config.cols {
        out.push_str(&format!("{:2} ", col));
    }
    out.push('\n');

    let mut by_z: Vec<&Panel> = panels.iter().filter(|p| p.occupies_space()).collect();
    by_z.sort_by_key(|p| p.z_index);

    for row in 0..config.rows as i32 {
        out.push_str(&format!("{:2}: ", row));
        for col in 0..config.cols as i32 {
            let tag = by_z
                .iter()
                .rev()
                .find(|p| {
                    col >= p.position.x
                        && col < p.position.x + p.position.w
                        && row >= p.position.y
                        && row < p.position.y + p.position.h
                })
                .map(|p| panel_tag(p))
                .unwrap_or('.');
            out.push_str(&format!(" {} ", tag));
        }
        out.push('\n');
    }

    out
}

/// One-line summary per panel, stacking order first.
pub fn format_panel_list(panels: &[Panel]) -> String {
    let mut by_z: Vec<&Panel> = panels.iter().collect();
    by_z.sort_by_key(|p| std::cmp::Reverse(p.z_index));

    let mut out = String::new();
    for panel in by_z {
        let state = if !panel.is_visible {
            "hidden"
        } else if panel.is_minimized {
            "minimized"
        } else if panel.is_pinned {
            "pinned"
        } else {
            "open"
        };
        out.push_str(&format!(
            "z{:>3}  {}  [{} {},{} {}x{}] ({})\n",
            panel.z_index,
            panel.title,
            panel.id,
            panel.position.x,
            panel.position.y,
            panel.position.w,
            panel.position.h,
            state,
        ));
    }
    out
}
