// Interactive terminal demo for the dock_grid layout engine.
//
// Renders the 12x8 grid as text and lets the mouse drag panels around it.
// Layouts persist to a FileStore under the system temp directory, so
// quitting and relaunching restores the arrangement.
//
// Controls:
//   mouse drag  - move a panel (drop snaps to the grid)
//   a           - add a randomly sized panel
//   m           - minimize/restore the topmost panel
//   p           - pin/unpin the topmost panel
//   r           - auto-arrange
//   d           - reset to the default layout
//   s           - save the arrangement as a named layout
//   q / Esc     - quit

use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType};
use rand::Rng;

use dock_grid::display::PresentationAdapter;
use dock_grid::{FileStore, GridConfig, LayoutStore, PanelRegistry, PanelSpec};

// Text-grid metrics: 4-column row prefix, 3 characters per cell, 1 header row.
const LEFT_MARGIN: u16 = 4;
const CELL_CHARS: u16 = 3;
const HEADER_ROWS: u16 = 1;

/// Map a terminal position onto the container's pixel space.
fn term_to_pixels(column: u16, row: u16, config: &GridConfig) -> (f32, f32) {
    let gx = column.saturating_sub(LEFT_MARGIN) as f32 / CELL_CHARS as f32;
    let gy = row.saturating_sub(HEADER_ROWS) as f32;
    (gx * config.cell_width(), gy * config.cell_height())
}

fn topmost_panel_at(
    adapter: &PresentationAdapter<FileStore>,
    column: u16,
    row: u16,
) -> Option<String> {
    let config = adapter.registry().config();
    let gx = (column.saturating_sub(LEFT_MARGIN) / CELL_CHARS) as i32;
    let gy = row.saturating_sub(HEADER_ROWS) as i32;

    adapter
        .registry()
        .panels()
        .iter()
        .filter(|p| p.occupies_space())
        .filter(|p| {
            gx >= p.position.x
                && gx < p.position.x + p.position.w
                && gy >= p.position.y
                && gy < p.position.y + p.position.h
                && gx < config.cols as i32
                && gy < config.rows as i32
        })
        .max_by_key(|p| p.z_index)
        .map(|p| p.id.clone())
}

fn topmost_panel_id(adapter: &PresentationAdapter<FileStore>) -> Option<String> {
    adapter
        .registry()
        .panels()
        .iter()
        .max_by_key(|p| p.z_index)
        .map(|p| p.id.clone())
}

fn draw(adapter: &PresentationAdapter<FileStore>, status: &str) -> std::io::Result<()> {
    let mut out = stdout();
    execute!(out, MoveTo(0, 0), Clear(ClearType::All))?;

    let registry = adapter.registry();
    let mut text = dock_grid::display::format_grid(registry.panels(), registry.config());
    text.push('\n');
    text.push_str(&dock_grid::display::format_panel_list(registry.panels()));
    text.push_str("\n[a]dd [m]inimize [p]in auto-a[r]range [d]efault [s]ave [q]uit\n");
    text.push_str(status);

    // Raw mode needs explicit carriage returns
    write!(out, "{}", text.replace('\n', "\r\n"))?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let store_dir = std::env::temp_dir().join("dock_grid_demo");
    let store = LayoutStore::new(FileStore::new(&store_dir));
    let registry = PanelRegistry::new(GridConfig::default(), store);
    let mut adapter = PresentationAdapter::new(registry);

    enable_raw_mode()?;
    execute!(stdout(), EnableMouseCapture)?;

    let mut rng = rand::thread_rng();
    let mut added = 0usize;
    let mut status = format!("layouts in {}", store_dir.display());

    loop {
        draw(&adapter, &status)?;

        if !poll(Duration::from_millis(200))? {
            continue;
        }

        match read()? {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(id) = topmost_panel_at(&adapter, column, row) {
                    let pointer = term_to_pixels(column, row, adapter.registry().config());
                    let origin = adapter
                        .registry()
                        .panel(&id)
                        .map(|p| adapter.screen_rect(p))
                        .map(|r| (r.x, r.y))
                        .unwrap_or((0.0, 0.0));
                    let offset = (pointer.0 - origin.0, pointer.1 - origin.1);
                    if adapter.pointer_down(&id, offset) {
                        status = format!("dragging {}", id);
                    } else {
                        status = format!("{} refused the drag (pinned?)", id);
                    }
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Drag(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let pointer = term_to_pixels(column, row, adapter.registry().config());
                adapter.pointer_move(pointer);
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(_),
                ..
            }) => {
                adapter.pointer_up();
                status = "dropped".to_string();
            }
            Event::Key(key) => match key.code {
                KeyCode::Char('a') => {
                    added += 1;
                    let id = format!("note-{}", added);
                    let spec = PanelSpec::new(
                        &id,
                        &format!("Note {}", added),
                        "note",
                        rng.gen_range(2..=5),
                        rng.gen_range(2..=4),
                    );
                    adapter.registry_mut().add_panel(spec);
                    status = format!("added {}", id);
                }
                KeyCode::Char('m') => {
                    if let Some(id) = topmost_panel_id(&adapter) {
                        adapter.registry_mut().toggle_minimize(&id);
                        status = format!("toggled minimize on {}", id);
                    }
                }
                KeyCode::Char('p') => {
                    if let Some(id) = topmost_panel_id(&adapter) {
                        adapter.registry_mut().toggle_pin(&id);
                        status = format!("toggled pin on {}", id);
                    }
                }
                KeyCode::Char('r') => {
                    adapter.registry_mut().auto_arrange();
                    status = "auto-arranged".to_string();
                }
                KeyCode::Char('d') => {
                    adapter.registry_mut().reset_layout();
                    status = "reset to default layout".to_string();
                }
                KeyCode::Char('s') => {
                    let id = adapter.registry_mut().save_layout("Demo session");
                    status = format!("saved layout {}", id);
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    adapter.surface_lost();
                    break;
                }
                _ => {}
            },
            Event::Resize(..) => {
                // Grid coordinates are resolution-independent; nothing to do
                // for the text renderer.
            }
            _ => {}
        }
    }

    execute!(stdout(), DisableMouseCapture)?;
    disable_raw_mode()?;
    println!();
    Ok(())
}
