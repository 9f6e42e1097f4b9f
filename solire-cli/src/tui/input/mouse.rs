//! Mouse input handling
//!
//! Hit-testing recomputes the frame layout from the last known viewport,
//! so click targets always match what the previous render showed.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::tui::app::App;
use crate::tui::layout::{compute_chunks, LayoutChunks};
use crate::tui::state::Focus;

fn current_chunks(app: &App) -> LayoutChunks {
    let area = Rect::new(0, 0, app.viewport.cols, app.viewport.rows);
    compute_chunks(area, &app.sidebar, app.viewport, app.config.ui.sidebar_width)
}

/// Handle a mouse event synchronously.
pub fn handle_mouse_sync(app: &mut App, mouse: MouseEvent) {
    let pos = Position::new(mouse.column, mouse.row);
    let chunks = current_chunks(app);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if chunks.toggle_button.contains(pos) {
                app.toggle_sidebar();
                return;
            }
            // Panel sits above the scrim, so test it first.
            if let Some(panel) = chunks.sidebar_panel {
                if panel.contains(pos) {
                    app.focus = Focus::Sidebar;
                    // First entry sits one row below the panel border.
                    let idx = (mouse.row.saturating_sub(panel.y + 1)) as usize;
                    if mouse.row > panel.y && idx < app.sidebar.links.len() {
                        app.activate_nav(idx);
                    }
                    return;
                }
            }
            if let Some(scrim) = chunks.scrim {
                if scrim.contains(pos) {
                    app.sidebar.dismiss_overlay();
                    return;
                }
            }
            if chunks.content.contains(pos) {
                app.focus = Focus::Content;
            }
        }
        MouseEventKind::ScrollUp => {
            if chunks.sidebar_panel.is_some_and(|p| p.contains(pos)) {
                app.sidebar.cursor_up();
            }
        }
        MouseEventKind::ScrollDown => {
            if chunks.sidebar_panel.is_some_and(|p| p.contains(pos)) {
                app.sidebar.cursor_down();
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::{NavTarget, Viewport};
    use crossterm::event::KeyModifiers;
    use solire_config::Config;

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn wide_app() -> App {
        App::with_viewport(Config::default(), Viewport::from_cells(160, 40))
    }

    fn compact_app() -> App {
        App::with_viewport(Config::default(), Viewport::from_cells(60, 20))
    }

    #[test]
    fn test_click_toggle_button_collapses_on_wide() {
        let mut app = wide_app();
        handle_mouse_sync(&mut app, click(1, 0));
        assert!(app.sidebar.collapsed);
        assert!(app.sidebar.content_expanded);
    }

    #[test]
    fn test_click_toggle_button_opens_slide_over_on_compact() {
        let mut app = compact_app();
        handle_mouse_sync(&mut app, click(1, 0));
        assert!(app.sidebar.shown);
        assert!(app.sidebar.overlay_shown);

        handle_mouse_sync(&mut app, click(1, 0));
        assert!(!app.sidebar.shown);
        assert!(!app.sidebar.overlay_shown);
    }

    #[test]
    fn test_click_panel_entry_routes_navigation() {
        let mut app = wide_app();
        // Second entry: body starts at row 1, border at row 1, entries from row 2.
        handle_mouse_sync(&mut app, click(3, 3));
        assert_eq!(app.view, NavTarget::Ph);
        assert_eq!(app.sidebar.active_index(), Some(1));
        assert_eq!(app.focus, Focus::Sidebar);
    }

    #[test]
    fn test_click_scrim_dismisses_slide_over() {
        let mut app = compact_app();
        app.toggle_sidebar();
        // Column right of the 26-wide panel lands on the scrim.
        handle_mouse_sync(&mut app, click(40, 5));
        assert!(!app.sidebar.shown);
        assert!(!app.sidebar.overlay_shown);
    }

    #[test]
    fn test_click_content_moves_focus() {
        let mut app = wide_app();
        handle_mouse_sync(&mut app, click(100, 10));
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn test_scroll_over_panel_moves_cursor() {
        let mut app = wide_app();
        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 3,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse_sync(&mut app, scroll);
        assert_eq!(app.sidebar.cursor, 1);
    }
}
