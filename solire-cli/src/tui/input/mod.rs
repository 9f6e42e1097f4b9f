//! Keyboard input handling

mod mouse;

pub use mouse::handle_mouse_sync;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::state::Focus;

/// Handle a key event synchronously.
pub fn handle_input_sync(app: &mut App, key: KeyEvent) {
    // Windows terminals also report key releases.
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('b') => app.toggle_sidebar(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('b') => app.toggle_sidebar(),
        KeyCode::Esc => app.sidebar.dismiss_overlay(),
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Sidebar => Focus::Content,
                Focus::Content => Focus::Sidebar,
            };
        }
        KeyCode::Up | KeyCode::Char('k') => {
            if app.focus == Focus::Sidebar {
                app.sidebar.cursor_up();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.focus == Focus::Sidebar {
                app.sidebar.cursor_down();
            }
        }
        KeyCode::Enter => {
            if app.focus == Focus::Sidebar {
                app.activate_nav(app.sidebar.cursor);
            }
        }
        // Digit shortcuts jump straight to a navigation entry.
        KeyCode::Char(c @ '1'..='9') => {
            app.activate_nav(c as usize - '1' as usize);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::{NavTarget, Viewport};
    use solire_config::Config;

    fn wide_app() -> App {
        App::with_viewport(Config::default(), Viewport::from_cells(160, 40))
    }

    fn compact_app() -> App {
        App::with_viewport(Config::default(), Viewport::from_cells(60, 20))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_q_quits() {
        let mut app = wide_app();
        handle_input_sync(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = wide_app();
        handle_input_sync(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_b_toggles_by_viewport() {
        let mut app = wide_app();
        handle_input_sync(&mut app, press(KeyCode::Char('b')));
        assert!(app.sidebar.collapsed);
        assert!(!app.sidebar.shown);

        let mut app = compact_app();
        handle_input_sync(&mut app, press(KeyCode::Char('b')));
        assert!(app.sidebar.shown);
        assert!(!app.sidebar.collapsed);
    }

    #[test]
    fn test_esc_dismisses_slide_over() {
        let mut app = compact_app();
        app.toggle_sidebar();
        handle_input_sync(&mut app, press(KeyCode::Esc));
        assert!(!app.sidebar.shown);
        assert!(!app.sidebar.overlay_shown);
    }

    #[test]
    fn test_enter_routes_cursor_entry() {
        let mut app = wide_app();
        handle_input_sync(&mut app, press(KeyCode::Down));
        handle_input_sync(&mut app, press(KeyCode::Enter));
        assert_eq!(app.view, NavTarget::Ph);
        assert_eq!(app.sidebar.active_index(), Some(1));
    }

    #[test]
    fn test_digit_jump_routes_directly() {
        let mut app = wide_app();
        handle_input_sync(&mut app, press(KeyCode::Char('6')));
        assert_eq!(app.view, NavTarget::Recommendation);
        // Out-of-range digits are ignored.
        handle_input_sync(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.view, NavTarget::Recommendation);
    }

    #[test]
    fn test_navigation_updates_status_message() {
        let mut app = wide_app();
        assert_eq!(app.status_message, None);

        handle_input_sync(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.status_message.as_deref(), Some("Viewing Temperature"));

        // Ignored out-of-range jumps leave the message alone.
        handle_input_sync(&mut app, press(KeyCode::Char('9')));
        assert_eq!(app.status_message.as_deref(), Some("Viewing Temperature"));
    }

    #[test]
    fn test_cursor_keys_ignored_when_content_focused() {
        let mut app = wide_app();
        handle_input_sync(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focus, Focus::Content);
        handle_input_sync(&mut app, press(KeyCode::Down));
        assert_eq!(app.sidebar.cursor, 0);
    }
}
