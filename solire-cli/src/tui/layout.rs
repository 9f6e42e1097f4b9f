//! Screen layout: projecting sidebar state onto rectangles
//!
//! `compute_chunks` is pure geometry so it can be tested without a
//! terminal; `draw` renders the chunks using the current app state.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;
use ratatui::Frame;

use super::app::App;
use super::state::{SidebarLayout, Viewport};
use super::views;

/// Width of the `[=]` toggle control in the header row.
const TOGGLE_BUTTON_WIDTH: u16 = 5;

/// Screen regions derived from sidebar state and viewport size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutChunks {
    pub header: Rect,
    pub toggle_button: Rect,
    /// Sidebar panel, absent when hidden.
    pub sidebar_panel: Option<Rect>,
    pub content: Rect,
    /// Compact-layout scrim over the content, absent when dismissed.
    pub scrim: Option<Rect>,
    pub status_bar: Rect,
}

/// Compute screen regions for the given sidebar state.
pub fn compute_chunks(
    area: Rect,
    sidebar: &SidebarLayout,
    viewport: Viewport,
    sidebar_width: u16,
) -> LayoutChunks {
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);
    let (header, body, status_bar) = (rows[0], rows[1], rows[2]);

    let toggle_button = Rect {
        x: header.x,
        y: header.y,
        width: TOGGLE_BUTTON_WIDTH.min(header.width),
        height: header.height,
    };

    let panel_width = sidebar_width.min(body.width);

    if viewport.is_compact() {
        // Compact: the panel slides over full-width content; the scrim
        // covers whatever content the panel leaves exposed.
        let sidebar_panel = sidebar.shown.then(|| Rect {
            x: body.x,
            y: body.y,
            width: panel_width,
            height: body.height,
        });
        let scrim = sidebar.overlay_shown.then(|| {
            if sidebar.shown {
                Rect {
                    x: body.x + panel_width,
                    y: body.y,
                    width: body.width.saturating_sub(panel_width),
                    height: body.height,
                }
            } else {
                body
            }
        });
        return LayoutChunks {
            header,
            toggle_button,
            sidebar_panel,
            content: body,
            scrim,
            status_bar,
        };
    }

    // Wide: panel and content share the body side by side. The two
    // markers are independent, so content only reclaims the panel's
    // column when expanded.
    let sidebar_panel = (!sidebar.collapsed).then(|| Rect {
        x: body.x,
        y: body.y,
        width: panel_width,
        height: body.height,
    });
    let content = if sidebar.content_expanded {
        body
    } else {
        Rect {
            x: body.x + panel_width,
            y: body.y,
            width: body.width.saturating_sub(panel_width),
            height: body.height,
        }
    };

    LayoutChunks {
        header,
        toggle_button,
        sidebar_panel,
        content,
        scrim: None,
        status_bar,
    }
}

/// Render one frame.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = compute_chunks(
        f.area(),
        &app.sidebar,
        app.viewport,
        app.config.ui.sidebar_width,
    );

    views::status_bar::draw_header(f, app, chunks.header);
    views::draw_content(f, app, chunks.content);

    if let Some(scrim) = chunks.scrim {
        views::overlay::draw_scrim(f, app, scrim);
    }
    if let Some(panel) = chunks.sidebar_panel {
        f.render_widget(Clear, panel);
        views::sidebar::render(f, app, panel);
    }

    views::status_bar::draw_status_bar(f, app, chunks.status_bar);
}
