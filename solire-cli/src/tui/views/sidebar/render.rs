//! Sidebar panel rendering

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem};
use ratatui::Frame;

use crate::tui::app::App;
use crate::tui::state::Focus;

/// Render the navigation panel into `area`.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let border_style = if app.focus == Focus::Sidebar {
        theme.focused_border_style()
    } else {
        theme.unfocused_border_style()
    };

    let mut block = Block::default()
        .title(" Navigation ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    if app.viewport.is_compact() {
        // The slide-over paints over content, so it needs an opaque fill.
        block = block.style(Style::default().bg(theme.bg_level0));
    }

    let items: Vec<ListItem> = app
        .sidebar
        .links
        .iter()
        .enumerate()
        .map(|(i, link)| {
            let style = if i == app.sidebar.cursor {
                if app.focus == Focus::Sidebar {
                    theme.selection_style()
                } else {
                    theme.selection_unfocused_style()
                }
            } else if link.active {
                theme.active_link_style()
            } else {
                theme.normal_style()
            };
            let marker = if link.active { "●" } else { " " };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), theme.normal_style()),
                Span::styled(format!("{} {}", marker, link.target.title()), style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
