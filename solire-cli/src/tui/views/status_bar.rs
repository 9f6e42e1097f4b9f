//! Header and status bar rendering

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::app::App;

/// Top row: toggle control, title, layout indicator.
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let layout_mode = if app.viewport.is_compact() {
        "compact"
    } else {
        "wide"
    };

    let line = Line::from(vec![
        Span::styled(
            " [=] ",
            Style::default()
                .fg(theme.focus_border)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Solire - Soil Monitor",
            Style::default()
                .fg(theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  ({}, {}px)", layout_mode, app.viewport.px_width),
            theme.normal_style(),
        ),
    ]);

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme.bg_level0)),
        area,
    );
}

/// Bottom row: key hints and transient status messages.
pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let text = match &app.status_message {
        Some(msg) => msg.clone(),
        None => {
            " b toggle sidebar | j/k move | Enter open | 1-6 jump | Esc close | q quit".to_string()
        }
    };

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(text, theme.normal_style())))
            .style(Style::default().bg(theme.bg_level0)),
        area,
    );
}
