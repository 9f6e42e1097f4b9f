//! Compact-layout scrim over the content

use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::tui::app::App;

/// Dim the exposed content while the slide-over is open.
pub fn draw_scrim(f: &mut Frame, app: &App, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    f.render_widget(Clear, area);
    f.render_widget(Block::default().style(app.theme.scrim_style()), area);

    let hint_row = Rect {
        x: area.x,
        y: area.y + area.height / 2,
        width: area.width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new("Esc to close")
            .alignment(Alignment::Center)
            .style(app.theme.scrim_style()),
        hint_row,
    );
}
