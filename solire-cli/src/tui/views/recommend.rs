//! Crop recommendation view

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::app::App;

/// Render the ranked crop list with the analysis summary.
pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = if app.config.ui.show_borders {
        Block::default()
            .title(" Recommendation ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.unfocused_border_style())
    } else {
        Block::default().title(" Recommendation ")
    };
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(rec) = &app.recommendation else {
        f.render_widget(
            Paragraph::new("Collecting sensor data...").style(theme.normal_style()),
            inner,
        );
        return;
    };

    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(1),
        Constraint::Length(3),
    ])
    .split(inner);

    let input_line = Line::from(Span::styled(
        format!(
            "pH {:.2}   {} °C   {} % moisture",
            rec.input.ph, rec.input.temperature as i32, rec.input.humidity as i32
        ),
        theme.normal_style(),
    ));
    f.render_widget(Paragraph::new(input_line), rows[0]);

    let items: Vec<ListItem> = rec
        .ranked
        .iter()
        .enumerate()
        .map(|(i, score)| {
            let color = theme.confidence_color(score.confidence);
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. ", i + 1), theme.normal_style()),
                Span::styled(format!("{:<13}", score.crop), Style::default().fg(color)),
                Span::styled(format!("{:>6.1}%  ", score.score * 100.0), Style::default().fg(color)),
                Span::styled(score.confidence.label(), theme.normal_style()),
            ]))
        })
        .collect();
    f.render_widget(List::new(items), rows[1]);

    f.render_widget(
        Paragraph::new(rec.summary.as_str())
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.text_primary)),
        rows[2],
    );
}
