//! Sensor reading views
//!
//! One page per sensor channel: a gauge for the latest value plus a short
//! history list. The overview packs the latest value of every channel.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::tui::app::App;

fn content_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    if app.config.ui.show_borders {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(app.theme.unfocused_border_style())
    } else {
        Block::default().title(title)
    }
}

fn gauge_page(
    f: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    label: String,
    ratio: f64,
    color: Color,
    history: Vec<ListItem>,
) {
    let block = content_block(app, title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(inner);

    f.render_widget(
        Gauge::default()
            .ratio(ratio.clamp(0.0, 1.0))
            .label(label)
            .gauge_style(Style::default().fg(color)),
        rows[0],
    );
    f.render_widget(List::new(history), rows[1]);
}

/// Latest values of every channel on one page.
pub fn draw_overview(f: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;
    let block = content_block(app, " Overview ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    match app.readings.latest_ph() {
        Some(r) => lines.push(Line::from(vec![
            Span::styled("pH          ", theme.normal_style()),
            Span::styled(format!("{:.2}", r.value), Style::default().fg(theme.water)),
        ])),
        None => lines.push(Line::from(Span::styled("pH          --", theme.normal_style()))),
    }
    if let Some(r) = app.readings.latest_temperature() {
        lines.push(Line::from(vec![
            Span::styled("Temperature ", theme.normal_style()),
            Span::styled(format!("{} °C", r.value), Style::default().fg(theme.clay)),
        ]));
    }
    if let Some(r) = app.readings.latest_moisture() {
        lines.push(Line::from(vec![
            Span::styled("Moisture    ", theme.normal_style()),
            Span::styled(format!("{} %", r.value), Style::default().fg(theme.leaf)),
        ]));
    }
    if let Some(r) = app.readings.latest_color() {
        lines.push(Line::from(vec![
            Span::styled("Soil color  ", theme.normal_style()),
            Span::styled(
                "██ ",
                Style::default().fg(Color::Rgb(r.red, r.green, r.blue)),
            ),
            Span::styled(
                format!("rgb({}, {}, {})", r.red, r.green, r.blue),
                Style::default().fg(theme.text_primary),
            ),
        ]));
    }

    lines.push(Line::default());
    if let Some(rec) = &app.recommendation {
        if let Some(top) = rec.top() {
            lines.push(Line::from(vec![
                Span::styled("Best crop   ", theme.normal_style()),
                Span::styled(
                    format!("{} ({:.0}%)", top.crop, top.score * 100.0),
                    Style::default().fg(theme.confidence_color(top.confidence)),
                ),
            ]));
        }
    }

    f.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_ph(f: &mut Frame, app: &App, area: Rect) {
    let latest = app.readings.latest_ph().map(|r| r.value).unwrap_or(0.0);
    let history: Vec<ListItem> = app
        .readings
        .recent_ph(area.height as usize)
        .map(|r| {
            ListItem::new(format!(
                "{}  pH {:.2}",
                r.timestamp.format("%H:%M:%S"),
                r.value
            ))
            .style(app.theme.normal_style())
        })
        .collect();

    gauge_page(
        f,
        app,
        area,
        " pH ",
        format!("pH {:.2}", latest),
        latest / 14.0,
        app.theme.water,
        history,
    );
}

pub fn draw_temperature(f: &mut Frame, app: &App, area: Rect) {
    let latest = app
        .readings
        .latest_temperature()
        .map(|r| r.value)
        .unwrap_or(0);
    let history: Vec<ListItem> = app
        .readings
        .recent_temperature(area.height as usize)
        .map(|r| {
            ListItem::new(format!(
                "{}  {} °C",
                r.timestamp.format("%H:%M:%S"),
                r.value
            ))
            .style(app.theme.normal_style())
        })
        .collect();

    gauge_page(
        f,
        app,
        area,
        " Temperature ",
        format!("{} °C", latest),
        f64::from(latest) / 50.0,
        app.theme.clay,
        history,
    );
}

pub fn draw_moisture(f: &mut Frame, app: &App, area: Rect) {
    let latest = app
        .readings
        .latest_moisture()
        .map(|r| r.value)
        .unwrap_or(0);
    let history: Vec<ListItem> = app
        .readings
        .recent_moisture(area.height as usize)
        .map(|r| {
            ListItem::new(format!(
                "{}  {} %",
                r.timestamp.format("%H:%M:%S"),
                r.value
            ))
            .style(app.theme.normal_style())
        })
        .collect();

    gauge_page(
        f,
        app,
        area,
        " Moisture ",
        format!("{} %", latest),
        f64::from(latest) / 100.0,
        app.theme.leaf,
        history,
    );
}

pub fn draw_color(f: &mut Frame, app: &App, area: Rect) {
    let block = content_block(app, " Soil Color ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::vertical([Constraint::Length(2), Constraint::Min(1)]).split(inner);

    if let Some(r) = app.readings.latest_color() {
        let swatch = Line::from(vec![
            Span::styled(
                "████████ ",
                Style::default().fg(Color::Rgb(r.red, r.green, r.blue)),
            ),
            Span::styled(
                format!("rgb({}, {}, {})", r.red, r.green, r.blue),
                Style::default().fg(app.theme.text_primary),
            ),
        ]);
        f.render_widget(Paragraph::new(swatch), rows[0]);
    }

    let history: Vec<ListItem> = app
        .readings
        .recent_color(rows[1].height as usize)
        .map(|r| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{}  ", r.timestamp.format("%H:%M:%S")),
                    app.theme.normal_style(),
                ),
                Span::styled("██ ", Style::default().fg(Color::Rgb(r.red, r.green, r.blue))),
                Span::styled(
                    format!("rgb({}, {}, {})", r.red, r.green, r.blue),
                    app.theme.normal_style(),
                ),
            ]))
        })
        .collect();
    f.render_widget(List::new(history), rows[1]);
}
