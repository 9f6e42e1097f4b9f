//! Telemetry ingestion and viewport bookkeeping

use super::App;
use crate::tui::state::Viewport;
use solire_core::{recommend, SoilInput};

/// Current viewport geometry, preferring the terminal's reported pixel
/// width over the cell-based estimate.
pub fn detect_viewport(cols: u16, rows: u16) -> Viewport {
    match crossterm::terminal::window_size() {
        Ok(ws) if ws.width > 0 => Viewport {
            cols,
            rows,
            px_width: ws.width,
        },
        _ => Viewport::from_cells(cols, rows),
    }
}

impl App {
    /// Pull one synthetic sample, log it, and refresh the recommendation.
    pub fn ingest_sample(&mut self) {
        let sample = self.station.sample();
        self.readings.record(&sample);

        let input = SoilInput {
            ph: sample.ph,
            temperature: sample.temperature as f64,
            humidity: sample.moisture as f64,
        };
        match recommend(input) {
            Ok(rec) => self.recommendation = Some(rec),
            Err(e) => {
                tracing::warn!("recommendation skipped: {}", e);
            }
        }
    }

    /// Terminal resize: refresh geometry, then let the sidebar react.
    pub fn on_viewport_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = detect_viewport(cols, rows);
        self.sidebar.on_resize(self.viewport.px_width);
        tracing::debug!(
            "viewport resized to {}x{} ({}px wide)",
            cols,
            rows,
            self.viewport.px_width
        );
    }
}
