//! View rendering

pub mod overlay;
pub mod readings;
pub mod recommend;
pub mod sidebar;
pub mod status_bar;

use ratatui::layout::Rect;
use ratatui::Frame;

use super::app::App;
use super::state::NavTarget;

/// Dispatch the content region to the routed view.
pub fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.view {
        NavTarget::Overview => readings::draw_overview(f, app, area),
        NavTarget::Ph => readings::draw_ph(f, app, area),
        NavTarget::Temperature => readings::draw_temperature(f, app, area),
        NavTarget::Moisture => readings::draw_moisture(f, app, area),
        NavTarget::Color => readings::draw_color(f, app, area),
        NavTarget::Recommendation => recommend::draw(f, app, area),
    }
}
