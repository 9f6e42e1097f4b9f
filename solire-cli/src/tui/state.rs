//! TUI state types
//!
//! `SidebarLayout` is the presentation-state controller for the collapsible
//! sidebar: a handful of boolean markers mutated by discrete input events.
//! It performs no rendering and no navigation itself; the render layer
//! projects the markers onto the screen and the app routes view changes.

/// Fixed viewport-width threshold separating compact and wide behavior.
///
/// Widths are in pixels; when the terminal does not report pixel size the
/// app estimates them from cell columns.
pub const COMPACT_BREAKPOINT: u16 = 768;

/// Estimated cell width in pixels for terminals that report no window size.
pub const CELL_PX_ESTIMATE: u16 = 8;

/// Focus position in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
}

/// Views routed by the sidebar navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Overview,
    Ph,
    Temperature,
    Moisture,
    Color,
    Recommendation,
}

impl NavTarget {
    pub const ALL: [NavTarget; 6] = [
        NavTarget::Overview,
        NavTarget::Ph,
        NavTarget::Temperature,
        NavTarget::Moisture,
        NavTarget::Color,
        NavTarget::Recommendation,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Ph => "pH",
            Self::Temperature => "Temperature",
            Self::Moisture => "Moisture",
            Self::Color => "Soil Color",
            Self::Recommendation => "Recommendation",
        }
    }
}

/// A navigation entry with its active marker
#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    pub target: NavTarget,
    pub active: bool,
}

impl NavLink {
    pub fn new(target: NavTarget) -> Self {
        Self {
            target,
            active: false,
        }
    }
}

/// Last known viewport geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    /// Width in pixels, estimated when the terminal reports none.
    pub px_width: u16,
}

impl Viewport {
    /// Geometry from cell dimensions alone, using the per-cell estimate.
    pub fn from_cells(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            px_width: cols.saturating_mul(CELL_PX_ESTIMATE),
        }
    }

    pub fn is_compact(&self) -> bool {
        self.px_width <= COMPACT_BREAKPOINT
    }
}

/// Sidebar presentation state.
///
/// `shown`/`overlay_shown` (compact) and `collapsed`/`content_expanded`
/// (wide) are flipped independently rather than derived from one another;
/// the toggle keeps them in step but nothing forces them equal.
#[derive(Debug, Clone)]
pub struct SidebarLayout {
    /// Wide layout: sidebar hidden.
    pub collapsed: bool,
    /// Wide layout: content claims the sidebar's space.
    pub content_expanded: bool,
    /// Compact layout: slide-over panel visible.
    pub shown: bool,
    /// Compact layout: scrim over the content visible.
    pub overlay_shown: bool,
    /// Navigation entries in display order.
    pub links: Vec<NavLink>,
    /// Keyboard cursor over the entries.
    pub cursor: usize,
}

impl SidebarLayout {
    /// Controller over the standard dashboard navigation.
    pub fn new() -> Self {
        Self::with_links(NavTarget::ALL.iter().copied().map(NavLink::new).collect())
    }

    pub fn with_links(links: Vec<NavLink>) -> Self {
        Self {
            collapsed: false,
            content_expanded: false,
            shown: false,
            overlay_shown: false,
            links,
            cursor: 0,
        }
    }

    /// Toggle-control activation: branch on the fixed breakpoint.
    pub fn toggle(&mut self, viewport_width: u16) {
        if viewport_width <= COMPACT_BREAKPOINT {
            // Compact: slide-over and scrim, each flipped on its own.
            self.shown = !self.shown;
            self.overlay_shown = !self.overlay_shown;
        } else {
            self.collapsed = !self.collapsed;
            self.content_expanded = !self.content_expanded;
        }
    }

    /// Scrim activation (or Esc): close the slide-over. Idempotent.
    pub fn dismiss_overlay(&mut self) {
        self.shown = false;
        self.overlay_shown = false;
    }

    /// Viewport resize: a wide viewport never shows the slide-over.
    pub fn on_resize(&mut self, viewport_width: u16) {
        if viewport_width > COMPACT_BREAKPOINT {
            self.shown = false;
            self.overlay_shown = false;
        }
    }

    /// Move the active marker to `idx` and report the target to route.
    ///
    /// Two-phase: clear-all must finish before set-one, so the new marker
    /// survives the sweep. Out-of-range activations are ignored.
    pub fn activate_link(&mut self, idx: usize) -> Option<NavTarget> {
        if idx >= self.links.len() {
            return None;
        }
        for link in &mut self.links {
            link.active = false;
        }
        let link = &mut self.links[idx];
        link.active = true;
        Some(link.target)
    }

    /// Index of the active entry, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.links.iter().position(|l| l.active)
    }

    pub fn cursor_up(&mut self) {
        if self.links.is_empty() {
            return;
        }
        self.cursor = if self.cursor == 0 {
            self.links.len() - 1
        } else {
            self.cursor - 1
        };
    }

    pub fn cursor_down(&mut self) {
        if self.links.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.links.len();
    }
}

impl Default for SidebarLayout {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> u16 {
        1024
    }

    fn narrow() -> u16 {
        375
    }

    #[test]
    fn test_toggle_compact_flips_only_slide_over_markers() {
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(narrow());

        assert!(sidebar.shown);
        assert!(sidebar.overlay_shown);
        assert!(!sidebar.collapsed);
        assert!(!sidebar.content_expanded);
    }

    #[test]
    fn test_toggle_at_breakpoint_is_compact() {
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(COMPACT_BREAKPOINT);
        assert!(sidebar.shown);
        assert!(!sidebar.collapsed);
    }

    #[test]
    fn test_toggle_wide_flips_only_desktop_markers() {
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(wide());

        assert!(sidebar.collapsed);
        assert!(sidebar.content_expanded);
        assert!(!sidebar.shown);
        assert!(!sidebar.overlay_shown);
    }

    #[test]
    fn test_compact_double_toggle_returns_to_hidden() {
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(narrow());
        assert!(sidebar.shown && sidebar.overlay_shown);

        sidebar.toggle(narrow());
        assert!(!sidebar.shown && !sidebar.overlay_shown);
    }

    #[test]
    fn test_dismiss_overlay_is_idempotent() {
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(narrow());

        sidebar.dismiss_overlay();
        let after_once = (sidebar.shown, sidebar.overlay_shown);
        sidebar.dismiss_overlay();

        assert_eq!(after_once, (false, false));
        assert_eq!((sidebar.shown, sidebar.overlay_shown), after_once);
    }

    #[test]
    fn test_resize_wide_clears_slide_over_regardless_of_prior_state() {
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(narrow());
        assert!(sidebar.shown);

        sidebar.on_resize(wide());
        assert!(!sidebar.shown);
        assert!(!sidebar.overlay_shown);

        // Repeat firing during a drag-resize has no further effect.
        sidebar.on_resize(wide());
        assert!(!sidebar.shown);
        assert!(!sidebar.overlay_shown);
    }

    #[test]
    fn test_resize_narrow_leaves_all_markers_alone() {
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(narrow());
        sidebar.on_resize(narrow());
        assert!(sidebar.shown && sidebar.overlay_shown);
    }

    #[test]
    fn test_resize_does_not_touch_desktop_markers() {
        // Collapse on a wide viewport, then shrink: the collapse sticks.
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(wide());
        assert!(sidebar.collapsed && sidebar.content_expanded);

        sidebar.on_resize(narrow());
        assert!(sidebar.collapsed && sidebar.content_expanded);
    }

    #[test]
    fn test_activation_keeps_exactly_one_link_active() {
        let mut sidebar = SidebarLayout::new();
        assert_eq!(sidebar.active_index(), None);

        // Click B then C: only C ends up active.
        sidebar.activate_link(1);
        sidebar.activate_link(2);

        assert_eq!(sidebar.active_index(), Some(2));
        assert_eq!(sidebar.links.iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn test_activation_reports_routed_target() {
        let mut sidebar = SidebarLayout::new();
        assert_eq!(sidebar.activate_link(1), Some(NavTarget::Ph));
        assert_eq!(sidebar.activate_link(5), Some(NavTarget::Recommendation));
    }

    #[test]
    fn test_out_of_range_activation_is_ignored() {
        let mut sidebar = SidebarLayout::new();
        sidebar.activate_link(0);
        assert_eq!(sidebar.activate_link(99), None);
        assert_eq!(sidebar.active_index(), Some(0));
    }

    #[test]
    fn test_reactivating_same_link_stays_single_active() {
        let mut sidebar = SidebarLayout::new();
        sidebar.activate_link(3);
        sidebar.activate_link(3);
        assert_eq!(sidebar.active_index(), Some(3));
        assert_eq!(sidebar.links.iter().filter(|l| l.active).count(), 1);
    }

    #[test]
    fn test_empty_link_list_has_no_activation() {
        let mut sidebar = SidebarLayout::with_links(Vec::new());
        assert_eq!(sidebar.activate_link(0), None);
        sidebar.cursor_up();
        sidebar.cursor_down();
        assert_eq!(sidebar.cursor, 0);
    }

    #[test]
    fn test_cursor_wraps_both_directions() {
        let mut sidebar = SidebarLayout::new();
        sidebar.cursor_up();
        assert_eq!(sidebar.cursor, sidebar.links.len() - 1);
        sidebar.cursor_down();
        assert_eq!(sidebar.cursor, 0);
    }

    #[test]
    fn test_desktop_collapse_survives_compact_resize_scenario() {
        // width=1024: toggle collapses panel and expands content; shrinking
        // to 375 only concerns the slide-over markers.
        let mut sidebar = SidebarLayout::new();
        sidebar.toggle(1024);
        assert!(sidebar.collapsed);
        assert!(sidebar.content_expanded);

        sidebar.on_resize(375);
        assert!(sidebar.collapsed);
        assert!(sidebar.content_expanded);
        assert!(!sidebar.shown);
    }

    #[test]
    fn test_viewport_pixel_estimate() {
        let vp = Viewport::from_cells(80, 24);
        assert_eq!(vp.px_width, 640);
        assert!(vp.is_compact());

        let vp = Viewport::from_cells(200, 50);
        assert_eq!(vp.px_width, 1600);
        assert!(!vp.is_compact());
    }
}
