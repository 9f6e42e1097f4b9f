//! TUI application state machine
//!
//! Split into functional submodules:
//! - events.rs: telemetry ingestion and viewport bookkeeping

mod events;

pub use events::detect_viewport;

use crate::error::TuiError;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, BeginSynchronizedUpdate, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use solire_config::Config;
use solire_core::{Recommendation, ReadingLog, SyntheticStation};
use std::io;
use tokio::sync::mpsc;

type Result<T> = std::result::Result<T, TuiError>;

use super::input::{handle_input_sync, handle_mouse_sync};
use super::layout::draw;
use super::state::{Focus, NavTarget, SidebarLayout, Viewport};
use super::theme::Theme;

/// Application state
pub struct App {
    // ============ Configuration ============
    pub config: Config,
    pub theme: Theme,

    // ============ Layout State ============
    pub sidebar: SidebarLayout,
    pub focus: Focus,
    pub view: NavTarget,
    pub viewport: Viewport,

    // ============ Telemetry ============
    pub readings: ReadingLog,
    pub station: SyntheticStation,
    pub recommendation: Option<Recommendation>,

    // ============ UI State ============
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let (cols, rows) = crossterm::terminal::size().map_err(TuiError::TerminalInit)?;
        Ok(Self::with_viewport(config, detect_viewport(cols, rows)))
    }

    /// Build the app against a known viewport.
    pub fn with_viewport(config: Config, viewport: Viewport) -> Self {
        let mut sidebar = SidebarLayout::new();
        if config.options.start_collapsed && !viewport.is_compact() {
            sidebar.collapsed = true;
            sidebar.content_expanded = true;
        }

        let mut app = Self {
            readings: ReadingLog::with_capacity(config.telemetry.log_capacity),
            station: SyntheticStation::new(),
            recommendation: None,
            config,
            theme: Theme::default(),
            sidebar,
            focus: Focus::Sidebar,
            view: NavTarget::Overview,
            viewport,
            status_message: None,
            should_quit: false,
        };

        app.sidebar.activate_link(0);
        app.ingest_sample();

        app
    }

    /// Toggle the sidebar at the current viewport width.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle(self.viewport.px_width);
    }

    /// Route navigation: mark the link active and switch the content view.
    pub fn activate_nav(&mut self, idx: usize) {
        if let Some(target) = self.sidebar.activate_link(idx) {
            self.sidebar.cursor = idx;
            self.view = target;
            self.status_message = Some(format!("Viewing {}", target.title()));
            tracing::debug!("navigated to {}", target.title());
        }
    }
}

/// Spawn a thread to read crossterm events (blocking I/O)
fn spawn_input_reader() -> mpsc::Receiver<Event> {
    let (tx, rx) = mpsc::channel(32);

    std::thread::spawn(move || {
        while let Ok(event) = event::read() {
            if tx.blocking_send(event).is_err() {
                break; // Receiver dropped
            }
        }
    });

    rx
}

/// Run the TUI application
pub async fn run(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode().map_err(TuiError::TerminalInit)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TuiError::TerminalInit)?;
    if app.config.options.mouse_enabled {
        execute!(stdout, EnableMouseCapture).map_err(TuiError::TerminalInit)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(TuiError::TerminalInit)?;

    // Spawn input reader thread (crossterm events are blocking)
    let mut input_rx = spawn_input_reader();

    // Fixed 16ms render interval (~60fps) - always render on every tick
    let mut render_interval = tokio::time::interval(std::time::Duration::from_millis(16));
    render_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Synthetic sensor sampling
    let mut sample_interval = tokio::time::interval(std::time::Duration::from_secs(
        app.config.telemetry.sample_interval_secs,
    ));
    sample_interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Main loop with tokio::select!
    loop {
        tokio::select! {
            biased; // Check branches in priority order

            // 1. Highest priority: user input
            Some(event) = input_rx.recv() => {
                match event {
                    Event::Key(key) => {
                        handle_input_sync(&mut app, key);
                    }
                    Event::Mouse(mouse) => {
                        handle_mouse_sync(&mut app, mouse);
                    }
                    Event::Resize(cols, rows) => {
                        app.on_viewport_resize(cols, rows);
                    }
                    _ => {}
                }
            }

            // 2. Ctrl+C / SIGINT
            _ = tokio::signal::ctrl_c() => {
                app.should_quit = true;
            }

            // 3. Sensor sampling tick
            _ = sample_interval.tick() => {
                app.ingest_sample();
            }

            // 4. Render tick - always render, no dirty checks
            _ = render_interval.tick() => {
                // Use synchronized update to prevent flicker
                execute!(terminal.backend_mut(), BeginSynchronizedUpdate)
                    .map_err(TuiError::Render)?;
                terminal.draw(|f| draw(f, &app)).map_err(TuiError::Render)?;
                execute!(terminal.backend_mut(), EndSynchronizedUpdate)
                    .map_err(TuiError::Render)?;
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode().map_err(TuiError::TerminalRestore)?;
    if app.config.options.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture).map_err(TuiError::TerminalRestore)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(TuiError::TerminalRestore)?;
    terminal.show_cursor().map_err(TuiError::TerminalRestore)?;

    tracing::info!("dashboard exited");
    Ok(())
}
