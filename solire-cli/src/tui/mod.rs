//! Terminal user interface for the solire dashboard

mod app;
mod input;
mod layout;
pub mod state;
pub mod theme;
pub mod views;

pub use app::{run, App};
