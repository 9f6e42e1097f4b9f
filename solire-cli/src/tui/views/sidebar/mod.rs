//! Sidebar navigation panel

mod render;

pub use render::render;
