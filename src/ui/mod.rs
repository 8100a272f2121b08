//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions and colors
//! - The terminal render surface
//! - Reusable widgets
//! - Main render loop

pub mod render;
pub mod theme;
pub mod view;
pub mod widgets;

pub use render::render;
pub use theme::Theme;
pub use view::ViewModel;
