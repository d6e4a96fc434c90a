//! User Interface layer
//!
//! This module contains all UI-related code:
//! - Theme definitions and the theme store
//! - Theme-dependent style resolution
//! - Reusable widgets
//! - Main render loop

pub mod render;
pub mod style;
pub mod theme;
pub mod widgets;

pub use render::render;
