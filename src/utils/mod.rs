//! Utility modules for the Writerdesk application.
//!
//! # Available Utilities
//!
//! - [`color`] - Hex color parsing for the app switcher palette
//! - [`text`] - Width-aware truncation and wrapping for fixed-size cells

pub mod color;
pub mod text;
