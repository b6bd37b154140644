//! Writerdesk - a terminal storefront and application menu bar
//!
//! This library provides the headless core of a document-writing suite's
//! shell (the book catalog storefront and the application menu bar) and a
//! terminal interface built with Ratatui that drives it.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`catalog`] - Catalog items, filtering, sorting and the storefront state machine
//! * [`menu`] - Menu table, menu bar controller and the command/navigation seams
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Book catalog data model and storefront state
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Application menu bar core
pub mod menu;

/// Terminal user interface components and rendering
pub mod ui;

/// Color and text helpers
pub mod utils;
