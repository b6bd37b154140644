//! Core UI functionality for the Writerdesk application.
//!
//! This module contains the fundamental building blocks for the user interface,
//! including event handling, component abstractions and the action vocabulary
//! that flows between components.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Event processing and keyboard/mouse input handling
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
