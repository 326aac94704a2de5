//! Terminal number-base converter.
//!
//! The pure conversion core lives in [`convert`]; [`ui::selection`] holds
//! the single-select group state, and the rest of [`ui`] is the ratatui
//! front end gluing the two together. [`cli`] adds a one-shot mode for
//! scripting.

pub mod cli;
pub mod config;
pub mod convert;
pub mod logging;
pub mod ui;
