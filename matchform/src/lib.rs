//! Editable forms for window-matcher trees.
//!
//! A matcher document is built into a form on a [`platform::Surface`], edited
//! through its affordance buttons and read back with the extractor.

pub mod app;
pub mod config;
pub mod core;
pub mod editor;
pub mod effect;
pub mod form;
pub mod platform;
pub mod render;
