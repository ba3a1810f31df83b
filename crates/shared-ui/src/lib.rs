//! Presentational components for the PPE dashboard.
//!
//! Every component links its own `style.css` and reads colours from the CSS
//! custom properties declared in the app's `main.css`.

pub mod components;

pub use components::*;
