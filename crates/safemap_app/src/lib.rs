//! Map binding and application shell for the community safety map.
//!
//! The host (a browser or desktop frontend) owns the actual map widget and the
//! component tree. It forwards user input as [`shell::Msg`] values, applies the
//! returned [`shell::Effect`]s, and renders from the view models in [`view`].

pub mod config;
pub mod content;
pub mod map;
pub mod shell;
pub mod telemetry;
pub mod view;
