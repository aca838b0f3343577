//! Contrast Grid
//!
//! Pairwise contrast ratios between two lists of colors, with the whole
//! state kept in a shareable URL.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
