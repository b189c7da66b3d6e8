//! coinflip library - Responsive grid of flipping coins for the terminal
//!
//! This library exposes the core functionality of coinflip for testing purposes.

pub mod app;
pub mod coin;
pub mod config;
pub mod error;
pub mod grid;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod traversal;
pub mod viewport;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use grid::GridConfig;
