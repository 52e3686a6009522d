//! Library exports for the airtype virtual keyboard.
//!
//! Exposes the layout model, the per-frame interaction state machine and the
//! capture/render collaborators so the binary and integration tests can drive
//! a typing session from any frame source.

pub mod capture;
pub mod config;
pub mod draw;
pub mod input;
pub mod layout;
pub mod session;
pub mod ui;
pub mod util;

pub use config::Config;
