//! Launcher icon generator for the Mobile Invoice Assistant Android app.

pub mod config;
pub mod draw;
pub mod error;
pub mod generate;
pub mod icon;
pub mod logger;
pub mod targets;

pub use error::{IconError, Result};
pub use generate::{generate_all, GenerationReport};
pub use icon::{create_icon, encode_png, render_icon};
