//! Configuration module for budgetboard
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BoardPaths;
pub use settings::{OutputFormat, Settings};
