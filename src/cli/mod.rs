//! CLI-specific utilities for wayfind
//!
//! This module contains code specific to the command-line interface,
//! separate from the core library functionality.

pub mod output;

pub use output::{render, OutputFormat};
