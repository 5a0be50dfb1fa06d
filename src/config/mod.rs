//! Configuration module for Sinta-Harvest
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file, and carries the documented defaults.
//!
//! # Example
//!
//! ```no_run
//! use sinta_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping '{}' from {}", config.keyword, config.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{HarvestConfig, DEFAULT_BASE_URL, DEFAULT_KEYWORD};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::validate;
