//! Hawaii Climate Core Library
//!
//! Shared utilities for the loader and API services:
//! - Configuration loading (XDG-compliant)
//! - File system utilities
//! - Observation date parsing

mod config;
mod dates;
pub mod fs;

pub use config::{find_config_file, get_xdg_data_dir, load_config, ConfigSource};
pub use dates::{format_date, parse_date, DATE_FORMAT};
pub use fs::{create_dir_all, path_exists};

/// Application name used for XDG paths
pub const APP_NAME: &str = "hawaii-climate";

/// Default API port
pub const DEFAULT_API_PORT: u16 = 9090;

/// Default SQLite database file name
pub const DB_FILE_NAME: &str = "hawaii.sqlite";
