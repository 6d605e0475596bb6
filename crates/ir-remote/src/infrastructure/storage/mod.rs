//! Storage infrastructure: configuration and preset files.
//!
//! - `config` reads and writes the TOML [`AppConfig`](config::AppConfig) in
//!   the platform config directory, with defaults for a first run.
//! - `preset_file` loads JSON preset files and merges them into the catalog.

pub mod config;
pub mod preset_file;
