//! Path utilities for mindmatch.
//!
//! User-level settings live under `~/.mindmatch/`:
//! - `~/.mindmatch/config.toml` - default configuration

use std::path::PathBuf;

/// Returns the mindmatch home directory (`~/.mindmatch/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mindmatch")
}

/// Returns the default config file path (`~/.mindmatch/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}
