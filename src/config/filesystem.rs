//! The filesystem calls config discovery depends on.

use std::path::{Path, PathBuf};

/// What [`FileConfigLoader`](super::FileConfigLoader) needs to find and read
/// `.chart-prep.toml` and the user-level `config.toml`.
pub trait FileSystem {
    /// Contents of a config file.
    ///
    /// # Errors
    /// Propagates the underlying read failure.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Whether a config candidate is present.
    fn exists(&self, path: &Path) -> bool;

    /// Directory searched for the project-local config.
    ///
    /// # Errors
    /// Propagates the failure to resolve the working directory.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Per-user directory holding `config.toml`, if the platform has one.
    fn config_dir(&self) -> Option<PathBuf>;
}

/// [`FileSystem`] backed by `std::fs` and the platform's config location
/// (`~/.config/chart-prep` on Linux).
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "chart-prep")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

#[cfg(test)]
#[path = "filesystem_tests.rs"]
mod tests;
