//! Locations of the config and art files

use crate::art::ensure_art_file;
use crate::config::ConfigStore;
use crate::error::{Result, SysgrabError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_DIR: &str = "sysgrab";
pub const CONFIG_FILE: &str = "config.txt";
pub const ART_FILE: &str = "art.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub config: PathBuf,
    pub art: PathBuf,
}

impl ResourcePaths {
    /// Resolve the config and art paths. Overrides may start with `~`;
    /// anything not overridden lives in `<config dir>/sysgrab/`.
    pub fn resolve(config: Option<&str>, art: Option<&str>) -> Result<Self> {
        let default_dir = || {
            dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or_else(|| {
                    SysgrabError::resource(
                        APP_DIR,
                        io::Error::new(io::ErrorKind::NotFound, "no user config directory"),
                    )
                })
        };

        let config = match config {
            Some(raw) => expand_path(raw),
            None => default_dir()?.join(CONFIG_FILE),
        };
        let art = match art {
            Some(raw) => expand_path(raw),
            None => default_dir()?.join(ART_FILE),
        };

        Ok(ResourcePaths { config, art })
    }

    /// Create missing parent directories, a default config and an empty
    /// art file
    pub fn ensure_exists(&self) -> Result<()> {
        create_parent(&self.config)?;
        create_parent(&self.art)?;
        ConfigStore::new(&self.config).ensure_exists()?;
        ensure_art_file(&self.art)
    }
}

/// Expand a leading `~` to the home directory
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn create_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| SysgrabError::resource(parent, e))
        }
        _ => Ok(()),
    }
}
