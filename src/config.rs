//! Flat `name=value` configuration file holding the color settings

use crate::data::{Color, Palette};
use crate::error::{Result, SysgrabError};
use log::{info, warn};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const BASE_COLOR: &str = "base_color";
pub const ACCENT_COLOR: &str = "accent_color";

const COMMENT_PREFIX: &str = "//";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub name: String,
    pub value: String,
}

/// Entries in file order; comments are dropped on load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub entries: Vec<ConfigEntry>,
}

impl Config {
    /// Parse config text. Comment lines and lines without a non-empty
    /// name and value around the first `=` are skipped.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter(|line| !line.starts_with(COMMENT_PREFIX))
            .filter_map(|line| line.split_once('='))
            .filter(|(name, value)| !name.is_empty() && !value.is_empty())
            .map(|(name, value)| ConfigEntry {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();

        Config { entries }
    }

    /// Value of `name`; the last occurrence wins
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value.as_str())
    }
}

impl Palette {
    /// Resolve colors from a loaded config. A key only overrides its
    /// default when it is present and valid; zero channels are legitimate.
    pub fn from_config(config: &Config) -> Self {
        let defaults = Palette::default();
        Palette {
            base: resolve_color(config, BASE_COLOR, defaults.base),
            accent: resolve_color(config, ACCENT_COLOR, defaults.accent),
        }
    }
}

fn resolve_color(config: &Config, name: &str, default: Color) -> Color {
    match config.get(name) {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("ignoring {}: {}", name, e);
            default
        }),
        None => default,
    }
}

/// Parse an `r,g,b` value
pub fn parse_rgb(value: &str) -> Result<Color> {
    value.parse()
}

/// Whether `value` is a valid `r,g,b` color
pub fn validate_rgb(value: &str) -> bool {
    parse_rgb(value).is_ok()
}

/// Terminator of a raw line; a final unterminated line gets `\n`
fn line_ending(line: &[u8]) -> &'static [u8] {
    if line.ends_with(b"\r\n") {
        b"\r\n"
    } else {
        b"\n"
    }
}

/// The config file on disk
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        ConfigStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default config when the file does not exist yet
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }

        let defaults = Palette::default();
        let contents = format!(
            "{} sysgrab colors, each r,g,b with channels 0-255\n{}={}\n{}={}\n",
            COMMENT_PREFIX, BASE_COLOR, defaults.base, ACCENT_COLOR, defaults.accent
        );
        fs::write(&self.path, contents).map_err(|e| SysgrabError::resource(&self.path, e))?;
        info!("Created config at {}", self.path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Config> {
        let text = fs::read_to_string(&self.path).map_err(|e| SysgrabError::not_found(&self.path, e))?;
        Ok(Config::parse(&text))
    }

    /// Set `name` to the color `value`, replacing every existing `name=`
    /// line or appending one. The file is rewritten through a temporary
    /// file in the same directory and renamed into place; an invalid value
    /// leaves it untouched.
    pub fn edit(&self, name: &str, value: &str) -> Result<()> {
        parse_rgb(value)?;

        let current = fs::File::open(&self.path).map_err(|e| SysgrabError::not_found(&self.path, e))?;
        let permissions = current.metadata()?.permissions();
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)?;

        let setting = format!("{}=", name);
        let mut reader = BufReader::new(current);
        let mut line = Vec::new();
        let mut found = false;
        let mut terminated = true;
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if line.starts_with(setting.as_bytes()) {
                write!(temp, "{}={}", name, value)?;
                temp.write_all(line_ending(&line))?;
                found = true;
            } else {
                temp.write_all(&line)?;
            }
            terminated = line.ends_with(b"\n");
        }
        if !found {
            if !terminated {
                writeln!(temp)?;
            }
            writeln!(temp, "{}={}", name, value)?;
        }

        temp.as_file().set_permissions(permissions)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| SysgrabError::Io(e.error))?;
        info!("Set {}={} in {}", name, value, self.path.display());
        Ok(())
    }
}
