//! ASCII-art banner loading

use crate::error::{Result, SysgrabError};
use log::info;
use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Art lines plus the widest line's display width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Art {
    lines: Vec<String>,
    width: usize,
}

impl Art {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let width = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0);
        Art { lines, width }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Display width used to pad every line
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Create an empty art file when none exists
pub fn ensure_art_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    fs::File::create(path).map_err(|e| SysgrabError::resource(path, e))?;
    info!("Created empty art file at {}", path.display());
    Ok(())
}

/// Load the art file; `None` when it does not exist
pub fn load_art(path: &Path) -> Result<Option<Art>> {
    let file = match fs::File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SysgrabError::not_found(path, e)),
    };

    let mut lines = Vec::new();
    let mut reader = BufReader::new(file);
    let mut buf = Vec::with_capacity(256);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        lines.push(line.trim_end_matches(&['\n', '\r'][..]).to_string());
    }

    Ok(Some(Art::from_lines(lines)))
}
