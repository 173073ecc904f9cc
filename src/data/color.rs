//! Truecolor values used by the line composer

use crate::error::SysgrabError;
use std::fmt;
use std::str::FromStr;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const TEAL: Color = Color::new(64, 224, 208);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// ANSI escape that switches the terminal foreground to this color
    pub fn ansi_fg(&self) -> String {
        format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
    }
}

/// Parses `r,g,b`: exactly three base-10 integers in 0..=255 and nothing else.
impl FromStr for Color {
    type Err = SysgrabError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let malformed = || SysgrabError::ConfigMalformed(value.to_string());

        let channels = value
            .split(',')
            .map(|part| part.parse::<i32>().ok().and_then(|c| u8::try_from(c).ok()))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(malformed)?;

        match channels.as_slice() {
            [r, g, b] => Ok(Color::new(*r, *g, *b)),
            _ => Err(malformed()),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.r, self.g, self.b)
    }
}

/// Base color for values, accent color for labels and art
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Color,
    pub accent: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            base: Color::WHITE,
            accent: Color::TEAL,
        }
    }
}
