//! Data model shared by the collectors and the line composer

pub mod color;
pub mod system;

pub use color::{Color, Palette};
pub use system::{FactKind, Facts, NOT_FOUND};
