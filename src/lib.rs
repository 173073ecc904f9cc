//! sysgrab library
//!
//! Collects a handful of system facts and prints them beside an ASCII-art
//! banner in configurable truecolor.

pub mod art;
pub mod collectors;
pub mod config;
pub mod data;
pub mod display;
pub mod error;
pub mod paths;
pub mod utils;

pub use art::Art;
pub use collectors::{FactCollector, LinuxSource, SystemInfoSource};
pub use config::{Config, ConfigStore};
pub use data::{Color, FactKind, Facts, Palette};
pub use error::{Result, SysgrabError};

/// Collect every fact from the local system
pub fn collect_system_info() -> Facts {
    FactCollector::new(LinuxSource::new()).collect_all()
}
