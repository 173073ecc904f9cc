//! Shared helpers: string extraction and line-oriented source reading

pub mod command;
pub mod file;
pub mod parsing;
