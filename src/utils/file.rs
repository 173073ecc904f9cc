//! File reading utilities

use crate::error::{Result, SysgrabError};
use crate::utils::parsing::clean;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Read one line of interest out of a text file and clean it.
///
/// With `lookup`, the first line starting with that exact byte prefix is
/// selected; when no line matches the result is an empty string. Without
/// `lookup`, the first line is taken.
pub fn read_file<P: AsRef<Path>>(
    path: P,
    lookup: Option<&str>,
    prefix: Option<&str>,
    suffix: Option<&str>,
) -> Result<String> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SysgrabError::not_found(path, e))?;
    let line = select_line(BufReader::new(file), lookup)?;

    Ok(line
        .map(|l| clean(&l, prefix, suffix))
        .unwrap_or_default())
}

/// Pick the first line (or the first line matching `lookup`) from a reader.
/// Invalid UTF-8 is replaced rather than rejected.
pub fn select_line<R: BufRead>(mut reader: R, lookup: Option<&str>) -> io::Result<Option<String>> {
    let mut buf = Vec::with_capacity(128);

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let matched = match lookup {
            Some(key) => buf.starts_with(key.as_bytes()),
            None => true,
        };
        if matched {
            return Ok(Some(String::from_utf8_lossy(&buf).into_owned()));
        }
    }
}
