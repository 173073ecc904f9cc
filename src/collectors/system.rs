//! Identity, OS and session facts (user, host, OS, kernel, shell, uptime)

use super::source::SystemInfoSource;
use crate::error::{Result, SysgrabError};
use crate::utils::parsing::{extract_int, format_uptime};

pub fn collect_username<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    non_empty(source.username()?, "username")
}

pub fn collect_hostname<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    non_empty(source.hostname()?, "hostname")
}

pub fn collect_os<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    non_empty(source.os_pretty_name()?, "PRETTY_NAME")
}

pub fn collect_architecture<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    non_empty(source.architecture()?, "architecture")
}

pub fn collect_kernel<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    non_empty(source.kernel_release()?, "kernel release")
}

pub fn collect_shell<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    let path = source.shell_path()?;
    non_empty(shell_name(&path).to_string(), "SHELL")
}

pub fn collect_uptime<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    uptime_from_sample(&source.uptime_seconds_field()?)
}

/// Last path component of a shell path (`/usr/bin/zsh` -> `zsh`)
pub fn shell_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Format the leading whole seconds of an uptime sample as `H:MM:SS`
pub fn uptime_from_sample(sample: &str) -> Result<String> {
    let seconds = extract_int(sample)?;
    let seconds = u64::try_from(seconds).map_err(|_| SysgrabError::OutOfRange(sample.to_string()))?;
    Ok(format_uptime(seconds))
}

pub(crate) fn non_empty(value: String, what: &str) -> Result<String> {
    if value.is_empty() {
        Err(SysgrabError::Unavailable(what.to_string()))
    } else {
        Ok(value)
    }
}
