//! Raw sample sources for the fact collector

use crate::error::{Result, SysgrabError};
use crate::utils::{command::read_command, file::read_file};
use std::env;
use std::ffi::CStr;
use std::path::PathBuf;

/// Fields read from the CPU-info utility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CpuField {
    ModelName,
    LogicalCount,
    MaxMhz,
}

/// Capability interface supplying raw, cleaned samples.
///
/// Every method returns the sample as text; an empty string means the
/// source was readable but the value was not present. Derivation (unit
/// conversion, formatting) stays in the collectors.
pub trait SystemInfoSource {
    fn username(&self) -> Result<String>;
    fn hostname(&self) -> Result<String>;
    fn os_pretty_name(&self) -> Result<String>;
    fn architecture(&self) -> Result<String>;
    fn kernel_release(&self) -> Result<String>;
    fn product_name(&self) -> Result<String>;
    fn product_version(&self) -> Result<String>;
    fn shell_path(&self) -> Result<String>;
    /// First line of the uptime source, seconds first
    fn uptime_seconds_field(&self) -> Result<String>;
    fn cpu_field(&self, field: CpuField) -> Result<String>;
    /// A meminfo value in kB, e.g. `meminfo_field("MemTotal")`
    fn meminfo_field(&self, key: &str) -> Result<String>;
}

/// File locations read by [`LinuxSource`]
#[derive(Debug, Clone)]
pub struct SourcePaths {
    pub os_release: PathBuf,
    pub uptime: PathBuf,
    pub meminfo: PathBuf,
    pub product_name: PathBuf,
    pub product_version: PathBuf,
}

impl Default for SourcePaths {
    fn default() -> Self {
        SourcePaths {
            os_release: "/etc/os-release".into(),
            uptime: "/proc/uptime".into(),
            meminfo: "/proc/meminfo".into(),
            product_name: "/sys/devices/virtual/dmi/id/product_name".into(),
            product_version: "/sys/devices/virtual/dmi/id/product_version".into(),
        }
    }
}

/// Reads procfs/sysfs files, libc identity calls and the `uname`/`lscpu`
/// utilities.
#[derive(Debug, Clone, Default)]
pub struct LinuxSource {
    paths: SourcePaths,
}

impl LinuxSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths(paths: SourcePaths) -> Self {
        LinuxSource { paths }
    }
}

impl SystemInfoSource for LinuxSource {
    fn username(&self) -> Result<String> {
        let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
        let mut result: *mut libc::passwd = std::ptr::null_mut();
        let mut buffer = vec![0 as libc::c_char; 1024];

        loop {
            let rc = unsafe {
                libc::getpwuid_r(
                    libc::geteuid(),
                    &mut pwd,
                    buffer.as_mut_ptr(),
                    buffer.len(),
                    &mut result,
                )
            };
            if rc == libc::ERANGE && buffer.len() < 64 * 1024 {
                buffer.resize(buffer.len() * 2, 0);
                continue;
            }
            if rc != 0 {
                return Err(std::io::Error::from_raw_os_error(rc).into());
            }
            break;
        }

        if result.is_null() || pwd.pw_name.is_null() {
            return Err(SysgrabError::Unavailable("passwd entry".to_string()));
        }
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        Ok(name.to_string_lossy().into_owned())
    }

    fn hostname(&self) -> Result<String> {
        let mut buffer = [0u8; 256];
        let rc = unsafe { libc::gethostname(buffer.as_mut_ptr() as *mut libc::c_char, buffer.len()) };
        if rc != 0 {
            return Err(std::io::Error::last_os_error().into());
        }
        let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
        Ok(String::from_utf8_lossy(&buffer[..end]).into_owned())
    }

    fn os_pretty_name(&self) -> Result<String> {
        read_file(
            &self.paths.os_release,
            Some("PRETTY_NAME"),
            Some("PRETTY_NAME=\""),
            Some("\""),
        )
    }

    fn architecture(&self) -> Result<String> {
        read_command("uname", &["-m"], None, None, None)
    }

    fn kernel_release(&self) -> Result<String> {
        read_command("uname", &["-r"], None, None, None)
    }

    fn product_name(&self) -> Result<String> {
        read_file(&self.paths.product_name, None, None, None)
    }

    fn product_version(&self) -> Result<String> {
        read_file(&self.paths.product_version, None, None, None)
    }

    fn shell_path(&self) -> Result<String> {
        env::var("SHELL").map_err(|_| SysgrabError::Unavailable("SHELL".to_string()))
    }

    fn uptime_seconds_field(&self) -> Result<String> {
        read_file(&self.paths.uptime, None, None, None)
    }

    fn cpu_field(&self, field: CpuField) -> Result<String> {
        let (lookup, prefix) = match field {
            CpuField::ModelName => ("Model name:", "Model name:"),
            CpuField::LogicalCount => ("CPU(s):", "CPU(s):"),
            CpuField::MaxMhz => ("CPU max MHz:", "CPU max MHz:"),
        };
        read_command("lscpu", &[], Some(lookup), Some(prefix), None)
    }

    fn meminfo_field(&self, key: &str) -> Result<String> {
        let lookup = format!("{}:", key);
        read_file(&self.paths.meminfo, Some(&lookup), Some(&lookup), Some(" kB"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn fixture(dir: &TempDir) -> LinuxSource {
        let root = dir.path();
        fs::write(
            root.join("os-release"),
            "NAME=\"Arch Linux\"\nPRETTY_NAME=\"Arch Linux\"\nID=arch\n",
        )
        .unwrap();
        fs::write(root.join("uptime"), "3661.50 1234.0\n").unwrap();
        fs::write(
            root.join("meminfo"),
            "MemTotal:        8000000 kB\nMemFree:         6000000 kB\nShmem:             12 kB\nShmemHugePages:        0 kB\n",
        )
        .unwrap();
        fs::write(root.join("product_name"), "ThinkPad X1\n").unwrap();

        LinuxSource::with_paths(SourcePaths {
            os_release: root.join("os-release"),
            uptime: root.join("uptime"),
            meminfo: root.join("meminfo"),
            product_name: root.join("product_name"),
            product_version: root.join("product_version"),
        })
    }

    #[test]
    fn reads_os_pretty_name() {
        let dir = TempDir::new().unwrap();
        assert_eq!(fixture(&dir).os_pretty_name().unwrap(), "Arch Linux");
    }

    #[test]
    fn meminfo_lookup_includes_colon() {
        let dir = TempDir::new().unwrap();
        let source = fixture(&dir);
        assert_eq!(source.meminfo_field("Shmem").unwrap(), "12");
        assert_eq!(source.meminfo_field("Buffers").unwrap(), "");
    }

    #[test]
    fn missing_dmi_file_is_error() {
        let dir = TempDir::new().unwrap();
        let source = fixture(&dir);
        assert_eq!(source.product_name().unwrap(), "ThinkPad X1");
        assert!(matches!(source.product_version(), Err(SysgrabError::NotFound { .. })));
    }

    #[test]
    fn identity_calls_succeed() {
        let source = LinuxSource::new();
        assert!(!source.hostname().unwrap().is_empty());
        // the effective user may lack a passwd entry in minimal containers
        if let Ok(name) = source.username() {
            assert!(!name.is_empty());
        }
    }
}
