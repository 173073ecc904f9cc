//! Hardware facts (computer model, CPU, memory)

use super::source::{CpuField, SystemInfoSource};
use super::system::non_empty;
use crate::error::Result;
use crate::utils::parsing::{extract_double, extract_int, format_number};
use log::debug;

/// Collect the DMI product name and version as `"name version"`
pub fn collect_computer<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    let name = source.product_name()?;
    let version = source.product_version()?;
    non_empty(format!("{} {}", name, version).trim().to_string(), "DMI product")
}

/// Collect CPU model, thread count and max frequency
pub fn collect_cpu<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    let model = source.cpu_field(CpuField::ModelName)?;
    let threads = source.cpu_field(CpuField::LogicalCount)?;
    let max_mhz = source.cpu_field(CpuField::MaxMhz)?;

    compose_cpu(&model, &threads, &max_mhz)
}

/// Build `"<model> (<threads>) @ <ghz>GHz"`.
///
/// A missing frequency drops the `@ ...GHz` part; a missing model or an
/// unparsable thread count makes the whole fact unavailable.
pub fn compose_cpu(model: &str, threads: &str, max_mhz: &str) -> Result<String> {
    let model = non_empty(model.to_string(), "CPU model")?;
    let threads = extract_int(threads)?;

    match extract_double(max_mhz) {
        Ok(mhz) => Ok(format!(
            "{} ({}) @ {}GHz",
            model,
            threads,
            format_number(mhz / 1000.0, 2)
        )),
        Err(e) => {
            debug!("CPU max frequency unavailable: {}", e);
            Ok(format!("{} ({})", model, threads))
        }
    }
}

/// Memory counters in kB, as listed in meminfo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemorySample {
    pub total: i64,
    pub shmem: i64,
    pub free: i64,
    pub buffers: i64,
    pub cached: i64,
    pub sreclaimable: i64,
}

impl MemorySample {
    /// Summed in `f64` since the counters come straight from the file
    pub fn used_mib(&self) -> f64 {
        let used = self.total as f64 + self.shmem as f64
            - self.free as f64
            - self.buffers as f64
            - self.cached as f64
            - self.sreclaimable as f64;
        used / 1024.0
    }

    pub fn total_mib(&self) -> f64 {
        self.total as f64 / 1024.0
    }

    /// `"<used>MiB / <total>MiB"`, both rounded to whole MiB
    pub fn display(&self) -> String {
        format!(
            "{}MiB / {}MiB",
            format_number(self.used_mib(), 0),
            format_number(self.total_mib(), 0)
        )
    }
}

/// Collect memory usage. `MemTotal` is required; the other counters
/// count as zero when missing or unparsable.
pub fn collect_memory<S: SystemInfoSource + ?Sized>(source: &S) -> Result<String> {
    let total = extract_int(&source.meminfo_field("MemTotal")?)?;

    let optional = |key: &str| -> Result<i64> {
        let raw = source.meminfo_field(key)?;
        Ok(extract_int(&raw).unwrap_or_else(|e| {
            debug!("meminfo {} treated as 0: {}", key, e);
            0
        }))
    };

    let sample = MemorySample {
        total,
        shmem: optional("Shmem")?,
        free: optional("MemFree")?,
        buffers: optional("Buffers")?,
        cached: optional("Cached")?,
        sreclaimable: optional("SReclaimable")?,
    };

    Ok(sample.display())
}
