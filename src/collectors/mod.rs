//! Fact collection: turns raw samples from a [`SystemInfoSource`] into
//! display strings.

pub mod hardware;
pub mod source;
pub mod system;

pub use source::{CpuField, LinuxSource, SourcePaths, SystemInfoSource};

use crate::data::{FactKind, Facts};
use crate::error::Result;
use log::debug;

/// Collects facts one kind at a time from a source backend
#[derive(Debug, Clone, Default)]
pub struct FactCollector<S> {
    source: S,
}

impl<S: SystemInfoSource> FactCollector<S> {
    pub fn new(source: S) -> Self {
        FactCollector { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Collect a single fact; `None` when it is unavailable
    pub fn collect(&self, kind: FactKind) -> Option<String> {
        match self.try_collect(kind) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("{} unavailable: {}", kind, e);
                None
            }
        }
    }

    /// Collect every fact in display order. A failing kind never affects
    /// the others.
    pub fn collect_all(&self) -> Facts {
        let mut facts = Facts::default();
        for kind in FactKind::ALL {
            facts.set(kind, self.collect(kind));
        }
        facts
    }

    fn try_collect(&self, kind: FactKind) -> Result<String> {
        let source = &self.source;
        match kind {
            FactKind::Username => system::collect_username(source),
            FactKind::Hostname => system::collect_hostname(source),
            FactKind::Os => system::collect_os(source),
            FactKind::Architecture => system::collect_architecture(source),
            FactKind::Kernel => system::collect_kernel(source),
            FactKind::Computer => hardware::collect_computer(source),
            FactKind::Shell => system::collect_shell(source),
            FactKind::Uptime => system::collect_uptime(source),
            FactKind::Cpu => hardware::collect_cpu(source),
            FactKind::Memory => hardware::collect_memory(source),
        }
    }
}
