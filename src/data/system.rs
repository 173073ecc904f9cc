//! System facts gathered by one collection pass

use std::fmt;

/// Marker printed in place of a fact that could not be collected
pub const NOT_FOUND: &str = "not found";

/// The kinds of facts sysgrab reports, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactKind {
    Username,
    Hostname,
    Os,
    Architecture,
    Kernel,
    Computer,
    Shell,
    Uptime,
    Cpu,
    Memory,
}

impl FactKind {
    pub const ALL: [FactKind; 10] = [
        FactKind::Username,
        FactKind::Hostname,
        FactKind::Os,
        FactKind::Architecture,
        FactKind::Kernel,
        FactKind::Computer,
        FactKind::Shell,
        FactKind::Uptime,
        FactKind::Cpu,
        FactKind::Memory,
    ];

    /// Label printed before the value. Username and hostname form the
    /// header line and carry no label of their own.
    pub fn label(self) -> &'static str {
        match self {
            FactKind::Username | FactKind::Hostname => "",
            FactKind::Os => "OS: ",
            FactKind::Architecture => "Architecture: ",
            FactKind::Kernel => "Kernel: ",
            FactKind::Computer => "Host: ",
            FactKind::Shell => "Shell: ",
            FactKind::Uptime => "Uptime: ",
            FactKind::Cpu => "CPU: ",
            FactKind::Memory => "Memory: ",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FactKind::Username => "username",
            FactKind::Hostname => "hostname",
            FactKind::Os => "os",
            FactKind::Architecture => "architecture",
            FactKind::Kernel => "kernel",
            FactKind::Computer => "computer",
            FactKind::Shell => "shell",
            FactKind::Uptime => "uptime",
            FactKind::Cpu => "cpu",
            FactKind::Memory => "memory",
        };
        f.write_str(name)
    }
}

/// Result of one collection pass: a display string per kind, or `None`
/// when the kind is unavailable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Facts {
    values: [Option<String>; 10],
}

impl Facts {
    pub fn set(&mut self, kind: FactKind, value: Option<String>) {
        self.values[kind.index()] = value;
    }

    pub fn get(&self, kind: FactKind) -> Option<&str> {
        self.values[kind.index()].as_deref()
    }

    /// The value to print, falling back to [`NOT_FOUND`]
    pub fn display(&self, kind: FactKind) -> &str {
        self.get(kind).unwrap_or(NOT_FOUND)
    }
}
