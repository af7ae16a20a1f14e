//! Resident-memory probes.

use std::fs;

/// Point-in-time reading of the process's resident memory.
///
/// Implementations must be side-effect free; the governor may call them
/// once per generated successor.
pub trait MemoryProbe {
    /// Current resident memory in bytes.
    fn current_resident_memory(&self) -> u64;
}

/// Reads the resident set size of the running process.
///
/// On Linux this parses the `VmRSS` line of `/proc/self/status`. Where the
/// figure is unavailable the probe reports 0, so a governor built on it
/// never vetoes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessMemoryProbe;

impl ProcessMemoryProbe {
    const STATUS_PATH: &'static str = "/proc/self/status";
}

impl MemoryProbe for ProcessMemoryProbe {
    fn current_resident_memory(&self) -> u64 {
        fs::read_to_string(Self::STATUS_PATH)
            .ok()
            .and_then(|status| parse_vm_rss(&status))
            .unwrap_or(0)
    }
}

/// Extract `VmRSS` (reported in kB) from a `/proc/<pid>/status` dump, in bytes.
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let mut fields = line["VmRSS:".len()..].split_whitespace();
    let value: u64 = fields.next()?.parse().ok()?;
    match fields.next() {
        Some("kB") | None => Some(value.saturating_mul(1024)),
        Some(_) => None,
    }
}

/// A probe that always reports the same reading.
///
/// Useful for deterministic tests and for callers that want to drive the
/// governor from their own accounting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedProbe(pub u64);

impl MemoryProbe for FixedProbe {
    fn current_resident_memory(&self) -> u64 {
        self.0
    }
}

impl<P: MemoryProbe + ?Sized> MemoryProbe for &P {
    fn current_resident_memory(&self) -> u64 {
        (**self).current_resident_memory()
    }
}
