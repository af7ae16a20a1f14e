//! Budget check consulted before each successor is generated.

use super::probe::{MemoryProbe, ProcessMemoryProbe};

/// Worst-case allocation of one expansion step (successor nodes and
/// visited-set entries), in bytes.
pub const DEFAULT_RESERVED_MARGIN: u64 = 50_000_000;

/// Answers "may I expand one more node?" against a fixed budget.
///
/// The check is advisory: nothing is reserved or locked, so a single large
/// expansion can transiently exceed the margin before the next check fires.
#[derive(Clone, Debug)]
pub struct MemoryGovernor<P: MemoryProbe = ProcessMemoryProbe> {
    probe: P,
    budget: u64,
    reserved_margin: u64,
}

impl MemoryGovernor<ProcessMemoryProbe> {
    /// Create a governor over the process's resident memory.
    #[must_use]
    pub fn new(budget: u64) -> Self {
        Self::with_probe(ProcessMemoryProbe, budget)
    }

    /// A governor that never vetoes.
    #[must_use]
    pub fn unlimited() -> Self {
        Self::new(u64::MAX)
    }
}

impl<P: MemoryProbe> MemoryGovernor<P> {
    /// Create a governor over a custom probe.
    pub fn with_probe(probe: P, budget: u64) -> Self {
        Self {
            probe,
            budget,
            reserved_margin: DEFAULT_RESERVED_MARGIN,
        }
    }

    /// Override the reserved margin.
    #[must_use]
    pub fn with_reserved_margin(mut self, margin: u64) -> Self {
        self.reserved_margin = margin;
        self
    }

    /// Returns false when `current + reserved_margin > budget`.
    #[must_use]
    pub fn may_expand(&self) -> bool {
        let current = self.probe.current_resident_memory();
        current.saturating_add(self.reserved_margin) <= self.budget
    }

    /// The configured budget in bytes.
    #[must_use]
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// The configured reserved margin in bytes.
    #[must_use]
    pub fn reserved_margin(&self) -> u64 {
        self.reserved_margin
    }

    /// Get the probe.
    pub fn probe(&self) -> &P {
        &self.probe
    }
}
