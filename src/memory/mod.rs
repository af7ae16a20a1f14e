//! Memory governor for bounded search.
//!
//! ## Overview
//!
//! Every strategy asks the governor before generating a successor. The
//! governor reads the current resident memory from a `MemoryProbe` and
//! vetoes the expansion when `current + reserved_margin > budget`.
//!
//! A veto is a hard stop: the strategy returns the empty action sequence
//! immediately, with no retry and no partial path.
//!
//! ## Usage
//!
//! ```rust
//! use freecell_search::memory::{FixedProbe, MemoryGovernor};
//!
//! let governor = MemoryGovernor::with_probe(FixedProbe(10), 100).with_reserved_margin(50);
//! assert!(governor.may_expand());
//!
//! let tight = MemoryGovernor::with_probe(FixedProbe(60), 100).with_reserved_margin(50);
//! assert!(!tight.may_expand());
//! ```

pub mod governor;
pub mod probe;

pub use governor::{MemoryGovernor, DEFAULT_RESERVED_MARGIN};
pub use probe::{FixedProbe, MemoryProbe, ProcessMemoryProbe};
