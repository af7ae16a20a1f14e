//! Rule-engine interface consumed by the search core.
//!
//! Games implement `Configuration` (and `Fingerprint`) to expose:
//! - Legal actions for a configuration, in a deterministic order
//! - How an action produces the next configuration
//! - The win condition
//!
//! The search strategies call into these traits but never interpret
//! game-specific concepts directly.

pub mod configuration;

pub use configuration::{replay, Configuration};
