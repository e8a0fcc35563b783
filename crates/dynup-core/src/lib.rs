// # dynup-core
//
// Core library for the dynup dynamic-DNS updater.
//
// ## Architecture Overview
//
// This library provides everything except the network edges:
// - **IpSource**: Trait for discovering the current public IPv4 address
// - **RecordResolver**: Trait for resolving the currently published A records
// - **RecordUpdater**: Trait for pushing an authenticated update to the provider
// - **UpdateCycle**: Orchestrator that sequences discover → resolve → decide → update
//
// ## Design Principles
//
// 1. **Separation of Concerns**: the cycle owns sequencing and failure policy;
//    the edge crates own wire formats and nothing else
// 2. **Library-First**: the daemon binary is a thin shell over this crate
// 3. **Failure Absorption**: no single failed cycle may terminate the process;
//    every error below the startup boundary becomes a logged cycle outcome

pub mod config;
pub mod cycle;
pub mod error;
pub mod traits;

// Re-export core types for convenience
pub use config::{Credentials, UpdaterConfig};
pub use cycle::{CycleOutcome, UpdateCycle, needs_update};
pub use error::{Error, Result};
pub use traits::{IpSource, RecordResolver, RecordUpdater, UpdateOutcome};
