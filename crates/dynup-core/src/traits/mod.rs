//! Core traits for the dynup system
//!
//! This module defines the abstract interfaces the cycle orchestrator
//! depends on. One implementation of each lives in its own crate:
//!
//! - [`IpSource`]: discover the current public IPv4 address
//! - [`RecordResolver`]: resolve the currently published A records
//! - [`RecordUpdater`]: push an authenticated update to the provider

pub mod ip_source;
pub mod record_resolver;
pub mod record_updater;

pub use ip_source::IpSource;
pub use record_resolver::RecordResolver;
pub use record_updater::{RecordUpdater, UpdateOutcome};
