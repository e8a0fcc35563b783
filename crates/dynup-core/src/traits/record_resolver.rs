// # Record Resolver Trait
//
// Defines the interface for reading the currently published DNS state of
// the maintained hostname.
//
// ## Implementations
//
// - System resolver: `dynup-resolver-sys` crate

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for published-record resolution implementations
///
/// Only A records participate in the update decision. A name that resolves
/// exclusively to AAAA records yields an empty set, which the decider
/// treats as "record missing, update needed" rather than an error.
#[async_trait]
pub trait RecordResolver: Send + Sync {
    /// Resolve the IPv4 addresses currently published for `domain`
    ///
    /// # Returns
    ///
    /// - `Ok(set)`: every A-record address found (possibly empty)
    /// - `Err(Error::Resolution)`: lookup failure (NXDOMAIN, timeout,
    ///   server failure)
    async fn resolve(&self, domain: &str) -> Result<BTreeSet<Ipv4Addr>>;
}
