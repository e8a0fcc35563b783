// # IP Source Trait
//
// Defines the interface for discovering the caller's public IPv4 address.
//
// ## Implementations
//
// - HTTP echo service: `dynup-ip-http` crate
//
// ## Responsibility boundary
//
// An IP source performs exactly one outbound request per call and reports
// what it saw. It must not retry, cache across cycles, or decide whether a
// DNS update is needed; retries happen implicitly when the orchestrator
// schedules the next cycle.

use std::net::Ipv4Addr;

use async_trait::async_trait;

use crate::error::Result;

/// Trait for public-IP discovery implementations
///
/// Implementations must be thread-safe and usable across async tasks.
#[async_trait]
pub trait IpSource: Send + Sync {
    /// Discover the current public IPv4 address
    ///
    /// # Returns
    ///
    /// - `Ok(Ipv4Addr)`: the address the outside world currently sees
    /// - `Err(Error::Network)`: connect/timeout/non-2xx failure
    /// - `Err(Error::Parse)`: the service answered with something that is
    ///   not an IPv4 literal
    async fn current(&self) -> Result<Ipv4Addr>;
}
