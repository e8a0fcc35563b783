// # Record Updater Trait
//
// Defines the interface for pushing an authenticated record update to the
// dynamic-DNS provider.
//
// ## Implementations
//
// - dyndns2 wire protocol: `dynup-updater-dyndns2` crate
//
// ## Responsibility boundary
//
// An updater executes one API call per invocation and classifies the
// response. It must not retry, back off, or schedule anything; failure
// policy is owned by the cycle orchestrator, which logs the error and
// waits for the next interval.

use std::net::Ipv4Addr;

use async_trait::async_trait;

use crate::error::Result;

/// Result of a successful record update call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The provider accepted the new address (`good <ip>`)
    Updated {
        /// The address now published
        new_ip: Ipv4Addr,
    },
    /// The provider already had this address (`nochg <ip>`)
    Unchanged {
        /// The address already published
        current_ip: Ipv4Addr,
    },
}

/// Trait for provider update implementations
#[async_trait]
pub trait RecordUpdater: Send + Sync {
    /// Push `ip` as the new address for `hostname`
    ///
    /// # Returns
    ///
    /// - `Ok(UpdateOutcome)`: the provider acknowledged the submitted address
    /// - `Err(Error::Network)`: transport failure before a response arrived
    /// - `Err(Error::Authentication)`: the provider rejected the credentials
    /// - `Err(Error::Provider)`: any other refusal, with raw status and body
    async fn push(&self, hostname: &str, ip: Ipv4Addr) -> Result<UpdateOutcome>;
}
