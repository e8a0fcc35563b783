// # System Resolver
//
// Resolves the currently published addresses of the maintained hostname
// through the platform resolver (nsswitch / resolv.conf), the same source
// of truth every other client on the network sees.
//
// No DNS wire protocol lives here; the lookup is delegated to the
// operating system via tokio's resolver thread pool. AAAA answers are
// dropped from the result because only A records participate in the
// update decision.

use std::collections::BTreeSet;
use std::net::{Ipv4Addr, SocketAddr};

use dynup_core::traits::RecordResolver;
use dynup_core::{Error, Result};
use tracing::debug;

/// Record resolver backed by the platform resolver
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl RecordResolver for SystemResolver {
    async fn resolve(&self, domain: &str) -> Result<BTreeSet<Ipv4Addr>> {
        // lookup_host wants host:port; the port is never used
        let addrs = tokio::net::lookup_host((domain, 0))
            .await
            .map_err(|e| Error::resolution(format!("lookup for {domain} failed: {e}")))?;

        let published: BTreeSet<Ipv4Addr> = addrs
            .filter_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(*v4.ip()),
                SocketAddr::V6(_) => None,
            })
            .collect();

        debug!(domain, count = published.len(), "resolved published A records");
        Ok(published)
    }
}
