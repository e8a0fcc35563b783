// # HTTP IP Source
//
// This crate discovers the caller's public IPv4 address by asking an
// external echo service that replies with the observed client address as
// a plain-text body.
//
// ## Behavior
//
// One GET per call, bounded by a request timeout. The body is trimmed and
// parsed as a dotted-quad IPv4 literal; anything else (including an IPv6
// literal) is a parse error. No retries here: a failed discovery aborts
// the current cycle and the orchestrator tries again next interval.

use std::net::Ipv4Addr;
use std::time::Duration;

use dynup_core::traits::IpSource;
use dynup_core::{Error, Result};
use tracing::debug;

/// Default IP echo endpoint (returns the bare address as text/plain)
pub const DEFAULT_ECHO_URL: &str = "https://api.ipify.org";

/// Request timeout for the echo service
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP-based public-IP discoverer
pub struct HttpIpSource {
    /// Echo service URL
    url: String,

    /// HTTP client, shared across cycles
    client: reqwest::Client,
}

impl HttpIpSource {
    /// Create a source against the default echo endpoint
    pub fn new() -> Result<Self> {
        Self::with_url(DEFAULT_ECHO_URL)
    }

    /// Create a source against a specific echo endpoint
    pub fn with_url(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl IpSource for HttpIpSource {
    async fn current(&self) -> Result<Ipv4Addr> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::network(format!("request to {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::network(format!(
                "echo service {} answered {status}",
                self.url
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("failed to read echo response: {e}")))?;

        let ip: Ipv4Addr = body
            .trim()
            .parse()
            .map_err(|_| Error::parse(format!("not an IPv4 literal: {:?}", body.trim())))?;

        debug!(%ip, url = %self.url, "echo service reported public address");
        Ok(ip)
    }
}
