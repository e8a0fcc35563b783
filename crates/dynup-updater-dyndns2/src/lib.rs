// # dyndns2 Record Updater
//
// This crate pushes record updates over the dyndns2 wire protocol, the
// de-facto standard spoken by Google Domains, DynDNS, No-IP and others:
//
// - `POST <endpoint>?hostname=<name>&myip=<ip>` with HTTP Basic credentials
// - plain-text response: `good <ip>` (accepted), `nochg <ip>` (already
//   current), or an error keyword such as `badauth`, `nohost`, `911`
//
// ## Responsibility boundary
//
// One API call per invocation, bounded by a 30-second timeout so a cycle
// can never hang indefinitely. No retries, no backoff, no caching; the
// cycle orchestrator owns failure policy. Whatever the provider answers
// is surfaced verbatim in the error so operators see exactly what was
// said, never a swallowed body.
//
// ## Security
//
// The password never appears in logs or Debug output.

use std::net::Ipv4Addr;
use std::time::Duration;

use dynup_core::config::Credentials;
use dynup_core::traits::{RecordUpdater, UpdateOutcome};
use dynup_core::{Error, Result};
use tracing::debug;

/// Default provider update endpoint
pub const DEFAULT_UPDATE_URL: &str = "https://domains.google.com/nic/update";

/// Request timeout for update calls
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// dyndns2-protocol record updater
pub struct DynDns2Updater {
    /// Provider update URL
    endpoint: String,

    /// HTTP Basic username
    username: String,

    /// HTTP Basic password. Never log this value.
    password: String,

    /// HTTP client for update requests
    client: reqwest::Client,
}

// Custom Debug implementation that hides the password
impl std::fmt::Debug for DynDns2Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynDns2Updater")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

impl DynDns2Updater {
    /// Create an updater against the default provider endpoint
    pub fn new(credentials: &Credentials) -> Result<Self> {
        Self::with_endpoint(DEFAULT_UPDATE_URL, credentials)
    }

    /// Create an updater against a specific endpoint URL
    pub fn with_endpoint(endpoint: impl Into<String>, credentials: &Credentials) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            endpoint: endpoint.into(),
            username: credentials.username.clone(),
            password: credentials.password.clone(),
            client,
        })
    }
}

#[async_trait::async_trait]
impl RecordUpdater for DynDns2Updater {
    async fn push(&self, hostname: &str, ip: Ipv4Addr) -> Result<UpdateOutcome> {
        debug!(hostname, %ip, endpoint = %self.endpoint, "pushing record update");

        let myip = ip.to_string();
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("hostname", hostname), ("myip", myip.as_str())])
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| Error::network(format!("update request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("failed to read update response: {e}")))?;

        classify_response(status, &body, ip)
    }
}

/// Classify a dyndns2 update response
///
/// Pure over (status, body, submitted address):
/// - `good <ip>` / `nochg <ip>`, for the submitted address only, on a 2xx
///   status → success
/// - a 401/403 status, or the protocol's `badauth` keyword, → an
///   authentication error so operators can tell credential problems from
///   everything else
/// - anything else → a provider error carrying the raw status and body
pub fn classify_response(status: u16, body: &str, submitted: Ipv4Addr) -> Result<UpdateOutcome> {
    if status == 401 || status == 403 {
        return Err(Error::auth(format!(
            "provider rejected credentials (status {status}, body {:?})",
            body.trim()
        )));
    }

    let reply = body.trim();
    if (200..300).contains(&status) {
        if reply == format!("good {submitted}") {
            return Ok(UpdateOutcome::Updated { new_ip: submitted });
        }
        if reply == format!("nochg {submitted}") {
            return Ok(UpdateOutcome::Unchanged {
                current_ip: submitted,
            });
        }
        if reply == "badauth" {
            return Err(Error::auth(
                "provider answered 'badauth', check the configured credentials",
            ));
        }
    }

    Err(Error::provider(status, body))
}
