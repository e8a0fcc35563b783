//! Update-decision cycle
//!
//! The UpdateCycle is responsible for:
//! - Discovering the current public IPv4 address via IpSource
//! - Resolving the published record via RecordResolver
//! - Deciding whether the record is stale (pure, no I/O)
//! - Pushing an authenticated update via RecordUpdater
//!
//! ## Cycle Flow
//!
//! ```text
//! ┌──────┐   ┌─────────────┐   ┌───────────┐   ┌──────────┐
//! │ Idle │──▶│ Discovering │──▶│ Resolving │──▶│ Deciding │
//! └──────┘   └─────────────┘   └───────────┘   └──────────┘
//!     ▲             │                │               │
//!     │             ▼                ▼          ┌────┴──────┐
//!     │      (failure: log,   (failure: log,    ▼           ▼
//!     │       abort cycle)     abort cycle)  Updating    Skipping
//!     │             │                │          │           │
//!     └─────────────┴────────────────┴──────────┴───────────┘
//!                     sleep poll interval, repeat
//! ```
//!
//! Every path returns to Idle. A failed discovery, resolution, or update
//! aborts the current cycle only; the process keeps running and tries
//! again after the configured interval. Shutdown is observed exclusively
//! between cycles, never by aborting an in-flight network call.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;

use tracing::{debug, error, info, warn};

use crate::config::UpdaterConfig;
use crate::error::Result;
use crate::traits::{IpSource, RecordResolver, RecordUpdater, UpdateOutcome};

/// Outcome of one complete cycle
///
/// Transient: consumed for logging within the same cycle and discarded
/// before the next one starts. Nothing survives a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Discovered address already published, no request issued
    NoUpdateNeeded,

    /// Provider acknowledged the new address
    UpdateSucceeded,

    /// Update was attempted and rejected or lost
    UpdateFailed(String),

    /// Public-IP discovery failed; no lookup and no update attempted
    DiscoveryFailed(String),

    /// DNS lookup failed; no update attempted
    ResolutionFailed(String),
}

/// Decide whether the published record is stale
///
/// Pure membership test, value equality only. An empty published set means
/// the record is missing entirely, which always warrants an update.
pub fn needs_update(discovered: Ipv4Addr, published: &BTreeSet<Ipv4Addr>) -> bool {
    !published.contains(&discovered)
}

/// Update-cycle orchestrator
///
/// Owns the immutable configuration and the three collaborators for the
/// lifetime of the process, and sequences them strictly: one cycle runs to
/// completion (or to its first failure) before the next is scheduled. There
/// is exactly one logical worker, so no locking is needed anywhere.
pub struct UpdateCycle {
    /// Public-IP discovery
    ip_source: Box<dyn IpSource>,

    /// Published-record lookup
    resolver: Box<dyn RecordResolver>,

    /// Provider update endpoint
    updater: Box<dyn RecordUpdater>,

    /// Immutable configuration, loaded once at startup
    config: UpdaterConfig,
}

impl UpdateCycle {
    /// Create a new update cycle
    ///
    /// Validates the configuration once more so an orchestrator can never
    /// be constructed around an unusable config, regardless of how the
    /// caller obtained it.
    pub fn new(
        ip_source: Box<dyn IpSource>,
        resolver: Box<dyn RecordResolver>,
        updater: Box<dyn RecordUpdater>,
        config: UpdaterConfig,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            ip_source,
            resolver,
            updater,
            config,
        })
    }

    /// Run one discover → resolve → decide → update pass
    ///
    /// Never returns an error: every failure is logged with its cause and
    /// folded into the returned [`CycleOutcome`].
    pub async fn run_once(&self) -> CycleOutcome {
        let discovered = match self.ip_source.current().await {
            Ok(ip) => ip,
            Err(e) => {
                warn!(error = %e, "public IP discovery failed, waiting for next run");
                return CycleOutcome::DiscoveryFailed(e.to_string());
            }
        };
        debug!(ip = %discovered, "discovered public IPv4 address");

        let published = match self.resolver.resolve(&self.config.domain).await {
            Ok(addrs) => addrs,
            Err(e) => {
                warn!(
                    domain = %self.config.domain,
                    error = %e,
                    "could not resolve published record, waiting for next run"
                );
                return CycleOutcome::ResolutionFailed(e.to_string());
            }
        };

        if !needs_update(discovered, &published) {
            info!(
                domain = %self.config.domain,
                ip = %discovered,
                "published record is current, no update needed"
            );
            return CycleOutcome::NoUpdateNeeded;
        }

        info!(
            domain = %self.config.domain,
            ip = %discovered,
            "published record is stale, pushing update"
        );
        match self.updater.push(&self.config.domain, discovered).await {
            Ok(UpdateOutcome::Updated { new_ip }) => {
                info!(domain = %self.config.domain, ip = %new_ip, "record updated");
                CycleOutcome::UpdateSucceeded
            }
            Ok(UpdateOutcome::Unchanged { current_ip }) => {
                info!(
                    domain = %self.config.domain,
                    ip = %current_ip,
                    "provider already had this address"
                );
                CycleOutcome::UpdateSucceeded
            }
            Err(e) => {
                error!(domain = %self.config.domain, error = %e, "record update failed");
                CycleOutcome::UpdateFailed(e.to_string())
            }
        }
    }

    /// Run the polling loop until a shutdown signal arrives
    ///
    /// The first cycle runs immediately at startup; afterwards the loop
    /// sleeps for the configured poll interval between cycles. SIGINT and
    /// SIGTERM are honored only while sleeping, so an in-flight cycle
    /// always finishes before the process exits.
    pub async fn run(&self) -> Result<()> {
        self.run_internal(None).await
    }

    /// Internal run implementation that accepts an optional shutdown signal
    async fn run_internal(
        &self,
        shutdown_rx: Option<tokio::sync::oneshot::Receiver<()>>,
    ) -> Result<()> {
        let interval = self.config.poll_interval();
        info!(
            domain = %self.config.domain,
            interval_mins = self.config.sleep_time,
            "updater started"
        );

        if let Some(mut rx) = shutdown_rx {
            // Test mode: wait for provided shutdown signal
            loop {
                self.run_once().await;

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = &mut rx => {
                        info!("shutdown signal received");
                        break;
                    }
                }
            }
        } else {
            // Production mode: wait for SIGINT/SIGTERM
            loop {
                self.run_once().await;

                tokio::select! {
                    _ = tokio::time::sleep(interval) => {}
                    _ = shutdown_signal() => {
                        info!("shutdown signal received");
                        break;
                    }
                }
            }
        }

        info!("updater stopped");
        Ok(())
    }

    /// Test-only helper to run the loop with a controlled shutdown signal
    ///
    /// Contract tests require deterministic shutdown. Production code
    /// should use [`run`](Self::run), which listens for OS signals.
    pub async fn run_with_shutdown(
        &self,
        shutdown_rx: Option<tokio::sync::oneshot::Receiver<()>>,
    ) -> Result<()> {
        self.run_internal(shutdown_rx).await
    }
}

/// Resolve when SIGTERM or SIGINT is delivered
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigterm = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "failed to install SIGTERM handler, falling back to ctrl-c");
            let _ = tokio::signal::ctrl_c().await;
            return;
        }
    };

    tokio::select! {
        _ = sigterm.recv() => {}
        _ = tokio::signal::ctrl_c() => {}
    }
}

/// Resolve when ctrl-c is delivered (non-Unix fallback)
#[cfg(not(unix))]
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
