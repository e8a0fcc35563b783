//! Test doubles and common utilities for cycle contract tests
//!
//! These doubles record every call so tests can assert on exactly how many
//! network operations a cycle performed, without any real I/O.

use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dynup_core::error::{Error, Result};
use dynup_core::traits::{IpSource, RecordResolver, RecordUpdater, UpdateOutcome};
use dynup_core::{Credentials, UpdaterConfig};

/// Minimal valid configuration for cycle construction
pub fn minimal_config(domain: &str) -> UpdaterConfig {
    let mut config = UpdaterConfig {
        domain: domain.to_string(),
        credentials: Credentials {
            username: "user".to_string(),
            password: "secret".to_string(),
        },
        sleep_time: 1,
    };
    config.normalize();
    config
}

/// An IpSource that returns a fixed address (or a fixed failure)
pub struct MockIpSource {
    ip: Option<Ipv4Addr>,
    call_count: Arc<AtomicUsize>,
}

impl MockIpSource {
    pub fn new(ip: Ipv4Addr) -> Self {
        Self {
            ip: Some(ip),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A source whose discovery always fails with a network error
    pub fn failing() -> Self {
        Self {
            ip: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Create a double that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            ip: other.ip,
            call_count: Arc::clone(&other.call_count),
        }
    }
}

#[async_trait::async_trait]
impl IpSource for MockIpSource {
    async fn current(&self) -> Result<Ipv4Addr> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.ip
            .ok_or_else(|| Error::network("simulated echo-service timeout"))
    }
}

/// A RecordResolver that returns a fixed published set (or a fixed failure)
pub struct MockResolver {
    published: Option<BTreeSet<Ipv4Addr>>,
    call_count: Arc<AtomicUsize>,
}

impl MockResolver {
    pub fn new(published: impl IntoIterator<Item = Ipv4Addr>) -> Self {
        Self {
            published: Some(published.into_iter().collect()),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A resolver whose lookup always fails
    pub fn failing() -> Self {
        Self {
            published: None,
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            published: other.published.clone(),
            call_count: Arc::clone(&other.call_count),
        }
    }
}

#[async_trait::async_trait]
impl RecordResolver for MockResolver {
    async fn resolve(&self, _domain: &str) -> Result<BTreeSet<Ipv4Addr>> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.published
            .clone()
            .ok_or_else(|| Error::resolution("simulated NXDOMAIN"))
    }
}

/// A RecordUpdater that records every push
pub struct MockUpdater {
    succeed: bool,
    push_count: Arc<AtomicUsize>,
    pushed: Arc<std::sync::Mutex<Vec<(String, Ipv4Addr)>>>,
}

impl MockUpdater {
    pub fn new() -> Self {
        Self {
            succeed: true,
            push_count: Arc::new(AtomicUsize::new(0)),
            pushed: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    /// An updater whose push is always rejected by the provider
    pub fn failing() -> Self {
        Self {
            succeed: false,
            push_count: Arc::new(AtomicUsize::new(0)),
            pushed: Arc::new(std::sync::Mutex::new(Vec::new())),
        }
    }

    pub fn push_count(&self) -> usize {
        self.push_count.load(Ordering::SeqCst)
    }

    /// Every (hostname, ip) pair that was pushed, in order
    pub fn pushed(&self) -> Vec<(String, Ipv4Addr)> {
        self.pushed.lock().unwrap().clone()
    }

    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            succeed: other.succeed,
            push_count: Arc::clone(&other.push_count),
            pushed: Arc::clone(&other.pushed),
        }
    }
}

#[async_trait::async_trait]
impl RecordUpdater for MockUpdater {
    async fn push(&self, hostname: &str, ip: Ipv4Addr) -> Result<UpdateOutcome> {
        self.push_count.fetch_add(1, Ordering::SeqCst);
        self.pushed.lock().unwrap().push((hostname.to_string(), ip));

        if self.succeed {
            Ok(UpdateOutcome::Updated { new_ip: ip })
        } else {
            Err(Error::provider(500, "911"))
        }
    }
}
