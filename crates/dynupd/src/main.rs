// # dynupd - dynamic-DNS updater daemon
//
// Thin integration layer only. The daemon is responsible for:
// 1. Parsing command-line flags
// 2. Loading and validating the JSON configuration file
// 3. Initializing tracing
// 4. Wiring the network edges into the update cycle and running it
//
// All update logic lives in dynup-core; a configuration problem is the
// only thing that may terminate this process with an error before the
// polling loop starts, and OS signals are the only thing that stops it
// afterwards.
//
// ## Configuration
//
// A JSON file (default `/etc/dynupd/config.json`):
//
// ```json
// {
//     "Domain": "home.example.com",
//     "Credentials": { "Username": "generated", "Password": "generated" },
//     "SleepTime": 5
// }
// ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use dynup_core::{UpdateCycle, UpdaterConfig};
use dynup_ip_http::HttpIpSource;
use dynup_resolver_sys::SystemResolver;
use dynup_updater_dyndns2::DynDns2Updater;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// These codes follow systemd conventions:
/// - 0: Clean shutdown (signal received between cycles)
/// - 1: Configuration or startup error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum DaemonExitCode {
    CleanShutdown = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<DaemonExitCode> for ExitCode {
    fn from(code: DaemonExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Keep a hostname's DNS record pointed at this network's public IPv4 address
#[derive(Debug, Parser)]
#[command(name = "dynupd", version)]
struct Args {
    /// Path to the JSON configuration file
    #[arg(long, default_value = "/etc/dynupd/config.json")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.log_level)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return DaemonExitCode::ConfigError.into();
    }

    info!(path = %args.config.display(), "loading configuration file");
    let config = match UpdaterConfig::load(&args.config) {
        Ok(config) => config,
        Err(e) => {
            error!(path = %args.config.display(), error = %e, "configuration error");
            return DaemonExitCode::ConfigError.into();
        }
    };
    info!(
        domain = %config.domain,
        sleep_mins = config.sleep_time,
        "found valid configuration"
    );

    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!(error = %e, "failed to create tokio runtime");
            return DaemonExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run_daemon(config).await {
            Ok(()) => DaemonExitCode::CleanShutdown,
            Err(e) => {
                error!(error = %e, "daemon error");
                DaemonExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Wire the network edges into the update cycle and run it until a signal
async fn run_daemon(config: UpdaterConfig) -> Result<()> {
    let ip_source = HttpIpSource::new()?;
    let resolver = SystemResolver::new();
    let updater = DynDns2Updater::new(&config.credentials)?;

    let cycle = UpdateCycle::new(
        Box::new(ip_source),
        Box::new(resolver),
        Box::new(updater),
        config,
    )?;

    cycle.run().await?;
    Ok(())
}
