use super::build_failover_check;
use crate::WatchArgs;
use crate::error::{Error, Result};

use std::process::ExitCode;
use std::time::Duration;

use tokio::signal::unix::{Signal, SignalKind, signal};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

pub async fn watch(args: WatchArgs) -> Result<ExitCode> {
    let failover_check = build_failover_check(args.failover).await?;

    let mut shutdown = Shutdown::new()?;

    let mut interval = tokio::time::interval(Duration::from_secs(args.interval_secs.max(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(
        interval_secs = args.interval_secs,
        domain = %failover_check.config().domain_name,
        "watching regional health"
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let report = failover_check.run().await;
                println!("{}", serde_json::to_string(&report)?);

                if !report.is_completed() {
                    warn!("failover check failed, retrying on next tick");
                }
            }
            name = shutdown.recv() => {
                info!("received {name}, stopping");
                break;
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Termination signals, registered once so that a signal arriving while a
/// check is running is still seen on the next loop pass.
struct Shutdown {
    sigint: Signal,
    sigterm: Signal,
}

impl Shutdown {
    fn new() -> Result<Self> {
        let sigint = signal(SignalKind::interrupt())
            .map_err(|e| Error::Io("failed to create SIGINT signal", e))?;
        let sigterm = signal(SignalKind::terminate())
            .map_err(|e| Error::Io("failed to create SIGTERM signal", e))?;

        Ok(Self { sigint, sigterm })
    }

    async fn recv(&mut self) -> &'static str {
        tokio::select! {
            _ = self.sigint.recv() => "SIGINT",
            _ = self.sigterm.recv() => "SIGTERM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::process::Command;

    use tokio::time::timeout;

    #[tokio::test]
    async fn test_sigint_during_check_is_not_lost() {
        let mut shutdown = Shutdown::new().unwrap();

        // Delivered while nothing is waiting on the signal, as when a check
        // is in flight.
        let status = Command::new("kill")
            .args(["-INT", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());
        tokio::time::sleep(Duration::from_millis(50)).await;

        let name = timeout(Duration::from_secs(5), shutdown.recv())
            .await
            .unwrap();
        assert_eq!(name, "SIGINT");
    }
}
