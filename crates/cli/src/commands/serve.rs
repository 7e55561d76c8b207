//! genesis serve command

use std::time::Duration;

use clap::Args;
use genesis_domain::service::join_queue::ServerJoinQueueManager;
use shared::ServerConfig;
use tracing::info;

use crate::server::Server;

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Override the join-queue status interval, in seconds
    #[arg(long)]
    pub status_interval: Option<u64>,
}

impl ServeCommand {
    /// Bootstrap the server and report join-queue status until Ctrl-C
    pub async fn run(&self, config: ServerConfig) -> anyhow::Result<()> {
        let interval = self
            .status_interval
            .unwrap_or(config.join_queue.status_interval_secs)
            .max(1);

        let server = Server::bootstrap(config)?;
        server.start()?;
        let gate = server.gate();

        info!(
            enabled = gate.is_enabled(),
            interval_secs = interval,
            "serving, press Ctrl-C to stop"
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(interval));
        let shutdown = tokio::signal::ctrl_c();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let status = gate.status();
                    info!(
                        enabled = status.enabled,
                        queued = status.queued,
                        connected = status.connected,
                        "join queue status"
                    );
                }
                res = &mut shutdown => {
                    res?;
                    info!("shutting down");
                    break;
                }
            }
        }

        Ok(())
    }
}
