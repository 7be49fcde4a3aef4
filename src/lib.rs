use clap::Parser;
use std::path::PathBuf;
use tokio::{
    select,
    signal::unix::{SignalKind, signal},
};

pub mod alerts;
pub mod config;
pub mod http;
pub mod metrics;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (YAML). Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on, overrides `http.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides `http.port`
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path the alerts route is mounted under, overrides `alerts.prefix`
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Handle signals
pub fn signal_handler() -> anyhow::Result<()> {
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        select! {
            _ = sigterm.recv() => {
                tracing::info!("SIGTERM received, exiting");
                std::process::exit(0);
            }
            _ = sigint.recv() => {
                tracing::info!("SIGINT received, exiting");
                std::process::exit(0);
            }
        }
    });

    Ok(())
}
