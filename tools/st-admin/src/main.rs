//! ST-Admin: Server-Time host CLI

use std::time::Duration;

use clap::Parser;
use st_01_time_source::{TimeApiGateway, TimeSourceApi};
use st_telemetry::{init_logging, TelemetryConfig};
use tokio::sync::watch;
use tracing::{error, info};

use st_admin::{is_cancelled, App, Args, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if args.debug_ticker {
        telemetry = telemetry.with_log_level("info,st_01_time_source=debug");
    }
    init_logging(&telemetry)?;

    if args.demo {
        run(App::demo(&args)?, &args).await
    } else {
        run(App::connect(&args)?, &args).await
    }
}

async fn run<G: TimeApiGateway + 'static>(app: App<G>, args: &Args) -> anyhow::Result<()> {
    let (stop_tx, stop_rx) = watch::channel(false);

    // Ctrl-C cancels a pending fetch retry loop and stops `watch`.
    let source = app.source();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("[st-admin] Interrupted, shutting down");
            source.shutdown();
            stop_tx.send_replace(true);
        }
    });

    match app.fetch().await {
        Ok(()) => {}
        Err(e) if is_cancelled(&e) => {
            info!("[st-admin] Interrupted before server time was available");
            return Ok(());
        }
        Err(e) => {
            error!("[st-admin] {:#}", e);
            return Err(e);
        }
    }

    if args.debug_ticker {
        let source = app.source();
        tokio::spawn(async move { source.run_debug_ticker(Duration::from_secs(1)).await });
    }

    match args.command() {
        Command::Watch => app.watch(args.refresh_interval(), stop_rx).await,
        command => println!("{}", app.execute(command)?),
    }

    app.shutdown();
    Ok(())
}
