mod cli;
mod logging;
mod poller;

use anyhow::{Context, Result};
use pacer_core::{Worker, WorkerConfig, WorkerLoop};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::poller::DirectoryPoller;

#[tokio::main]
async fn main() {
    if let Err(err) = run_main().await {
        eprintln!("pacer error: {err:?}");
        std::process::exit(1);
    }
}

async fn run_main() -> Result<()> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;

    let config = WorkerConfig {
        default_delay: args.default_delay,
    };
    config.validate()?;

    let cancel = CancellationToken::new();

    // Ctrl-C → graceful shutdown
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "failed to listen for Ctrl+C");
                return;
            }
            info!("Ctrl+C received, stopping");
            cancel.cancel();
        });
    }

    let poller = DirectoryPoller::new(args.path, args.idle_delay, args.busy_delay);

    // setup / teardown はループの外で呼ぶ
    poller.setup(&cancel).await.context("setup failed")?;

    let worker_loop = WorkerLoop::builder().name("directory-poller").build();
    worker_loop
        .run(&poller, config.default_delay, &cancel)
        .await;

    if let Err(err) = poller.teardown(&cancel).await {
        warn!(error = %err, "teardown failed");
    }

    Ok(())
}
