mod binders;
mod config;
mod dashboard;
mod models;
mod sample;
mod surface;
mod utils;

use std::future::Future;

use log::{error, info, warn};
use time::OffsetDateTime;
use tokio::sync::oneshot;

use config::DashboardConfig;
use dashboard::on_surface_ready;
use surface::{regions, Document, Surface};
use utils::format_datetime;

/// Build the page, render the sample data onto it and write it to disk
async fn build_dashboard(config: DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut data = sample::dashboard_data();
    data.configuration = config.overrides.apply(data.configuration);

    let (ready_tx, ready_rx) = oneshot::channel();
    if ready_tx.send(Document::dashboard(&config.title)).is_err() {
        return Err("Surface-ready signal has no listener".into());
    }

    let (mut page, report) = on_surface_ready(ready_rx, &data)
        .await
        .ok_or("Dashboard page was not rendered")?;

    for skipped in &report.skipped {
        info!("Skipped section: {}", skipped);
    }

    let generated_at = format_datetime(&OffsetDateTime::now_utc());
    if let Some(footer) = page.region_mut(regions::PIE_GENERADO) {
        footer.set_text(&format!("Generado: {} UTC", generated_at));
    }

    tokio::fs::write(&config.output_path, page.to_html()).await?;
    info!(
        "Dashboard written to {} at {}",
        config.output_path.display(),
        generated_at
    );

    Ok(())
}

/// Run `work` unless a shutdown is requested first
///
/// A dropped shutdown sender is not a request; the work then runs to completion.
async fn run_until_shutdown<F: Future>(
    work: F,
    mut shutdown: oneshot::Receiver<()>,
) -> Option<F::Output> {
    tokio::select! {
        output = work => Some(output),
        Ok(()) = &mut shutdown => None,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp_secs()
        .init();

    // Load configuration
    let config = match DashboardConfig::new() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Handle Ctrl+C gracefully
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                let _ = tx.send(());
            }
            Err(e) => warn!("Failed to listen for Ctrl+C: {}", e),
        }
    });

    match run_until_shutdown(build_dashboard(config), rx).await {
        Some(Ok(())) => info!("Program completed successfully"),
        Some(Err(e)) => {
            error!("Fatal error: {}", e);
            return Err(e);
        }
        None => info!("Program terminated by user. Exiting gracefully."),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn work_finishes_when_shutdown_sender_is_dropped() {
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);

        assert_eq!(run_until_shutdown(async { 42 }, rx).await, Some(42));
    }

    #[tokio::test]
    async fn shutdown_signal_interrupts_pending_work() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        let result = run_until_shutdown(std::future::pending::<()>(), rx).await;
        assert_eq!(result, None);
    }
}
