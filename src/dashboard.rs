//! Runs every binder against the page once the surface is ready

use log::{error, info, warn};
use tokio::sync::oneshot;

use crate::binders::{self, BindError};
use crate::models::{Alert, Configuration, Reading};
use crate::surface::Surface;

/// Everything the page shows, built once before the first render
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub current: Reading,
    pub configuration: Configuration,
    pub alerts: Vec<Alert>,
    pub readings: Vec<Reading>,
}

/// Which binders wrote to the page and which were skipped
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderReport {
    pub rendered: Vec<&'static str>,
    pub skipped: Vec<BindError>,
}

impl RenderReport {
    fn record(&mut self, name: &'static str, result: Result<(), BindError>) {
        match result {
            Ok(()) => self.rendered.push(name),
            Err(e) => self.skipped.push(e),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Run all four binders; a failing binder never stops the others
pub fn render_all<S: Surface + ?Sized>(surface: &mut S, data: &DashboardData) -> RenderReport {
    let mut report = RenderReport::default();

    report.record(
        binders::current::NAME,
        binders::current::render(surface, &data.current),
    );
    report.record(
        binders::config::NAME,
        binders::config::render(surface, &data.configuration),
    );
    report.record(
        binders::alerts::NAME,
        binders::alerts::render(surface, &data.alerts),
    );
    report.record(
        binders::readings::NAME,
        binders::readings::render(surface, &data.readings),
    );

    if report.is_complete() {
        info!("Rendered all {} dashboard sections", report.rendered.len());
    } else {
        warn!(
            "Rendered {} dashboard sections, skipped {}",
            report.rendered.len(),
            report.skipped.len()
        );
    }

    report
}

/// Wait for the surface-ready signal, then render the dashboard onto it
///
/// Returns `None` if the sender was dropped before delivering a surface.
pub async fn on_surface_ready<S: Surface>(
    ready: oneshot::Receiver<S>,
    data: &DashboardData,
) -> Option<(S, RenderReport)> {
    let mut surface = match ready.await {
        Ok(surface) => surface,
        Err(e) => {
            error!("Surface was never delivered: {}", e);
            return None;
        }
    };

    info!("Surface ready, rendering dashboard");
    let report = render_all(&mut surface, data);
    Some((surface, report))
}
