use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info};

use crate::domain::RequestDescriptor;

use super::collector::{BatchReport, ResultCollector};
use super::worker::run_unit;

/// Runs one batch: `count` parallel requests, joined before returning.
///
/// Per-request failures never abort the batch. Transport failures are
/// outcomes with the sentinel status; units that could not build a request
/// are listed in [`BatchReport::build_failures`].
pub async fn run_batch(descriptor: RequestDescriptor) -> BatchReport {
    let descriptor = Arc::new(descriptor);
    info!(
        "Dispatching {} {} request(s) to {}",
        descriptor.count(),
        descriptor.method(),
        descriptor.url()
    );

    let report = dispatch(&descriptor).collect().await;

    for failure in report.build_failures() {
        error!("{}", failure);
    }
    info!(
        "Done processing requests: {} outcome(s), {} build failure(s)",
        report.results().len(),
        report.build_failures().len()
    );
    report
}

/// Spawns one task per repetition. No pool, no cap: `count` is the
/// parallelism.
pub(super) fn dispatch(descriptor: &Arc<RequestDescriptor>) -> ResultCollector {
    let count = descriptor.count();
    // Sized so that no unit ever waits on send.
    let (outcome_tx, outcome_rx) = mpsc::channel(count.max(1));

    let units = (0..count)
        .map(|unit| {
            let descriptor = Arc::clone(descriptor);
            let outcome_tx = outcome_tx.clone();
            tokio::spawn(run_unit(unit, descriptor, outcome_tx))
        })
        .collect();
    drop(outcome_tx);

    ResultCollector::new(outcome_rx, units)
}
