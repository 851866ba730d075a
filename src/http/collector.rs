use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::{RequestOutcome, ResultSet};
use crate::error::HttpError;

/// Everything a finished batch produced.
///
/// Every dispatched unit is accounted for exactly once, either as an outcome
/// in `results` or as an entry in `build_failures`.
#[derive(Debug, Default)]
pub struct BatchReport {
    results: ResultSet,
    build_failures: Vec<HttpError>,
}

impl BatchReport {
    #[must_use]
    pub const fn results(&self) -> &ResultSet {
        &self.results
    }

    #[must_use]
    pub fn build_failures(&self) -> &[HttpError] {
        &self.build_failures
    }

    /// Units that finished, whether or not they produced an outcome.
    #[must_use]
    pub fn dispatched(&self) -> usize {
        self.results.len().saturating_add(self.build_failures.len())
    }

    #[must_use]
    pub fn into_parts(self) -> (ResultSet, Vec<HttpError>) {
        (self.results, self.build_failures)
    }
}

pub(super) struct ResultCollector {
    outcome_rx: mpsc::Receiver<RequestOutcome>,
    units: Vec<JoinHandle<Result<(), HttpError>>>,
}

impl ResultCollector {
    pub(super) const fn new(
        outcome_rx: mpsc::Receiver<RequestOutcome>,
        units: Vec<JoinHandle<Result<(), HttpError>>>,
    ) -> Self {
        Self { outcome_rx, units }
    }

    /// Waits for every unit, then drains the outcomes they sent.
    ///
    /// The barrier is the set of join handles, not the outcome count, so a
    /// unit that never sends still releases the batch once it returns.
    pub(super) async fn collect(self) -> BatchReport {
        let Self {
            mut outcome_rx,
            units,
        } = self;

        let mut build_failures = Vec::new();
        for unit in units {
            match unit.await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => build_failures.push(err),
                Err(err) => build_failures.push(HttpError::UnitAborted { source: err }),
            }
        }

        outcome_rx.close();
        let mut outcomes = Vec::new();
        while let Some(outcome) = outcome_rx.recv().await {
            outcomes.push(outcome);
        }

        BatchReport {
            results: ResultSet::from(outcomes),
            build_failures,
        }
    }
}
