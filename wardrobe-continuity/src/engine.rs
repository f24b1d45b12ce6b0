//! Continuity check pipeline
//!
//! Normalize → index → detect (×3) → merge/sort/summarize. Every stage is a
//! total function of its input; the engine has no I/O and keeps no state
//! between calls.

use std::sync::Arc;

use tracing::{debug, info};
use wardrobe_common::{Error, RawTimelineEntry, Result};

use crate::detectors::{standard_detectors, Detector, ScanInput};
use crate::report::{aggregate, ConsistencyReport};

/// Runs the continuity detectors over a timeline snapshot
#[derive(Clone)]
pub struct ContinuityEngine {
    detectors: Vec<Arc<dyn Detector>>,
}

impl Default for ContinuityEngine {
    fn default() -> Self {
        Self {
            detectors: standard_detectors(),
        }
    }
}

impl ContinuityEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with an explicit detector list, run and merged in list order
    pub fn with_detectors(detectors: Vec<Arc<dyn Detector>>) -> Self {
        Self { detectors }
    }

    pub fn detector_names(&self) -> Vec<&'static str> {
        self.detectors.iter().map(|d| d.name()).collect()
    }

    /// Check a timeline snapshot on the calling thread
    ///
    /// Always returns a report; missing fields surface as `missing_data`
    /// issues, never as errors.
    pub fn check(&self, entries: &[RawTimelineEntry]) -> ConsistencyReport {
        let input = self.prepare(entries);
        let report = aggregate(self.detectors.iter().map(|d| d.detect(&input)));
        log_report(&report);
        report
    }

    /// Check a timeline snapshot with each detector on the blocking pool
    ///
    /// Output is identical to [`check`](Self::check): results are merged in
    /// detector order, not completion order. Fails only if a detector task
    /// panics.
    pub async fn check_parallel(&self, entries: &[RawTimelineEntry]) -> Result<ConsistencyReport> {
        let input = Arc::new(self.prepare(entries));

        let handles: Vec<_> = self
            .detectors
            .iter()
            .map(|detector| {
                let detector = Arc::clone(detector);
                let input = Arc::clone(&input);
                tokio::task::spawn_blocking(move || detector.detect(&input))
            })
            .collect();

        let mut groups = Vec::with_capacity(handles.len());
        for (handle, name) in handles.into_iter().zip(self.detector_names()) {
            let issues = handle
                .await
                .map_err(|e| Error::Internal(format!("Detector {} failed: {}", name, e)))?;
            groups.push(issues);
        }

        let report = aggregate(groups);
        log_report(&report);
        Ok(report)
    }

    fn prepare(&self, entries: &[RawTimelineEntry]) -> ScanInput {
        let input = ScanInput::new(entries);
        debug!(
            "Indexed {} of {} timeline entries into {} scene(s)",
            input.index.grouped_entries(),
            input.entries.len(),
            input.index.len()
        );
        input
    }
}

/// Convenience wrapper: check with the standard detectors
pub fn check_continuity(entries: &[RawTimelineEntry]) -> ConsistencyReport {
    ContinuityEngine::default().check(entries)
}

fn log_report(report: &ConsistencyReport) {
    let s = &report.summary;
    info!(
        "Continuity check: total={}, high={}, medium={}, low={}",
        s.total, s.high, s.medium, s.low
    );
}
