//! Record/replay comparison modes
//!
//! - Event level: align the event names of two sequences.
//! - API level: for each matched pair of events, align their API symbols
//!   and keep only pairs that differ.
//!
//! Every pair comparison is independent, so API-level work fans out over
//! rayon when enabled. A failing pair is reported on its own and does not
//! stop the others.

use crate::alignment::{align, AlignError};
use crate::config::AlignConfig;
use crate::report::EditDistanceReport;
use crate::symbol::{api_symbols, event_symbol, event_symbols};
use crate::trace::ExecutionSequence;
use rayon::prelude::*;
use thiserror::Error;

/// Which side of the comparison an event index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Record,
    Replay,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Record => f.write_str("record"),
            Side::Replay => f.write_str("replay"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("Event-level comparison failed: {0}")]
    Events(#[source] AlignError),

    #[error("API comparison failed for pair {idx} ({event}): {source}")]
    ApiPair {
        idx: usize,
        event: String,
        #[source]
        source: AlignError,
    },

    #[error("Pair {idx}: {side} event index {index} out of range ({len} events)")]
    EventOutOfRange {
        idx: usize,
        side: Side,
        index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, ComparisonError>;

/// Outcome of an API-level comparison
#[derive(Debug, Clone, Default)]
pub struct ApiComparison {
    /// Reports for pairs with nonzero distance, in pair order
    pub reports: Vec<EditDistanceReport>,
    /// Pairs that could not be compared
    pub failures: Vec<ComparisonError>,
}

impl ApiComparison {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs comparisons with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    config: AlignConfig,
}

impl Comparator {
    pub fn new(config: AlignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Align the event names of the record and replay sequences
    ///
    /// # Example
    /// ```
    /// use tracealign::comparison::Comparator;
    /// use tracealign::trace::{ExecutionEvent, ExecutionSequence};
    ///
    /// let record = ExecutionSequence::new(vec![
    ///     ExecutionEvent::new("nav", vec![]),
    ///     ExecutionEvent::new("load", vec![]),
    /// ]);
    /// let replay = ExecutionSequence::new(vec![ExecutionEvent::new("nav", vec![])]);
    ///
    /// let report = Comparator::default().compare_events(&record, &replay).unwrap();
    /// assert_eq!(report.value, 1);
    /// assert_eq!(report.op[0].info, "load");
    /// ```
    pub fn compare_events(
        &self,
        record: &ExecutionSequence,
        replay: &ExecutionSequence,
    ) -> Result<EditDistanceReport> {
        let a = event_symbols(record);
        let b = event_symbols(replay);

        let alignment = align(&a, &b, self.config.max_cells).map_err(|e| {
            tracing::warn!("event-level comparison failed: {}", e);
            ComparisonError::Events(e)
        })?;

        tracing::debug!(value = alignment.value, "event-level edit distance");
        Ok(EditDistanceReport::from_alignment(&alignment))
    }

    /// Align API symbols of matched event pairs
    ///
    /// `record_events[k]` is paired with `replay_events[k]`; extra indices
    /// on the longer side are ignored. With both lists empty, events are
    /// paired by position. Pairs with zero distance are dropped.
    pub fn compare_apis(
        &self,
        record: &ExecutionSequence,
        replay: &ExecutionSequence,
        record_events: &[usize],
        replay_events: &[usize],
    ) -> ApiComparison {
        let pairs: Vec<(usize, usize)> = if record_events.is_empty() && replay_events.is_empty() {
            let n = record.len().min(replay.len());
            (0..n).map(|i| (i, i)).collect()
        } else {
            record_events
                .iter()
                .copied()
                .zip(replay_events.iter().copied())
                .collect()
        };

        let compare = |(idx, &(r, p)): (usize, &(usize, usize))| {
            self.compare_pair(record, replay, idx, r, p)
        };

        let outcomes: Vec<Result<Option<EditDistanceReport>>> = if self.config.parallel {
            pairs.par_iter().enumerate().map(compare).collect()
        } else {
            pairs.iter().enumerate().map(compare).collect()
        };

        let mut comparison = ApiComparison::default();
        for outcome in outcomes {
            match outcome {
                Ok(Some(report)) => comparison.reports.push(report),
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("skipping event pair: {}", e);
                    comparison.failures.push(e);
                }
            }
        }

        tracing::debug!(
            pairs = pairs.len(),
            differing = comparison.reports.len(),
            failed = comparison.failures.len(),
            "API-level comparison finished"
        );
        comparison
    }

    fn compare_pair(
        &self,
        record: &ExecutionSequence,
        replay: &ExecutionSequence,
        idx: usize,
        record_index: usize,
        replay_index: usize,
    ) -> Result<Option<EditDistanceReport>> {
        let record_event = record
            .events
            .get(record_index)
            .ok_or(ComparisonError::EventOutOfRange {
                idx,
                side: Side::Record,
                index: record_index,
                len: record.len(),
            })?;
        let replay_event = replay
            .events
            .get(replay_index)
            .ok_or(ComparisonError::EventOutOfRange {
                idx,
                side: Side::Replay,
                index: replay_index,
                len: replay.len(),
            })?;

        let threshold = self.config.hash_threshold;
        let a = api_symbols(record_event, threshold);
        let b = api_symbols(replay_event, threshold);
        let event = event_symbol(record_event);

        let alignment = match align(&a, &b, self.config.max_cells) {
            Ok(alignment) => alignment,
            Err(source) => return Err(ComparisonError::ApiPair { idx, event, source }),
        };

        if alignment.is_identical() {
            return Ok(None);
        }

        tracing::trace!(idx, value = alignment.value, "API pair differs");
        Ok(Some(
            EditDistanceReport::from_alignment(&alignment).with_event(event, idx),
        ))
    }
}
