//! Display-ready projection of edit scripts
//!
//! The record layout (`entry`, `operation`, `info`, `index`) is what table
//! views render directly.

use crate::alignment::{Alignment, EditOperation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation label shown to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    #[serde(rename = "sub")]
    Substitute,
    #[serde(rename = "remove")]
    Remove,
    #[serde(rename = "insert")]
    Insert,
}

impl OperationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Substitute => "sub",
            OperationKind::Remove => "remove",
            OperationKind::Insert => "insert",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl<S> From<&EditOperation<S>> for OperationKind {
    fn from(op: &EditOperation<S>) -> Self {
        match op {
            EditOperation::Substitute { .. } => OperationKind::Substitute,
            EditOperation::Remove { .. } => OperationKind::Remove,
            EditOperation::Insert { .. } => OperationKind::Insert,
        }
    }
}

/// One row of a rendered edit script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    /// Position of the operation within the script
    pub entry: usize,
    pub operation: OperationKind,
    pub info: String,
    /// Position within the aligned sequence
    pub index: usize,
}

/// Human-readable description of one operation
pub fn describe<S: fmt::Display>(op: &EditOperation<S>) -> String {
    match op {
        EditOperation::Substitute { from, to, .. } => format!("{}<-->{}", from, to),
        EditOperation::Remove { symbol, .. } | EditOperation::Insert { symbol, .. } => {
            symbol.to_string()
        }
    }
}

/// Convert an edit script into display records
///
/// # Example
/// ```
/// use tracealign::alignment::EditOperation;
/// use tracealign::report::{format_script, OperationKind};
///
/// let script = vec![EditOperation::Substitute { from: "x", to: "y", position: 0 }];
/// let records = format_script(&script);
///
/// assert_eq!(records[0].operation, OperationKind::Substitute);
/// assert_eq!(records[0].info, "x<-->y");
/// ```
pub fn format_script<S: fmt::Display>(script: &[EditOperation<S>]) -> Vec<DisplayRecord> {
    script
        .iter()
        .enumerate()
        .map(|(entry, op)| DisplayRecord {
            entry,
            operation: OperationKind::from(op),
            info: describe(op),
            index: op.position(),
        })
        .collect()
}

/// Edit distance result for one comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditDistanceReport {
    pub value: usize,
    pub op: Vec<DisplayRecord>,
    /// Record-side event name, set for API-level comparisons
    #[serde(
        rename = "ExecutionEvent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub execution_event: Option<String>,
    /// Pair index, set for API-level comparisons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idx: Option<usize>,
}

impl EditDistanceReport {
    pub fn from_alignment<S: fmt::Display>(alignment: &Alignment<S>) -> Self {
        Self {
            value: alignment.value,
            op: format_script(&alignment.script),
            execution_event: None,
            idx: None,
        }
    }

    /// Tag the report with the event pair it came from
    pub fn with_event(mut self, name: impl Into<String>, idx: usize) -> Self {
        self.execution_event = Some(name.into());
        self.idx = Some(idx);
        self
    }
}
