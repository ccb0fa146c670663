//! Record/replay trace model
//!
//! Traces arrive as JSON keyed by frame name, each frame holding the list of
//! execution sequences captured for it:
//!
//! ```json
//! { "main": [ { "ExecutionEvents": [
//!     { "ExecutionEvent": "load", "apis": [["0", "fopen", ["a.txt"]]] }
//! ] } ] }
//! ```
//!
//! Deserialization is lenient: absent fields default and API tuples are kept
//! as raw JSON so the symbol extractor can substitute placeholders.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors loading or indexing a trace file
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to read trace file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid trace JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Frame not found: {0}")]
    FrameNotFound(String),

    #[error("Sequence {seq_id} not found in frame {frame} ({available} sequences)")]
    SequenceNotFound {
        frame: String,
        seq_id: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, TraceError>;

/// One API call tuple: `[returnValue, callName, arguments]`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiCall(pub Vec<Value>);

impl ApiCall {
    pub fn new(return_value: impl Into<Value>, call_name: &str, arguments: Value) -> Self {
        Self(vec![return_value.into(), Value::from(call_name), arguments])
    }

    /// Raw return value, if present
    pub fn return_value(&self) -> Option<&Value> {
        self.0.first()
    }

    /// Call name, if present and a string
    pub fn call_name(&self) -> Option<&str> {
        self.0.get(1).and_then(Value::as_str)
    }

    pub fn arguments(&self) -> Option<&Value> {
        self.0.get(2)
    }
}

/// A named unit of program activity with its API calls
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    #[serde(rename = "ExecutionEvent", default)]
    pub name: Option<String>,
    #[serde(default)]
    pub apis: Vec<ApiCall>,
}

impl ExecutionEvent {
    pub fn new(name: &str, apis: Vec<ApiCall>) -> Self {
        Self {
            name: Some(name.to_string()),
            apis,
        }
    }
}

/// Ordered events captured in one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionSequence {
    #[serde(rename = "ExecutionEvents", default)]
    pub events: Vec<ExecutionEvent>,
}

impl ExecutionSequence {
    pub fn new(events: Vec<ExecutionEvent>) -> Self {
        Self { events }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Whole trace capture: frame name to its sequences
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraceFile {
    pub frames: BTreeMap<String, Vec<ExecutionSequence>>,
}

impl TraceFile {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TraceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Frame names in sorted order
    pub fn frame_names(&self) -> impl Iterator<Item = &str> {
        self.frames.keys().map(String::as_str)
    }

    /// Look up one sequence; `frame = None` selects the first frame
    pub fn sequence(&self, frame: Option<&str>, seq_id: usize) -> Result<&ExecutionSequence> {
        let (name, sequences) = match frame {
            Some(name) => self
                .frames
                .get_key_value(name)
                .ok_or_else(|| TraceError::FrameNotFound(name.to_string()))?,
            None => self
                .frames
                .iter()
                .next()
                .ok_or_else(|| TraceError::FrameNotFound("<first>".to_string()))?,
        };

        sequences
            .get(seq_id)
            .ok_or_else(|| TraceError::SequenceNotFound {
                frame: name.clone(),
                seq_id,
                available: sequences.len(),
            })
    }
}
