//! Symbol extraction
//!
//! Projects execution events and API call tuples into flat, equality
//! comparable symbols. Malformed records never fail: missing fields are
//! replaced by fixed placeholders so one bad tuple cannot abort an alignment.

use crate::trace::{ApiCall, ExecutionEvent, ExecutionSequence};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::hash::Hasher;

/// Placeholder for an absent or null return value
pub const MISSING_RETURN: &str = "<missing>";

/// Placeholder for an absent or non-string call name
pub const UNKNOWN_CALL: &str = "<unknown>";

/// Placeholder for an event without a name
pub const UNNAMED_EVENT: &str = "<unnamed>";

/// API-level symbol: summarized return value plus call name
///
/// Compared structurally; displayed as `(return)name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApiSymbol {
    pub return_summary: String,
    pub call_name: String,
}

impl fmt::Display for ApiSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}){}", self.return_summary, self.call_name)
    }
}

/// 64-bit FNV-1a hash of a string
///
/// # Example
/// ```
/// use tracealign::symbol::stable_hash;
///
/// assert_eq!(stable_hash("abc"), stable_hash("abc"));
/// assert_ne!(stable_hash("abc"), stable_hash("abd"));
/// ```
pub fn stable_hash(text: &str) -> u64 {
    let mut hasher = fnv::FnvHasher::default();
    hasher.write(text.as_bytes());
    hasher.finish()
}

/// Render a return value for comparison
///
/// String values longer than `threshold` UTF-16 code units (the length
/// trace viewers measure) are replaced by `hash-` and their FNV-1a hash.
/// Other JSON values use their compact JSON text and are never hashed.
pub fn summarize_return_value(value: Option<&Value>, threshold: usize) -> String {
    match value {
        None | Some(Value::Null) => {
            tracing::debug!("API call without return value, using placeholder");
            MISSING_RETURN.to_string()
        }
        Some(Value::String(s)) if s.encode_utf16().count() > threshold => {
            format!("hash-{:016x}", stable_hash(s))
        }
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Event-level symbol: the event name
pub fn event_symbol(event: &ExecutionEvent) -> String {
    match &event.name {
        Some(name) => name.clone(),
        None => {
            tracing::debug!("execution event without name, using placeholder");
            UNNAMED_EVENT.to_string()
        }
    }
}

/// Event names of a whole sequence, in order
pub fn event_symbols(sequence: &ExecutionSequence) -> Vec<String> {
    sequence.events.iter().map(event_symbol).collect()
}

/// API-level symbol for one call tuple
pub fn api_symbol(call: &ApiCall, threshold: usize) -> ApiSymbol {
    let call_name = match call.call_name() {
        Some(name) => name.to_string(),
        None => {
            tracing::debug!("API call without name, using placeholder");
            UNKNOWN_CALL.to_string()
        }
    };

    ApiSymbol {
        return_summary: summarize_return_value(call.return_value(), threshold),
        call_name,
    }
}

/// API symbols of one event, in call order
pub fn api_symbols(event: &ExecutionEvent, threshold: usize) -> Vec<ApiSymbol> {
    event
        .apis
        .iter()
        .map(|call| api_symbol(call, threshold))
        .collect()
}
