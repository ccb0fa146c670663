//! tracealign - Edit-distance alignment of record and replay execution traces
//!
//! This library compares two ordered symbol sequences captured from a record
//! run and a replay run of the same program, computes their minimum unit-cost
//! edit distance, and recovers the ordered insert/remove/substitute script
//! that turns one into the other. Symbols are either execution event names or
//! per-call API descriptors.

pub mod alignment;
pub mod cli;
pub mod comparison;
pub mod config;
pub mod output;
pub mod report;
pub mod symbol;
pub mod trace;
