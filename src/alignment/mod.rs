// Edit-distance alignment of record and replay traces
//
// Computes the unit-cost Levenshtein distance between two symbol sequences
// and recovers the concrete insert/remove/substitute script that turns the
// record sequence into the replay sequence.
//
// Scientific Foundation:
// [1] Wagner, R. A., & Fischer, M. J. (1974). The string-to-string correction
//     problem. Journal of the ACM, 21(1), 168-173.
//
// The table is built bottom-up and walked back iteratively, so long traces
// cost quadratic memory but never deep recursion.

mod matrix;
mod traceback;

pub use matrix::DistanceMatrix;
pub use traceback::{extract, EditOperation, EditScript};

use thiserror::Error;

/// Errors raised while aligning two sequences
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error("Distance matrix of {rows}x{cols} cells exceeds the limit of {limit} cells")]
    CapacityExceeded {
        rows: usize,
        cols: usize,
        limit: usize,
    },

    #[error("Distance matrix dimensions overflow for sequences of length {m} and {n}")]
    DimensionOverflow { m: usize, n: usize },

    #[error("Failed to allocate distance matrix of {cells} cells")]
    Allocation { cells: usize },

    #[error("Matrix of {rows}x{cols} cells does not belong to sequences of length {m} and {n}")]
    MatrixMismatch {
        rows: usize,
        cols: usize,
        m: usize,
        n: usize,
    },

    #[error("Edit operation {index} does not apply to the sequence")]
    InvalidScript { index: usize },
}

pub type Result<T> = std::result::Result<T, AlignError>;

/// Edit distance together with the script that realises it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<S> {
    /// Minimum number of unit edits
    pub value: usize,
    /// Edits ordered start-to-end; `script.len() == value`
    pub script: EditScript<S>,
}

impl<S> Alignment<S> {
    /// True when both sequences are identical
    pub fn is_identical(&self) -> bool {
        self.value == 0
    }
}

/// Align `a` (reference) against `b` (target)
///
/// # Example
/// ```
/// use tracealign::alignment::{align, EditOperation};
///
/// let record = ["nav", "load", "click"];
/// let replay = ["nav", "click"];
/// let alignment = align(&record, &replay, None).unwrap();
///
/// assert_eq!(alignment.value, 1);
/// assert_eq!(
///     alignment.script,
///     vec![EditOperation::Remove { symbol: "load", position: 1 }]
/// );
/// ```
pub fn align<S: PartialEq + Clone>(a: &[S], b: &[S], max_cells: Option<usize>) -> Result<Alignment<S>> {
    let matrix = DistanceMatrix::build(a, b, max_cells)?;
    let script = extract(&matrix, a, b)?;
    let value = matrix.value();

    debug_assert_eq!(script.len(), value);
    tracing::debug!(m = a.len(), n = b.len(), value, "aligned sequences");

    Ok(Alignment { value, script })
}

/// Numeric edit distance only
pub fn distance<S: PartialEq>(a: &[S], b: &[S], max_cells: Option<usize>) -> Result<usize> {
    Ok(DistanceMatrix::build(a, b, max_cells)?.value())
}

/// Replay an edit script against the reference sequence
///
/// Operations must be ordered start-to-end as produced by [`extract`].
pub fn apply<S: Clone>(script: &[EditOperation<S>], a: &[S]) -> Result<Vec<S>> {
    let mut out = a.to_vec();
    // Net number of inserts minus removes seen so far
    let mut offset: isize = 0;

    for (index, op) in script.iter().enumerate() {
        let invalid = AlignError::InvalidScript { index };
        match op {
            EditOperation::Insert { symbol, position } => {
                if *position > out.len() {
                    return Err(invalid);
                }
                out.insert(*position, symbol.clone());
                offset += 1;
            }
            EditOperation::Remove { position, .. } => {
                let at = position
                    .checked_add_signed(offset)
                    .filter(|at| *at < out.len())
                    .ok_or(invalid)?;
                out.remove(at);
                offset -= 1;
            }
            EditOperation::Substitute { to, position, .. } => {
                let at = position
                    .checked_add_signed(offset)
                    .filter(|at| *at < out.len())
                    .ok_or(invalid)?;
                out[at] = to.clone();
            }
        }
    }

    Ok(out)
}
