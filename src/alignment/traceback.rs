use serde::Serialize;

use super::{AlignError, DistanceMatrix, Result};

/// A single unit-cost edit
///
/// `Remove` and `Substitute` positions index the reference sequence;
/// `Insert` positions index the target sequence (where the new symbol lands).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOperation<S> {
    Insert { symbol: S, position: usize },
    Remove { symbol: S, position: usize },
    Substitute { from: S, to: S, position: usize },
}

impl<S> EditOperation<S> {
    pub fn position(&self) -> usize {
        match self {
            EditOperation::Insert { position, .. }
            | EditOperation::Remove { position, .. }
            | EditOperation::Substitute { position, .. } => *position,
        }
    }
}

/// Ordered start-to-end list of edits turning the reference into the target
pub type EditScript<S> = Vec<EditOperation<S>>;

/// Predecessor chosen at each traceback step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Diagonal,
    Up,
    Left,
}

/// Pick the cheapest predecessor, preferring diagonal, then up, then left
///
/// Returns `None` only at the origin, where no predecessor exists.
fn choose_step(sub: Option<usize>, remove: Option<usize>, insert: Option<usize>) -> Option<(Step, usize)> {
    let best = [sub, remove, insert].into_iter().flatten().min()?;

    if sub == Some(best) {
        Some((Step::Diagonal, best))
    } else if remove == Some(best) {
        Some((Step::Up, best))
    } else {
        Some((Step::Left, best))
    }
}

/// Walk the distance matrix from the bottom-right cell back to the origin
/// and emit the minimal edit script
///
/// The matrix covers suffixes, so the walk moves through both sequences
/// front to back and operations come out start-to-end. Ties between equally
/// cheap predecessors resolve as substitution, then removal, then insertion,
/// which settles them at the earliest position. Steps whose predecessor has
/// the same cost as the current cell are free matches and emit nothing.
///
/// # Example
/// ```
/// use tracealign::alignment::{extract, DistanceMatrix, EditOperation};
///
/// let a = ["a", "b", "c"];
/// let b = ["a", "x", "c"];
/// let matrix = DistanceMatrix::build(&a, &b, None).unwrap();
/// let script = extract(&matrix, &a, &b).unwrap();
///
/// assert_eq!(
///     script,
///     vec![EditOperation::Substitute { from: "b", to: "x", position: 1 }]
/// );
/// ```
pub fn extract<S: Clone>(matrix: &DistanceMatrix, a: &[S], b: &[S]) -> Result<EditScript<S>> {
    let (m, n) = (a.len(), b.len());
    if matrix.rows() != m + 1 || matrix.cols() != n + 1 {
        return Err(AlignError::MatrixMismatch {
            rows: matrix.rows(),
            cols: matrix.cols(),
            m,
            n,
        });
    }

    let mut script = Vec::with_capacity(matrix.value());
    // Remaining suffix lengths
    let (mut i, mut j) = (m, n);

    while i > 0 || j > 0 {
        let current = matrix.get(i, j);

        let sub = (i > 0 && j > 0).then(|| matrix.get(i - 1, j - 1));
        let remove = (i > 0).then(|| matrix.get(i - 1, j));
        let insert = (j > 0).then(|| matrix.get(i, j - 1));

        let Some((step, cost)) = choose_step(sub, remove, insert) else {
            break;
        };
        let edited = cost != current;

        match step {
            Step::Diagonal => {
                if edited {
                    script.push(EditOperation::Substitute {
                        from: a[m - i].clone(),
                        to: b[n - j].clone(),
                        position: m - i,
                    });
                }
                i -= 1;
                j -= 1;
            }
            Step::Up => {
                if edited {
                    script.push(EditOperation::Remove {
                        symbol: a[m - i].clone(),
                        position: m - i,
                    });
                }
                i -= 1;
            }
            Step::Left => {
                if edited {
                    script.push(EditOperation::Insert {
                        symbol: b[n - j].clone(),
                        position: n - j,
                    });
                }
                j -= 1;
            }
        }
    }

    Ok(script)
}
