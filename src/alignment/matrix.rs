use super::{AlignError, Result};

/// Full Wagner-Fischer edit distance table
///
/// Stored row-major with `rows = m + 1` and `cols = n + 1`. The table is
/// filled over the reversed sequences: row `i` and column `j` hold the
/// distance between the last `i` symbols of the reference sequence and the
/// last `j` symbols of the target sequence. Walking back from `(m, n)`
/// therefore visits the sequences front to back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DistanceMatrix {
    /// Build the distance table for two sequences under unit costs
    ///
    /// `max_cells` bounds the table size; `None` means unbounded. The table
    /// buffer is reserved fallibly so an oversized comparison reports
    /// [`AlignError::Allocation`] instead of aborting the process.
    ///
    /// # Example
    /// ```
    /// use tracealign::alignment::DistanceMatrix;
    ///
    /// let a = ["nav", "load", "click"];
    /// let b = ["nav", "click"];
    /// let matrix = DistanceMatrix::build(&a, &b, None).unwrap();
    ///
    /// assert_eq!(matrix.value(), 1);
    /// assert_eq!(matrix.get(3, 0), 3);
    /// ```
    pub fn build<S: PartialEq>(a: &[S], b: &[S], max_cells: Option<usize>) -> Result<Self> {
        let m = a.len();
        let n = b.len();
        let rows = m + 1;
        let cols = n + 1;

        let total = rows
            .checked_mul(cols)
            .ok_or(AlignError::DimensionOverflow { m, n })?;

        if let Some(limit) = max_cells {
            if total > limit {
                return Err(AlignError::CapacityExceeded { rows, cols, limit });
            }
        }

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(total)
            .map_err(|_| AlignError::Allocation { cells: total })?;
        cells.resize(total, 0);

        tracing::trace!(rows, cols, "building distance matrix");

        // Empty-prefix base cases
        for (i, cell) in cells.iter_mut().step_by(cols).enumerate() {
            *cell = i;
        }
        for (j, cell) in cells[..cols].iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                let diag = cells[(i - 1) * cols + (j - 1)];
                cells[i * cols + j] = if a[m - i] == b[n - j] {
                    diag
                } else {
                    let up = cells[(i - 1) * cols + j];
                    let left = cells[i * cols + (j - 1)];
                    1 + up.min(left).min(diag)
                };
            }
        }

        Ok(Self { cells, rows, cols })
    }

    /// Distance between suffixes `a[m - i..]` and `b[n - j..]`
    ///
    /// # Panics
    /// Panics if `i` or `j` lies outside the table.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of range");
        self.cells[i * self.cols + j]
    }

    /// Number of rows (`m + 1`)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`n + 1`)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Edit distance of the full sequences (bottom-right cell)
    pub fn value(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}
