use crate::errors::ModelError;
use serde::{Deserialize, Serialize};

/// Square matrix of per-generation migration rates.
///
/// Entry `(j, k)` is the rate at which lineages in population `j` move to
/// population `k` backwards in time. The diagonal is always zero.
/// Serialized as a nested array of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct MigrationMatrix {
    rows: Vec<Vec<f64>>,
}

impl MigrationMatrix {
    /// All-zero matrix for `n` populations.
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![vec![0.0; n]; n],
        }
    }

    /// Build from explicit rows.
    ///
    /// # Errors
    /// Returns `ModelError::NotSquare` if any row length differs from the
    /// number of rows, and `ModelError::NonZeroDiagonal` if a diagonal entry
    /// is not zero.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ModelError> {
        let n = rows.len();
        for (j, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ModelError::NotSquare {
                    row: j,
                    len: row.len(),
                    expected: n,
                });
            }
            if row[j] != 0.0 {
                return Err(ModelError::NonZeroDiagonal(j));
            }
        }
        Ok(Self { rows })
    }

    /// Number of populations.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Set one off-diagonal entry. Returns `false` (and changes nothing) if
    /// the index is out of range or on the diagonal.
    pub fn set(&mut self, row: usize, col: usize, rate: f64) -> bool {
        if row == col || row >= self.dim() || col >= self.dim() {
            return false;
        }
        self.rows[row][col] = rate;
        true
    }

    /// Set every off-diagonal entry to `rate`.
    pub fn set_all(&mut self, rate: f64) {
        for (j, row) in self.rows.iter_mut().enumerate() {
            for (k, entry) in row.iter_mut().enumerate() {
                if j != k {
                    *entry = rate;
                }
            }
        }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.dim()).all(|j| (0..j).all(|k| self.rows[j][k] == self.rows[k][j]))
    }

    /// Iterate over `(row, col, rate)` for every off-diagonal entry.
    pub fn off_diagonal(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.rows.iter().enumerate().flat_map(|(j, row)| {
            row.iter()
                .enumerate()
                .filter(move |(k, _)| *k != j)
                .map(move |(k, &rate)| (j, k, rate))
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for MigrationMatrix {
    type Error = ModelError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<MigrationMatrix> for Vec<Vec<f64>> {
    fn from(matrix: MigrationMatrix) -> Self {
        matrix.rows
    }
}
