//! Text rendering of matrices for display next to the scene.

use std::fmt;

use glam::Mat4;

/// A 4×4 matrix formatted with a fixed number of decimals.
///
/// Rows are printed as rows of the mathematical matrix, so the translation of
/// an affine transform shows up in the right-most column.
#[derive(Clone, Copy, Debug)]
pub struct MatrixText {
    matrix: Mat4,
    precision: usize,
}

impl MatrixText {
    pub fn new(matrix: Mat4, precision: usize) -> Self {
        Self { matrix, precision }
    }

    /// Cell text at `row`, `col` of the mathematical matrix.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 4 or more.
    pub fn cell(&self, row: usize, col: usize) -> String {
        format!("{:.*}", self.precision, self.matrix.col(col)[row])
    }
}

impl fmt::Display for MatrixText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<[String; 4]> = (0..4)
            .map(|row| std::array::from_fn(|col| self.cell(row, col)))
            .collect();
        let width = cells
            .iter()
            .flat_map(|row| row.iter().map(String::len))
            .max()
            .unwrap_or(0);

        for (i, row) in cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[")?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
