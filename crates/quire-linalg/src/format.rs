//! Rendering options for matrices and transformation logs.

use quire_integers::Rational;

/// Configuration for rendering a matrix as text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Spaces added in front of the widest cell of the matrix.
    pub padding: usize,
    /// Reduce every cell to lowest terms before rendering.
    pub simplify: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            padding: 1,
            simplify: false,
        }
    }
}

impl DisplayConfig {
    /// Renders a row-major grid, each cell right-aligned to a common width.
    pub(crate) fn render(&self, columns: usize, cells: &[Rational]) -> String {
        let text: Vec<String> = cells
            .iter()
            .map(|cell| {
                if self.simplify {
                    cell.simplified().to_string()
                } else {
                    cell.to_string()
                }
            })
            .collect();
        let width = text.iter().map(String::len).max().unwrap_or(0) + self.padding;

        let mut out = String::new();
        if columns == 0 {
            return out;
        }
        for row in text.chunks(columns) {
            for cell in row {
                out.push_str(&format!("{cell:>width$}"));
            }
            out.push('\n');
        }
        out
    }
}
