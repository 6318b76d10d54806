//! Bounded matrix dumps for manual spot-checking.

use crate::matrix::element::Element;

/// Edge of the printed corner. Matrices larger than this show only their
/// top-left corner; smaller ones print in full.
const CORNER: usize = 4;

/// Print `label` on its own line, then up to the top-left 4×4 corner of the
/// rows×cols matrix `mat`, one row per line, 12-character 5-decimal cells.
pub fn print_corner<T: Element>(mat: &[T], rows: usize, cols: usize, label: &str) {
    println!("{label}");
    for i in 0..rows.min(CORNER) {
        let mut line = String::new();
        for j in 0..cols.min(CORNER) {
            line.push_str(&format!("{:12.5}", mat[i * cols + j]));
        }
        println!("{line}");
    }
}
