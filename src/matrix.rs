// src/matrix.rs
//
// Raw strategy output and the canonical rectangular matrix.
//
// A RawTable is whatever one strategy pulled out of one document: possibly
// ragged rows plus an optional header. Normalization turns that into a
// Matrix: every row padded to the same width, row 0 always a header
// (captured or synthetic). All values are built fresh per extraction call.

use log::warn;

use crate::core::text::normalize_ws;

/// Ragged table as produced by one strategy on one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Data rows only; the header never counts toward best-of selection.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// The canonical rectangular output. Row 0 is the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix {
    width: usize,
    rows: Vec<Vec<String>>,
    synthetic_header: bool,
}

impl Matrix {
    /// Normalize a raw table:
    /// - width = max row length observed (header included, pre-repair)
    /// - short rows padded at the *end* with empty cells
    /// - header replaced by `col_1..col_width` when missing or when its
    ///   length disagrees with the width (the ambiguous-header case)
    /// - every cell whitespace-collapsed; reapplication is idempotent
    pub fn from_raw(raw: RawTable) -> Self {
        let RawTable { header, mut rows } = raw;

        let mut width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if let Some(h) = &header {
            width = width.max(h.len());
        }

        let (mut header_row, synthetic_header) = match header {
            Some(h) if h.len() == width => (h, false),
            Some(h) => {
                warn!(
                    "header length {} disagrees with width {}; using positional labels",
                    h.len(),
                    width
                );
                (positional_header(width), true)
            }
            None => (positional_header(width), true),
        };

        clean_row(&mut header_row, width);
        for row in &mut rows {
            clean_row(row, width);
        }

        let mut all = Vec::with_capacity(rows.len() + 1);
        all.push(header_row);
        all.extend(rows);

        Self { width, rows: all, synthetic_header }
    }

    /// Rebuild after a header repair. Caller guarantees every row already
    /// has exactly `width` cells.
    pub(crate) fn from_parts(width: usize, rows: Vec<Vec<String>>, synthetic_header: bool) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == width));
        Self { width, rows, synthetic_header }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// All rows, header first.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn header(&self) -> &[String] {
        &self.rows[0]
    }

    pub fn data_rows(&self) -> &[Vec<String>] {
        &self.rows[1..]
    }

    /// True when no captured header was usable and positional labels
    /// were stamped in instead.
    pub fn synthetic_header(&self) -> bool {
        self.synthetic_header
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// `col_1 .. col_width`
pub fn positional_header(width: usize) -> Vec<String> {
    (1..=width).map(|i| format!("col_{i}")).collect()
}

fn clean_row(row: &mut Vec<String>, width: usize) {
    for cell in row.iter_mut() {
        let clean = normalize_ws(cell);
        if clean != *cell {
            *cell = clean;
        }
    }
    while row.len() < width {
        row.push(s!());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn raw(header: Option<&[&str]>, rows: &[&[&str]]) -> RawTable {
        RawTable {
            header: header.map(|h| h.iter().map(|c| s!(*c)).collect()),
            rows: rows.iter().map(|r| r.iter().map(|c| s!(*c)).collect()).collect(),
        }
    }

    #[test]
    fn pads_ragged_rows_to_max_width() {
        let m = Matrix::from_raw(raw(None, &[
            &["a", "b", "c", "d"],
            &["e", "f", "g"],
            &["h", "i", "j", "k", "l"],
        ]));
        assert_eq!(m.width(), 5);
        assert!(m.rows().iter().all(|r| r.len() == 5));
        assert_eq!(m.data_rows()[1], vec!["e", "f", "g", "", ""]);
    }

    #[test]
    fn synthesizes_positional_header_when_missing() {
        let m = Matrix::from_raw(raw(None, &[&["a", "b", "c", "d", "e"]]));
        assert!(m.synthetic_header());
        assert_eq!(m.header(), ["col_1", "col_2", "col_3", "col_4", "col_5"]);
    }

    #[test]
    fn mismatched_header_is_replaced_not_padded() {
        let m = Matrix::from_raw(raw(Some(&["X", "Y"]), &[&["1", "2", "3"]]));
        assert!(m.synthetic_header());
        assert_eq!(m.header(), ["col_1", "col_2", "col_3"]);
        assert_eq!(m.data_rows()[0], vec!["1", "2", "3"]);
    }

    #[test]
    fn header_longer_than_rows_sets_width() {
        let m = Matrix::from_raw(raw(Some(&["A", "B", "C", "D"]), &[&["1", "2"]]));
        assert_eq!(m.width(), 4);
        assert!(!m.synthetic_header());
        assert_eq!(m.data_rows()[0], vec!["1", "2", "", ""]);
    }

    #[test]
    fn cell_cleanup_is_idempotent() {
        let m = Matrix::from_raw(raw(None, &[&["  a   b ", "c"]]));
        let again = Matrix::from_raw(RawTable { header: None, rows: m.data_rows().to_vec() });
        assert_eq!(m.data_rows(), again.data_rows());
        assert_eq!(m.data_rows()[0][0], "a b");
    }

    #[test]
    fn empty_raw_table_yields_empty_matrix() {
        let m = Matrix::from_raw(RawTable::default());
        assert_eq!(m.width(), 0);
        assert_eq!(m.data_rows().len(), 0);
        assert_eq!(m.header().len(), 0);
    }
}
