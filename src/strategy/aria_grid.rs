// src/strategy/aria_grid.rs

use crate::core::dom::{css, text_of, Document};
use crate::matrix::RawTable;

/// First `[role=grid]` element. Header from `columnheader` descendants
/// (blank labels get a positional stand-in, matching what the rendered
/// widgets do to screen readers); data rows are `row` descendants without
/// a `columnheader` of their own, cells from `gridcell`/`cell` roles.
pub(super) fn extract(doc: &Document) -> Option<RawTable> {
    let css = css();
    let grid = doc.select(&css.grid).next()?;

    let header: Vec<String> = grid
        .select(&css.columnheader)
        .enumerate()
        .map(|(i, h)| {
            let label = text_of(&h);
            if label.is_empty() { format!("col_{}", i + 1) } else { label }
        })
        .collect();

    let mut rows = Vec::new();
    for row in grid.select(&css.row) {
        if row.select(&css.columnheader).next().is_some() {
            continue;
        }
        let cells: Vec<String> = row.select(&css.cell).map(|c| text_of(&c)).collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    if rows.is_empty() {
        return None;
    }

    Some(RawTable { header: (!header.is_empty()).then_some(header), rows })
}
