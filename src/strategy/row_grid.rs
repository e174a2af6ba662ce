// src/strategy/row_grid.rs
//
// Custom widgets that mark up rows with `role=row` but never wrap them in
// a `role=grid` container. Includes frozen-column + scrollable-body split
// layouts, which render the row elements twice under two sibling panes:
// container selection settles on the lowest ancestor covering the whole
// widget, and the duplicated header labels are left for the header
// repair policies to clean up.

use std::collections::HashMap;

use scraper::ElementRef;

use crate::core::dom::{css, element_children, text_of, Document};
use crate::matrix::RawTable;

/// All `role=row` elements anywhere in the document. The *row container*
/// is picked by scoring every ancestor of every row by its count of
/// row-role descendants; maximum score wins, first encountered wins ties.
/// Ancestors are walked nearest-first, so a tie resolves to the deepest
/// qualifying container.
pub(super) fn extract(doc: &Document) -> Option<RawTable> {
    let css = css();
    let all_rows: Vec<ElementRef> = doc.select(&css.row).collect();
    if all_rows.is_empty() {
        return None;
    }

    // Keyed by node id; memoizes the descendant count per ancestor.
    let mut scores = HashMap::new();
    let mut best: Option<(ElementRef, usize)> = None;
    for row in &all_rows {
        for node in row.ancestors() {
            let Some(ancestor) = ElementRef::wrap(node) else { continue };
            let score = *scores
                .entry(node.id())
                .or_insert_with(|| ancestor.select(&css.row).count());
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((ancestor, score)),
            }
        }
    }
    let (container, _) = best?;

    let mut header = None;
    let mut rows = Vec::new();
    for row in container.select(&css.row) {
        if header.is_none() && row.select(&css.columnheader).next().is_some() {
            let labels: Vec<String> =
                row.select(&css.columnheader).map(|h| text_of(&h)).collect();
            header = Some(labels);
            continue;
        }
        let cells = row_cells(&row);
        if cells.iter().any(|c| !c.is_empty()) {
            rows.push(cells);
        }
    }
    if rows.is_empty() {
        return None;
    }

    Some(RawTable { header, rows })
}

/// Cell-role descendants when the widget bothers with them, otherwise the
/// row's direct element children.
fn row_cells(row: &ElementRef) -> Vec<String> {
    let css = css();
    let cells: Vec<String> = row.select(&css.cell).map(|c| text_of(&c)).collect();
    if !cells.is_empty() {
        return cells;
    }
    element_children(row).iter().map(text_of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bare_rows_without_grid_wrapper() {
        let doc = Document::parse(
            "<div class='widget'>\
               <div role='row'><span role='columnheader'>A</span><span role='columnheader'>B</span></div>\
               <div role='row'><span role='gridcell'>1</span><span role='gridcell'>2</span></div>\
               <div role='row'><span role='gridcell'>3</span><span role='gridcell'>4</span></div>\
             </div>",
        );
        let t = extract(&doc).unwrap();
        assert_eq!(t.header, Some(vec![s!("A"), s!("B")]));
        assert_eq!(t.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn container_is_lowest_ancestor_covering_all_rows() {
        // Split layout: frozen pane + scrollable pane under one wrapper.
        let doc = Document::parse(
            "<body><div id='wrap'>\
               <div id='left'>\
                 <div role='row'><span role='gridcell'>r1</span></div>\
                 <div role='row'><span role='gridcell'>r2</span></div>\
               </div>\
               <div id='right'>\
                 <div role='row'><span role='gridcell'>r1-tail</span></div>\
                 <div role='row'><span role='gridcell'>r2-tail</span></div>\
               </div>\
             </div></body>",
        );
        let t = extract(&doc).unwrap();
        // Both panes are covered; rows come out in document order.
        assert_eq!(
            t.rows,
            vec![vec!["r1"], vec!["r2"], vec!["r1-tail"], vec!["r2-tail"]]
        );
    }

    #[test]
    fn cells_fall_back_to_direct_children() {
        let doc = Document::parse(
            "<div role='row'><div>alpha</div><div>beta</div></div>\
             <div role='row'><div>gamma</div><div></div></div>",
        );
        let t = extract(&doc).unwrap();
        assert_eq!(t.header, None);
        assert_eq!(t.rows, vec![vec!["alpha", "beta"], vec!["gamma", ""]]);
    }

    #[test]
    fn rows_with_only_empty_cells_are_dropped() {
        let doc = Document::parse(
            "<div>\
               <div role='row'><span role='gridcell'></span></div>\
               <div role='row'><span role='gridcell'>kept</span></div>\
             </div>",
        );
        let t = extract(&doc).unwrap();
        assert_eq!(t.rows, vec![vec!["kept"]]);
    }

    #[test]
    fn no_rows_no_result() {
        let doc = Document::parse("<div><p>nothing tabular</p></div>");
        assert!(extract(&doc).is_none());
    }
}
