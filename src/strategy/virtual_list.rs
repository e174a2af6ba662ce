// src/strategy/virtual_list.rs
//
// Last-resort detector for virtualized lists: a scroll container whose
// visible children carry row-index tags or tab-stops. The caller is
// responsible for having settled the virtualization before snapshotting;
// this only reads what got materialized.

use scraper::ElementRef;

use crate::core::dom::{css, element_children, has_scroll_overflow, text_of, Document};
use crate::matrix::RawTable;

/// Scan for elements with inline overflow `auto`/`scroll`; the first one
/// holding more than `marker_min` virtualization markers AND yielding at
/// least one row is treated as the list — a qualifying container whose
/// markers carry no cell structure is passed over and the scan moves to
/// the next container. Each marker's direct element children (or, when
/// it has none, its div/span descendants) become one row's cells. The
/// marker threshold keeps pathological pages from producing junk
/// single-row "tables" out of ordinary scroll panes.
pub(super) fn extract(doc: &Document, marker_min: usize) -> Option<RawTable> {
    let css = css();

    for node in doc.root().descendants() {
        let Some(el) = ElementRef::wrap(node) else { continue };
        if !has_scroll_overflow(&el) {
            continue;
        }
        let markers: Vec<ElementRef> = el.select(&css.marker).collect();
        if markers.len() <= marker_min {
            continue;
        }

        let mut rows = Vec::with_capacity(markers.len());
        for marker in &markers {
            let cells = marker_cells(marker);
            if !cells.is_empty() {
                rows.push(cells);
            }
        }
        if !rows.is_empty() {
            return Some(RawTable { header: None, rows });
        }
    }
    None
}

fn marker_cells(marker: &ElementRef) -> Vec<String> {
    let children = element_children(marker);
    if !children.is_empty() {
        return children.iter().map(text_of).collect();
    }
    marker.select(&css().div_span).map(|c| text_of(&c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn list(n: usize) -> String {
        let mut items = s!();
        for i in 0..n {
            items.push_str(&format!(
                "<div data-index='{i}'><span>r{i}a</span><span>r{i}b</span></div>"
            ));
        }
        join!("<div style='overflow-y: auto'>", &items, "</div>")
    }

    #[test]
    fn reads_rows_from_index_tagged_markers() {
        let doc = Document::parse(&list(8));
        let t = extract(&doc, 5).unwrap();
        assert_eq!(t.header, None);
        assert_eq!(t.rows.len(), 8);
        assert_eq!(t.rows[0], vec!["r0a", "r0b"]);
    }

    #[test]
    fn too_few_markers_is_not_a_list() {
        let doc = Document::parse(&list(5));
        assert!(extract(&doc, 5).is_none());
    }

    #[test]
    fn tabindex_markers_qualify() {
        let mut items = s!();
        for i in 0..7 {
            items.push_str(&format!("<div tabindex='0'><b>cell{i}</b></div>"));
        }
        let doc = Document::parse(&join!("<div style='overflow: scroll'>", &items, "</div>"));
        let t = extract(&doc, 5).unwrap();
        assert_eq!(t.rows.len(), 7);
    }

    #[test]
    fn markers_without_element_children_yield_no_rows() {
        let mut items = s!();
        for i in 0..6 {
            items.push_str(&format!("<p aria-rowindex='{i}'>row {i}</p>"));
        }
        let doc = Document::parse(&join!("<div style='overflow:auto'>", &items, "</div>"));
        // Bare-text markers carry no cell structure, so the detector declines.
        assert!(extract(&doc, 5).is_none());
    }

    #[test]
    fn empty_first_container_defers_to_the_next() {
        // First scroll pane has enough markers but no cell structure;
        // the real list comes after it.
        let mut bare = s!();
        for i in 0..6 {
            bare.push_str(&format!("<p aria-rowindex='{i}'>row {i}</p>"));
        }
        let first = join!("<div style='overflow:auto'>", &bare, "</div>");
        let doc = Document::parse(&join!(&first, &list(8)));
        let t = extract(&doc, 5).unwrap();
        assert_eq!(t.rows.len(), 8);
    }

    #[test]
    fn non_scroll_containers_are_ignored() {
        let mut items = s!();
        for i in 0..9 {
            items.push_str(&format!("<div data-index='{i}'><span>x</span></div>"));
        }
        let doc = Document::parse(&join!("<div>", &items, "</div>"));
        assert!(extract(&doc, 5).is_none());
    }
}
