// src/strategy/native_table.rs

use scraper::ElementRef;

use crate::core::dom::{css, text_of, Document};
use crate::matrix::RawTable;

/// First `<table>` in the document. Header from `<thead>` header cells,
/// falling back to the first row's `<th>` cells when there is no header
/// section. Body rows from `<tbody>`, falling back to all rows minus the
/// one consumed as header.
pub(super) fn extract(doc: &Document) -> Option<RawTable> {
    let css = css();
    let table = doc.select(&css.table).next()?;

    let mut header: Vec<String> = table.select(&css.thead_th).map(|th| text_of(&th)).collect();
    let mut header_row = None;
    if header.is_empty() {
        if let Some(first_tr) = table.select(&css.tr).next() {
            let ths: Vec<String> = first_tr.select(&css.th).map(|th| text_of(&th)).collect();
            if !ths.is_empty() {
                header = ths;
                header_row = Some(first_tr.id());
            }
        }
    }

    let mut trs: Vec<ElementRef> = table.select(&css.tbody_tr).collect();
    if trs.is_empty() {
        trs = table
            .select(&css.tr)
            .filter(|tr| Some(tr.id()) != header_row)
            .collect();
    }

    let mut rows = Vec::with_capacity(trs.len());
    for tr in trs {
        let cells: Vec<String> = tr.select(&css.td).map(|td| text_of(&td)).collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    if rows.is_empty() {
        return None;
    }

    Some(RawTable { header: (!header.is_empty()).then_some(header), rows })
}
