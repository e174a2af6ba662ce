// src/extract.rs
//
// Front door of the engine: scan, run the strategy chain per document,
// keep the best result across documents, normalize. One synchronous pass
// over a quiescent snapshot; no polling, no retries, no writes.

use std::error::Error;

use log::{info, warn};

use crate::core::dom::Document;
use crate::error::ExtractError;
use crate::matrix::{Matrix, RawTable};
use crate::scan;
use crate::strategy::{self, Strategy};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Scan `srcdoc` frames of the root document.
    pub scan_frames: bool,
    /// A scroll container must hold more than this many virtualization
    /// markers before the fallback detector treats it as a list.
    pub virtual_marker_min: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { scan_frames: true, virtual_marker_min: 5 }
    }
}

/// Optional environment pre-step (clearing filter chips, switching page
/// size to ALL, and the like). It may fail independently; extraction
/// never depends on it having run.
pub trait PreStep {
    fn run(&mut self) -> Result<(), Box<dyn Error>>;
}

/// The extraction engine. Holds options only — no state survives a call.
/// `extract` takes `&mut self` so one caller owns the engine for the
/// duration of a call: the "extraction in progress" flag of the old
/// scraper variants, expressed as exclusive access.
#[derive(Debug, Default)]
pub struct Extractor {
    opts: ExtractOptions,
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: ExtractOptions) -> Self {
        Self { opts }
    }

    /// Extract from a root document, scanning its readable frames.
    pub fn extract(&mut self, root: &Document) -> Result<Matrix, ExtractError> {
        let nested = if self.opts.scan_frames {
            scan::nested_documents(root)
        } else {
            Vec::new()
        };
        self.best_of(std::iter::once(root).chain(nested.iter()))
    }

    /// Extract from a caller-assembled document set (e.g. pre-fetched
    /// frame bodies). Frames of the supplied documents are not scanned.
    pub fn extract_all(&mut self, docs: &[Document]) -> Result<Matrix, ExtractError> {
        self.best_of(docs.iter())
    }

    /// Run an environment pre-step, then extract. A pre-step failure is
    /// logged and ignored.
    pub fn extract_with_prep(
        &mut self,
        prep: &mut dyn PreStep,
        root: &Document,
    ) -> Result<Matrix, ExtractError> {
        if let Err(e) = prep.run() {
            warn!("pre-step failed, extracting anyway: {e}");
        }
        self.extract(root)
    }

    /// Chain per document, then pick the document whose result has the
    /// most data rows — the document actually rendering the full grid
    /// beats a thinner mirrored view. Selection is commutative; first
    /// wins ties, so a fixed snapshot always yields the same answer.
    fn best_of<'a, I>(&mut self, docs: I) -> Result<Matrix, ExtractError>
    where
        I: Iterator<Item = &'a Document>,
    {
        let min = self.opts.virtual_marker_min;
        let mut best: Option<(Strategy, RawTable)> = None;

        for doc in docs {
            let Some((strategy, table)) = strategy::run_chain(doc, min) else { continue };
            match &best {
                Some((_, held)) if table.row_count() <= held.row_count() => {}
                _ => best = Some((strategy, table)),
            }
        }

        let (strategy, table) = best.ok_or(ExtractError::NotFound)?;
        info!("extracted {} row(s) via {}", table.row_count(), strategy.name());
        Ok(Matrix::from_raw(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn native_table(rows: usize) -> String {
        let mut body = s!();
        for i in 0..rows {
            body.push_str(&format!("<tr><td>{i}</td><td>v</td></tr>"));
        }
        join!("<table><thead><tr><th>Id</th><th>V</th></tr></thead><tbody>", &body, "</tbody></table>")
    }

    #[test]
    fn not_found_when_nothing_tabular() {
        let doc = Document::parse("<div><p>no tables here</p></div>");
        let mut ex = Extractor::new();
        assert_eq!(ex.extract(&doc), Err(ExtractError::NotFound));
    }

    #[test]
    fn larger_nested_document_beats_root() {
        // Root renders a 10-row ARIA grid; a readable nested frame holds
        // the full 500-row native table.
        let mut grid = s!("<div role='grid'>");
        for i in 0..10 {
            grid.push_str(&format!("<div role='row'><span role='gridcell'>{i}</span></div>"));
        }
        grid.push_str("</div>");

        let frame = native_table(500).replace('\'', "&#39;");
        let html = format!("{grid}<iframe srcdoc='{frame}'></iframe>");
        let doc = Document::parse(&html);

        let m = Extractor::new().extract(&doc).unwrap();
        assert_eq!(m.data_rows().len(), 500);
        assert_eq!(m.header(), ["Id", "V"]);
    }

    #[test]
    fn frame_scan_can_be_disabled() {
        let frame = native_table(20).replace('\'', "&#39;");
        let html = format!("<iframe srcdoc='{frame}'></iframe>");
        let doc = Document::parse(&html);

        let mut ex = Extractor::with_options(ExtractOptions {
            scan_frames: false,
            ..ExtractOptions::default()
        });
        assert_eq!(ex.extract(&doc), Err(ExtractError::NotFound));
    }

    #[test]
    fn extract_all_spans_supplied_documents() {
        let a = Document::parse(&native_table(3));
        let b = Document::parse(&native_table(7));
        let m = Extractor::new().extract_all(&[a, b]).unwrap();
        assert_eq!(m.data_rows().len(), 7);
    }

    #[test]
    fn failing_prestep_does_not_block_extraction() {
        struct Flaky;
        impl PreStep for Flaky {
            fn run(&mut self) -> Result<(), Box<dyn Error>> {
                Err("page-size dropdown not found".into())
            }
        }
        let doc = Document::parse(&native_table(2));
        let m = Extractor::new().extract_with_prep(&mut Flaky, &doc).unwrap();
        assert_eq!(m.data_rows().len(), 2);
    }

    #[test]
    fn ties_keep_the_first_document() {
        let a = Document::parse(&native_table(4));
        let b = Document::parse(
            "<div role='grid'>\
               <div role='row'><span role='gridcell'>g1</span></div>\
               <div role='row'><span role='gridcell'>g2</span></div>\
               <div role='row'><span role='gridcell'>g3</span></div>\
               <div role='row'><span role='gridcell'>g4</span></div>\
             </div>",
        );
        let m = Extractor::new().extract_all(&[a, b]).unwrap();
        assert_eq!(m.header(), ["Id", "V"]);
    }
}
