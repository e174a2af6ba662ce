// src/scan.rs
//
// Container scanner: root document plus accessible nested frames. A
// static snapshot can only read a frame whose content is embedded in the
// markup (`srcdoc`); a frame that merely points at an external `src` is
// the cross-origin case — counted, logged, and skipped, never an error.
// Callers that pre-fetched frame bodies themselves can bypass this and
// hand `Extractor::extract_all` the parsed documents directly.

use log::debug;

use crate::core::dom::{css, Document};

/// Parse every readable nested frame of `root`, recursively: a readable
/// frame's own `srcdoc` frames are scanned too. Document order, each
/// frame ahead of its descendants; deterministic for a fixed snapshot.
/// Unreadable frames are skipped.
pub fn nested_documents(root: &Document) -> Vec<Document> {
    let mut blocked = 0usize;
    let docs = collect(root, &mut blocked);
    if blocked > 0 {
        debug!("skipped {blocked} frame(s) without readable content");
    }
    docs
}

fn collect(doc: &Document, blocked: &mut usize) -> Vec<Document> {
    let css = css();
    let mut out = Vec::new();

    for frame in doc.select(&css.frame) {
        match frame.value().attr("srcdoc") {
            Some(srcdoc) => {
                let nested = Document::parse(srcdoc);
                let inner = collect(&nested, blocked);
                out.push(nested);
                out.extend(inner);
            }
            None => *blocked += 1,
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_srcdoc_frames_in_document_order() {
        let root = Document::parse(
            "<body>\
               <iframe srcdoc='<table><tr><td>one</td></tr></table>'></iframe>\
               <iframe src='https://other.example/grid'></iframe>\
               <iframe srcdoc='<p>two</p>'></iframe>\
             </body>",
        );
        let docs = nested_documents(&root);
        assert_eq!(docs.len(), 2);
        assert!(docs[0].select(&css().td).next().is_some());
        assert!(docs[1].select(&css().td).next().is_none());
    }

    #[test]
    fn frames_nested_in_frames_are_scanned() {
        // Inner frame markup sits one quoting level down inside the
        // outer srcdoc attribute.
        let root = Document::parse(
            "<iframe srcdoc=\"<p>pane</p>\
               <iframe srcdoc='<table><tr><td>deep</td></tr></table>'></iframe>\
             \"></iframe>",
        );
        let docs = nested_documents(&root);
        assert_eq!(docs.len(), 2);
        assert!(docs[0].select(&css().td).next().is_none());
        assert!(docs[1].select(&css().td).next().is_some());
    }

    #[test]
    fn cross_origin_frames_never_error() {
        let root = Document::parse("<iframe src='https://other.example/'></iframe>");
        assert!(nested_documents(&root).is_empty());
    }

    #[test]
    fn no_frames_no_documents() {
        let root = Document::parse("<table><tr><td>x</td></tr></table>");
        assert!(nested_documents(&root).is_empty());
    }
}
