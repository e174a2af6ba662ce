// src/core/dom.rs
//
// Thin wrapper around a parsed HTML snapshot plus the fixed set of CSS
// selectors the strategy chain needs. Selectors are compiled once and
// shared; every pattern here is a string literal, so compilation cannot
// fail at runtime.

use std::sync::OnceLock;

use scraper::{ElementRef, Html, Selector};

use crate::core::text::normalize_ws;

/// One quiescent, already-rendered document (page or frame snapshot).
/// The engine never writes to it.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse an HTML snapshot. Parsing is lenient; broken markup still
    /// yields a tree, it just may not contain anything extractable.
    pub fn parse(text: &str) -> Self {
        Self { html: Html::parse_document(text) }
    }

    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    pub(crate) fn select<'a>(
        &'a self,
        sel: &'a Selector,
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(sel)
    }
}

/// Text content of an element and its descendants, whitespace-collapsed.
pub(crate) fn text_of(el: &ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Direct element children, skipping text/comment nodes.
pub(crate) fn element_children<'a>(el: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap).collect()
}

/// True if the element's inline style declares overflow (or overflow-x/y)
/// as `auto` or `scroll`. A static snapshot has no computed styles; the
/// inline declaration is the observable signal for a scroll container.
pub(crate) fn has_scroll_overflow(el: &ElementRef) -> bool {
    let Some(style) = el.value().attr("style") else { return false };
    for decl in style.split(';') {
        let Some((prop, value)) = decl.split_once(':') else { continue };
        let prop = prop.trim().to_ascii_lowercase();
        if prop == "overflow" || prop == "overflow-x" || prop == "overflow-y" {
            let value = value.trim().to_ascii_lowercase();
            if value.contains("auto") || value.contains("scroll") {
                return true;
            }
        }
    }
    false
}

/* ---------- compiled selector set ---------- */

pub(crate) struct Css {
    pub table: Selector,
    pub thead_th: Selector,
    pub tbody_tr: Selector,
    pub tr: Selector,
    pub th: Selector,
    pub td: Selector,
    pub grid: Selector,
    pub row: Selector,
    pub columnheader: Selector,
    pub cell: Selector,
    pub frame: Selector,
    pub marker: Selector,
    pub div_span: Selector,
}

pub(crate) fn css() -> &'static Css {
    static CSS: OnceLock<Css> = OnceLock::new();
    CSS.get_or_init(|| Css {
        table: sel("table"),
        thead_th: sel("thead th"),
        tbody_tr: sel("tbody tr"),
        tr: sel("tr"),
        th: sel("th"),
        td: sel("td"),
        grid: sel("[role='grid']"),
        row: sel("[role='row']"),
        columnheader: sel("[role='columnheader']"),
        cell: sel("[role='gridcell'], [role='cell']"),
        frame: sel("iframe, frame"),
        marker: sel("[data-index], [aria-rowindex], [tabindex]"),
        div_span: sel("div, span"),
    })
}

fn sel(pattern: &str) -> Selector {
    // Literal patterns only; a parse failure is a programming error.
    Selector::parse(pattern).expect("static selector")
}
