// src/strategy/mod.rs
//
// Ordered detectors for the divergent table representations seen in the
// wild: native tables, ARIA-role grids, bare row-role widgets, and
// virtualized lists. Each detector is a pure function from a document to
// an optional raw table; the chain stops at the first one that yields at
// least one data row. No inheritance, no dynamic dispatch: the set is
// closed and the order is fixed.

mod aria_grid;
mod native_table;
mod row_grid;
mod virtual_list;

use log::debug;

use crate::core::dom::Document;
use crate::matrix::RawTable;

/// Which detector produced a result. Mostly for diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    NativeTable,
    AriaGrid,
    GenericRowGrid,
    VirtualizedList,
}

impl Strategy {
    pub fn name(self) -> &'static str {
        match self {
            Strategy::NativeTable => "native-table",
            Strategy::AriaGrid => "aria-grid",
            Strategy::GenericRowGrid => "row-grid",
            Strategy::VirtualizedList => "virtualized-list",
        }
    }
}

/// Run the chain against one document. The virtualization fallback is
/// only reached when the three structured detectors all came up empty.
pub fn run_chain(doc: &Document, virtual_marker_min: usize) -> Option<(Strategy, RawTable)> {
    let hit = native_table::extract(doc)
        .map(|t| (Strategy::NativeTable, t))
        .or_else(|| aria_grid::extract(doc).map(|t| (Strategy::AriaGrid, t)))
        .or_else(|| row_grid::extract(doc).map(|t| (Strategy::GenericRowGrid, t)))
        .or_else(|| {
            virtual_list::extract(doc, virtual_marker_min)
                .map(|t| (Strategy::VirtualizedList, t))
        });

    if let Some((strategy, table)) = &hit {
        debug!("{} matched with {} row(s)", strategy.name(), table.row_count());
    }
    hit
}
