// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod extract;
pub mod file;
pub mod header;
pub mod matrix;
pub mod scan;
pub mod strategy;

pub use crate::core::dom::Document;
pub use error::ExtractError;
pub use extract::{ExtractOptions, Extractor, PreStep};
pub use header::{infer_block_stride, repair_header, HeaderPolicy};
pub use matrix::{Matrix, RawTable};
