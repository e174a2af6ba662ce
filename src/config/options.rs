// src/config/options.rs
//
// Caller-side output options for the CLI path. The engine itself knows
// nothing about files or formats; see ExtractOptions in extract.rs for
// the engine knobs.

use std::path::PathBuf;

use crate::header::HeaderPolicy;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    /// None → stdout.
    pub out: Option<PathBuf>,
    pub include_header: bool,
    /// Post-repair label replacements, applied in order.
    pub renames: Vec<(String, String)>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out: None,
            include_header: true,
            renames: Vec::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Input snapshot files; more than one means a caller-assembled
    /// document set (frames fetched out of band).
    pub inputs: Vec<PathBuf>,
    pub scan_frames: bool,
    pub policy: Option<HeaderPolicy>,
    pub export: ExportOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            scan_frames: true,
            policy: None,
            export: ExportOptions::default(),
        }
    }
}
