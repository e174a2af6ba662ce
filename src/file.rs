// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::csv::rows_to_string;
use crate::matrix::Matrix;

/// Serialize the matrix per the export options and write it out.
/// Returns the path written to, or None when it went to stdout.
pub fn write_export(
    export: &ExportOptions,
    matrix: &Matrix,
) -> Result<Option<PathBuf>, Box<dyn std::error::Error>> {
    let contents = rows_to_string(matrix.rows(), export.include_header, export.format.delim());

    match &export.out {
        Some(path) => {
            let path = resolve_out_path(path, export.format.ext());
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    ensure_directory(parent)?;
                }
            }
            fs::write(&path, contents)?;
            Ok(Some(path))
        }
        None => {
            print!("{contents}");
            Ok(None)
        }
    }
}

/// Directory-style targets get a default filename; explicit filenames are
/// kept as given, extension included.
pub fn resolve_out_path(p: &Path, ext: &str) -> PathBuf {
    if looks_like_dir_hint(p) || p.is_dir() {
        p.join(join!("matrix.", ext))
    } else {
        p.to_path_buf()
    }
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
