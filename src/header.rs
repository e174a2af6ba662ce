// src/header.rs
//
// Header repair for duplicate-pane rendering, where each logical column
// label shows up multiple times. The caller picks the policy explicitly;
// nothing here auto-detects or defaults, because one of the policies
// discards data columns.

use log::info;

use crate::core::text::is_blank;
use crate::error::ExtractError;
use crate::matrix::Matrix;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Keep the first label of each run of identical adjacent labels,
    /// blank the rest. Row count, width and data cells unchanged.
    BlankDuplicates,
    /// Re-stamp position `i` with `base[i % base.len()]`, where `base` is
    /// the ordered list of first-seen unique labels. Keeps every column
    /// with a meaningful label; the recommended default. Idempotent.
    CycleUnique,
    /// Keep header labels at positions `0, k, 2k, ..` and cut every data
    /// row to the new width. Destructive: only valid when the stride `k`
    /// has been confirmed against the data (see `infer_block_stride`).
    FixedBlockCompress { stride: usize },
}

/// Apply one repair policy to the matrix header.
pub fn repair_header(matrix: Matrix, policy: &HeaderPolicy) -> Result<Matrix, ExtractError> {
    match policy {
        HeaderPolicy::BlankDuplicates => Ok(restamp(matrix, blank_duplicates)),
        HeaderPolicy::CycleUnique => Ok(restamp(matrix, cycle_unique)),
        HeaderPolicy::FixedBlockCompress { stride } => compress_blocks(matrix, *stride),
    }
}

/// Propose a block-compress stride from the header shape: every maximal
/// run of identical labels must have the same length `k >= 2`, `k` must
/// divide the width, and the modal effective data-row length must be a
/// multiple of `k`. Returns None when the header gives no such evidence;
/// the caller still owns the decision to compress.
pub fn infer_block_stride(matrix: &Matrix) -> Option<usize> {
    let header = matrix.header();
    let width = matrix.width();
    if width < 2 {
        return None;
    }

    let mut stride: Option<usize> = None;
    let mut i = 0;
    while i < width {
        let mut j = i + 1;
        while j < width && header[j] == header[i] {
            j += 1;
        }
        match stride {
            None => stride = Some(j - i),
            Some(k) if k != j - i => return None,
            Some(_) => {}
        }
        i = j;
    }

    let k = stride?;
    if k < 2 || width % k != 0 {
        return None;
    }
    if modal_effective_len(matrix)? % k != 0 {
        return None;
    }
    Some(k)
}

/* ---------- policies ---------- */

fn restamp(matrix: Matrix, repair: fn(&[String]) -> Vec<String>) -> Matrix {
    let width = matrix.width();
    let synthetic = matrix.synthetic_header();
    let mut rows = matrix.into_rows();
    if let Some(header) = rows.first_mut() {
        *header = repair(header);
    }
    Matrix::from_parts(width, rows, synthetic)
}

fn blank_duplicates(header: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(header.len());
    let mut prev: Option<&str> = None;
    for label in header {
        if prev == Some(label.as_str()) {
            out.push(s!());
        } else {
            out.push(label.clone());
        }
        prev = Some(label.as_str());
    }
    out
}

fn cycle_unique(header: &[String]) -> Vec<String> {
    let mut base: Vec<&String> = Vec::new();
    let mut prev: Option<&str> = None;
    for label in header {
        // One candidate per run; blanks are noise, not labels.
        if prev != Some(label.as_str()) && !is_blank(label) && !base.iter().any(|b| *b == label) {
            base.push(label);
        }
        prev = Some(label.as_str());
    }
    if base.is_empty() {
        return header.to_vec();
    }
    (0..header.len()).map(|i| base[i % base.len()].clone()).collect()
}

fn compress_blocks(matrix: Matrix, stride: usize) -> Result<Matrix, ExtractError> {
    let width = matrix.width();
    if stride == 0 || stride > width {
        return Err(ExtractError::BadStride { stride, width });
    }

    let synthetic = matrix.synthetic_header();
    let mut rows = matrix.into_rows();

    let new_width = width.div_ceil(stride);
    if let Some(header) = rows.first_mut() {
        *header = header.iter().step_by(stride).cloned().collect();
    }
    for row in rows.iter_mut().skip(1) {
        row.truncate(new_width);
        while row.len() < new_width {
            row.push(s!());
        }
    }
    info!("block compress: width {width} -> {new_width} (stride {stride})");

    Ok(Matrix::from_parts(new_width, rows, synthetic))
}

/* ---------- helpers ---------- */

/// Most common effective row length (trailing pad cells ignored).
/// None when the matrix has no data rows to validate against.
fn modal_effective_len(matrix: &Matrix) -> Option<usize> {
    use std::collections::HashMap;

    let mut counts: HashMap<usize, usize> = HashMap::new();
    for row in matrix.data_rows() {
        let eff = row.iter().rposition(|c| !c.is_empty()).map_or(0, |i| i + 1);
        *counts.entry(eff).or_insert(0) += 1;
    }
    // Ties break toward the longer length: padding never shrinks data.
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)))
        .map(|(len, _)| len)
}
