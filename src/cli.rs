// src/cli.rs

use std::{env, fs, path::PathBuf};

use crate::config::options::{ExportFormat, RunOptions};
use crate::core::dom::Document;
use crate::extract::{ExtractOptions, Extractor};
use crate::header::{infer_block_stride, repair_header, HeaderPolicy};
use crate::file;
use crate::matrix::Matrix;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = RunOptions::default();
    let mut stride: Option<usize> = None;
    parse_cli(&mut opts, &mut stride)?;

    if opts.inputs.is_empty() {
        return Err("No input files. See --help.".into());
    }

    let mut docs = Vec::with_capacity(opts.inputs.len());
    for path in &opts.inputs {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        docs.push(Document::parse(&text));
    }

    let mut extractor = Extractor::with_options(ExtractOptions {
        scan_frames: opts.scan_frames,
        ..ExtractOptions::default()
    });
    // One file: scan its frames too. Several: the caller already
    // assembled the document set, take it as-is.
    let matrix = match docs.as_slice() {
        [root] => extractor.extract(root),
        many => extractor.extract_all(many),
    }?;

    let matrix = apply_policy(matrix, opts.policy.as_ref(), stride)?;
    let matrix = apply_renames(matrix, &opts.export.renames);

    if let Some(path) = file::write_export(&opts.export, &matrix)? {
        eprintln!("Wrote {} row(s) to {}", matrix.data_rows().len(), path.display());
    }
    Ok(())
}

fn apply_policy(
    matrix: Matrix,
    policy: Option<&HeaderPolicy>,
    stride: Option<usize>,
) -> Result<Matrix, Box<dyn std::error::Error>> {
    let policy = match (policy, stride) {
        (None, _) => return Ok(matrix),
        (Some(HeaderPolicy::FixedBlockCompress { .. }), Some(k)) => {
            HeaderPolicy::FixedBlockCompress { stride: k }
        }
        (Some(HeaderPolicy::FixedBlockCompress { .. }), None) => {
            // Destructive: refuse to guess. Suggest, but make the caller say it.
            return match infer_block_stride(&matrix) {
                Some(k) => Err(format!(
                    "--policy block needs --stride; header shape suggests --stride {k}, \
                     pass it explicitly to confirm"
                )
                .into()),
                None => Err("--policy block needs --stride, and the header gives no \
                             usable block shape to suggest one"
                    .into()),
            };
        }
        (Some(p), _) => p.clone(),
    };
    Ok(repair_header(matrix, &policy)?)
}

fn apply_renames(matrix: Matrix, renames: &[(String, String)]) -> Matrix {
    if renames.is_empty() {
        return matrix;
    }
    let width = matrix.width();
    let synthetic = matrix.synthetic_header();
    let mut rows = matrix.into_rows();
    if let Some(header) = rows.first_mut() {
        for label in header.iter_mut() {
            if let Some((_, to)) = renames.iter().find(|(from, _)| from == label) {
                *label = to.clone();
            }
        }
    }
    Matrix::from_parts(width, rows, synthetic)
}

fn parse_cli(
    opts: &mut RunOptions,
    stride: &mut Option<usize>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-o" | "--out" => {
                opts.export.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--policy" => {
                let v = args.next().ok_or("Missing value for --policy")?;
                opts.policy = match v.to_ascii_lowercase().as_str() {
                    "none" => None,
                    "blank" => Some(HeaderPolicy::BlankDuplicates),
                    "cycle" => Some(HeaderPolicy::CycleUnique),
                    "block" => Some(HeaderPolicy::FixedBlockCompress { stride: 0 }),
                    other => return Err(format!("Unknown policy: {}", other).into()),
                };}
            "--stride" => {
                let v: usize = args.next().ok_or("Missing value for --stride")?.parse()?;
                if v == 0 { return Err("Stride must be at least 1".into()); }
                *stride = Some(v);}
            "--rename" => {
                let v = args.next().ok_or("Missing value for --rename")?;
                let (from, to) = v
                    .split_once('=')
                    .ok_or_else(|| format!("Expected OLD=NEW, got: {}", v))?;
                opts.export.renames.push((s!(from), s!(to)));}
            "--no-frames" => opts.scan_frames = false,
            "--no-header" => opts.export.include_header = false,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ if a.starts_with('-') => return Err(format!("Unknown arg: {}", a).into()),
            _ => opts.inputs.push(PathBuf::from(a)),
        }
    }

    Ok(())
}
