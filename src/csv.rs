// src/csv.rs
//
// CSV/TSV writing for the CLI path. The engine's emitter does no
// format-specific escaping; quoting happens here, at the serializer.

use std::io::{self, Write};

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Serialize rows (header first when included) into one string.
pub fn rows_to_string(rows: &[Vec<String>], include_header: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();

    let skip = usize::from(!include_header && !rows.is_empty());
    for row in &rows[skip..] {
        let _ = write_row(&mut buf, row, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
