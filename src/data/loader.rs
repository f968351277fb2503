use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::{CellValue, LoadedFile, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a CSV file from disk.
///
/// Expects a comma-separated file with a header row. The raw byte length is
/// recorded for the size estimate shown in the file overview.
pub fn load_file(path: &Path) -> Result<LoadedFile> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    if ext != "csv" {
        bail!("Unsupported file extension: .{ext}");
    }

    let bytes = std::fs::read(path).context("reading CSV file")?;
    let table = parse_csv(&bytes)
        .with_context(|| format!("parsing {}", path.display()))?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unnamed.csv")
        .to_string();

    Ok(LoadedFile {
        table,
        file_name,
        byte_size: bytes.len() as u64,
    })
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// Parse CSV bytes into a [`Table`].
///
/// The first record is the header row. Every other cell is typed
/// individually by [`guess_cell_type`]; rows with a field count differing
/// from the header are rejected.
pub fn parse_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(str::to_string)
        .collect();

    let mut columns: Vec<Vec<CellValue>> = vec![Vec::new(); headers.len()];

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col_idx, value) in record.iter().enumerate() {
            columns[col_idx].push(guess_cell_type(value));
        }
    }

    Ok(Table::new(headers, columns))
}

/// Infer the type of a single cell from its text.
///
/// A literal NaN parse is treated as a missing value, matching the usual
/// dataframe convention for NaN markers.
fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_nan() {
            return CellValue::Null;
        }
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    if is_date_like(s) {
        return CellValue::Date(s.to_string());
    }
    CellValue::Text(s.to_string())
}

/// Cheap shape check for the two date layouts seen in exported CSVs:
/// `YYYY-MM-DD` and `DD/MM/YYYY`.
fn is_date_like(s: &str) -> bool {
    let b = s.as_bytes();
    if b.len() != 10 {
        return false;
    }
    let digits_at = |idxs: &[usize]| idxs.iter().all(|&i| b[i].is_ascii_digit());
    (b[4] == b'-' && b[7] == b'-' && digits_at(&[0, 1, 2, 3, 5, 6, 8, 9]))
        || (b[2] == b'/' && b[5] == b'/' && digits_at(&[0, 1, 3, 4, 6, 7, 8, 9]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_infers_cell_types() {
        let bytes = b"Edad,Peso,Nombre,Alta,Activo\n10,60.5,ana,2021-03-04,true\n20,,bo,05/06/2022,false\n";
        let table = parse_csv(bytes).unwrap();

        assert_eq!(
            table.column_names,
            vec!["Edad", "Peso", "Nombre", "Alta", "Activo"]
        );
        assert_eq!(table.shape(), (2, 5));
        assert_eq!(table.column("Edad").unwrap()[0], CellValue::Integer(10));
        assert_eq!(table.column("Peso").unwrap()[0], CellValue::Float(60.5));
        assert_eq!(table.column("Peso").unwrap()[1], CellValue::Null);
        assert_eq!(
            table.column("Nombre").unwrap()[0],
            CellValue::Text("ana".into())
        );
        assert_eq!(
            table.column("Alta").unwrap()[0],
            CellValue::Date("2021-03-04".into())
        );
        assert_eq!(
            table.column("Alta").unwrap()[1],
            CellValue::Date("05/06/2022".into())
        );
        assert_eq!(table.column("Activo").unwrap()[1], CellValue::Bool(false));
    }

    #[test]
    fn nan_marker_becomes_null() {
        let table = parse_csv(b"v\nNaN\n1.5\n").unwrap();
        assert_eq!(table.column("v").unwrap()[0], CellValue::Null);
        assert_eq!(table.column("v").unwrap()[1], CellValue::Float(1.5));
    }

    #[test]
    fn ragged_row_is_an_error() {
        assert!(parse_csv(b"a,b\n1\n").is_err());
    }

    #[test]
    fn header_only_gives_empty_table() {
        let table = parse_csv(b"a,b\n").unwrap();
        assert_eq!(table.shape(), (0, 2));
        assert!(table.is_empty());
    }
}
