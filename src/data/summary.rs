use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// Descriptive summary: read-only queries over the current table
// ---------------------------------------------------------------------------

/// First `n` rows, with `n` clamped to `[1, row count]`.
pub fn head(table: &Table, n: usize) -> Table {
    table.head(clamp_preview(n, table.n_rows()))
}

/// Last `n` rows, with `n` clamped to `[1, row count]`.
pub fn tail(table: &Table, n: usize) -> Table {
    table.tail(clamp_preview(n, table.n_rows()))
}

fn clamp_preview(n: usize, rows: usize) -> usize {
    if rows == 0 { 0 } else { n.clamp(1, rows) }
}

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub name: String,
    /// Non-null cell count.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (NaN when fewer than two values).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute describe-style statistics for every numeric column.
/// Text, date, and bool columns are skipped.
pub fn describe(table: &Table) -> Vec<ColumnStats> {
    table
        .column_names
        .iter()
        .enumerate()
        .filter(|(idx, _)| table.is_numeric_column(*idx))
        .map(|(idx, name)| {
            let mut values: Vec<f64> = table.columns[idx]
                .iter()
                .filter_map(CellValue::as_f64)
                .collect();
            values.sort_by(f64::total_cmp);
            column_stats(name, &values)
        })
        .collect()
}

fn column_stats(name: &str, sorted: &[f64]) -> ColumnStats {
    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n < 2 {
        f64::NAN
    } else {
        let var = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        var.sqrt()
    };
    ColumnStats {
        name: name.to_string(),
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: percentile(sorted, 0.25),
        median: percentile(sorted, 0.5),
        q75: percentile(sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// Linearly interpolated percentile over pre-sorted values, the default
/// dataframe quantile method.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (pos - lo as f64) * (sorted[hi] - sorted[lo])
}

/// Human-readable size of the raw uploaded byte stream.
/// Reported in MB strictly above 1 MB, otherwise in KB.
pub fn format_file_size(bytes: u64) -> String {
    let kb = bytes as f64 / 1024.0;
    let mb = kb / 1024.0;
    if mb > 1.0 {
        format!("{mb:.2} MB")
    } else {
        format!("{kb:.2} KB")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five_rows() -> Table {
        Table::new(
            vec!["v".into(), "label".into()],
            vec![
                (1..=5).map(CellValue::Integer).collect(),
                (1..=5)
                    .map(|i| CellValue::Text(format!("r{i}")))
                    .collect(),
            ],
        )
    }

    #[test]
    fn head_returns_first_rows_in_order() {
        let h = head(&five_rows(), 2);
        assert_eq!(h.n_rows(), 2);
        assert_eq!(
            h.column("v").unwrap(),
            &[CellValue::Integer(1), CellValue::Integer(2)]
        );
    }

    #[test]
    fn preview_counts_are_clamped() {
        let t = five_rows();
        assert_eq!(head(&t, 0).n_rows(), 1);
        assert_eq!(head(&t, 100).n_rows(), 5);
        assert_eq!(tail(&t, 0).n_rows(), 1);
        assert_eq!(tail(&t, 100).n_rows(), 5);

        let empty = Table::new(vec!["v".into()], vec![Vec::new()]);
        assert!(head(&empty, 3).is_empty());
        assert!(tail(&empty, 3).is_empty());
    }

    #[test]
    fn tail_keeps_original_order() {
        let t = tail(&five_rows(), 2);
        assert_eq!(
            t.column("v").unwrap(),
            &[CellValue::Integer(4), CellValue::Integer(5)]
        );
    }

    #[test]
    fn describe_covers_numeric_columns_only() {
        let stats = describe(&five_rows());
        assert_eq!(stats.len(), 1);
        let s = &stats[0];
        assert_eq!(s.name, "v");
        assert_eq!(s.count, 5);
        assert_eq!(s.mean, 3.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.q25, 2.0);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.q75, 4.0);
        assert_eq!(s.max, 5.0);
        // Sample std of 1..=5 is sqrt(2.5).
        assert!((s.std - 2.5_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn describe_interpolates_quartiles() {
        let t = Table::new(
            vec!["v".into()],
            vec![vec![
                CellValue::Integer(10),
                CellValue::Integer(20),
                CellValue::Integer(30),
            ]],
        );
        let s = &describe(&t)[0];
        assert_eq!(s.q25, 15.0);
        assert_eq!(s.median, 20.0);
        assert_eq!(s.q75, 25.0);
    }

    #[test]
    fn describe_skips_nulls_in_count() {
        let t = Table::new(
            vec!["v".into()],
            vec![vec![
                CellValue::Integer(1),
                CellValue::Null,
                CellValue::Integer(3),
            ]],
        );
        let s = &describe(&t)[0];
        assert_eq!(s.count, 2);
        assert_eq!(s.mean, 2.0);
    }

    #[test]
    fn summary_queries_are_idempotent() {
        let t = five_rows();
        assert_eq!(t.shape(), t.shape());
        assert_eq!(t.column_names, t.column_names);
        assert_eq!(describe(&t), describe(&t));
        assert_eq!(head(&t, 3), head(&t, 3));
    }

    #[test]
    fn file_size_unit_switches_above_one_megabyte() {
        assert_eq!(format_file_size(512), "0.50 KB");
        assert_eq!(format_file_size(1024 * 1024), "1024.00 KB");
        assert_eq!(format_file_size(2 * 1024 * 1024), "2.00 MB");
    }
}
