use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of a column
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common dataframe dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    /// Date kept as the original text for simplicity.
    Date(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Date(d) => write!(f, "{d}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for numeric comparison.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Exact text equality against a raw comparison value.
    /// Only textual cells can match; numeric cells never equal raw text.
    pub fn text_eq(&self, raw: &str) -> bool {
        match self {
            CellValue::Text(s) | CellValue::Date(s) => s == raw,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete parsed dataset
// ---------------------------------------------------------------------------

/// An in-memory table: ordered named columns with row-aligned cells.
///
/// Tables are never mutated in place; every query below returns a copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names in header order.
    pub column_names: Vec<String>,
    /// Column-major cell storage, parallel to `column_names`.
    pub columns: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from parallel column vectors.
    pub fn new(column_names: Vec<String>, columns: Vec<Vec<CellValue>>) -> Self {
        debug_assert_eq!(column_names.len(), columns.len());
        Table {
            column_names,
            columns,
        }
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.column_names.len()
    }

    /// (rows, columns), in the dataframe `shape` convention.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_cols())
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    /// Position of a column by exact (case-sensitive) name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|c| c == name)
    }

    /// Cells of a column by exact name.
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.column_index(name).map(|i| self.columns[i].as_slice())
    }

    /// Cell at (row, column position), if in bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.columns.get(col).and_then(|c| c.get(row))
    }

    /// First `n` rows (all of them when `n` exceeds the row count).
    pub fn head(&self, n: usize) -> Table {
        self.slice_rows(0, n.min(self.n_rows()))
    }

    /// Last `n` rows, original order preserved.
    pub fn tail(&self, n: usize) -> Table {
        let rows = self.n_rows();
        self.slice_rows(rows - n.min(rows), rows)
    }

    /// Rows in `[start, end)` across all columns.
    fn slice_rows(&self, start: usize, end: usize) -> Table {
        Table {
            column_names: self.column_names.clone(),
            columns: self
                .columns
                .iter()
                .map(|col| col[start..end].to_vec())
                .collect(),
        }
    }

    /// Keep only the given row indices, in the given order.
    pub fn take_rows(&self, indices: &[usize]) -> Table {
        Table {
            column_names: self.column_names.clone(),
            columns: self
                .columns
                .iter()
                .map(|col| indices.iter().map(|&i| col[i].clone()).collect())
                .collect(),
        }
    }

    /// Project onto the named columns, in the given order.
    /// Returns `None` if any name is unknown.
    pub fn select(&self, names: &[String]) -> Option<Table> {
        let indices: Vec<usize> = names
            .iter()
            .map(|n| self.column_index(n))
            .collect::<Option<_>>()?;
        Some(Table {
            column_names: names.to_vec(),
            columns: indices.iter().map(|&i| self.columns[i].clone()).collect(),
        })
    }

    /// Whether the column at `idx` is numeric: every non-null cell coerces
    /// to `f64` and at least one does. Text, date, and bool columns are not
    /// numeric, matching the dataframe `describe` convention.
    pub fn is_numeric_column(&self, idx: usize) -> bool {
        let mut seen = false;
        for cell in &self.columns[idx] {
            match cell {
                CellValue::Null => {}
                other => {
                    if other.as_f64().is_none() {
                        return false;
                    }
                    seen = true;
                }
            }
        }
        seen
    }
}

// ---------------------------------------------------------------------------
// LoadedFile – one opened CSV file
// ---------------------------------------------------------------------------

/// The parsed table plus the name and raw byte length of the opened file.
/// Replaced wholesale when another file is opened.
#[derive(Debug, Clone)]
pub struct LoadedFile {
    pub table: Table,
    pub file_name: String,
    /// Length of the raw byte stream, not derived from the parsed table.
    pub byte_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["id".into(), "name".into()],
            vec![
                vec![
                    CellValue::Integer(1),
                    CellValue::Integer(2),
                    CellValue::Integer(3),
                ],
                vec![
                    CellValue::Text("ana".into()),
                    CellValue::Text("bo".into()),
                    CellValue::Text("cy".into()),
                ],
            ],
        )
    }

    #[test]
    fn shape_and_lookup() {
        let t = sample();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.column_index("name"), Some(1));
        assert_eq!(t.column_index("Name"), None);
        assert_eq!(t.column("id").unwrap()[2], CellValue::Integer(3));
    }

    #[test]
    fn head_and_tail_preserve_order() {
        let t = sample();
        let head = t.head(2);
        assert_eq!(head.n_rows(), 2);
        assert_eq!(head.column("id").unwrap()[0], CellValue::Integer(1));

        let tail = t.tail(2);
        assert_eq!(tail.n_rows(), 2);
        assert_eq!(tail.column("id").unwrap()[0], CellValue::Integer(2));
        assert_eq!(tail.column("id").unwrap()[1], CellValue::Integer(3));

        // Oversized n returns everything.
        assert_eq!(t.head(10).n_rows(), 3);
        assert_eq!(t.tail(10).n_rows(), 3);
    }

    #[test]
    fn select_keeps_requested_order() {
        let t = sample();
        let s = t.select(&["name".into(), "id".into()]).unwrap();
        assert_eq!(s.column_names, vec!["name", "id"]);
        assert_eq!(s.column("id").unwrap().len(), 3);
        assert!(t.select(&["missing".into()]).is_none());
    }

    #[test]
    fn numeric_column_detection() {
        let t = Table::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![
                vec![CellValue::Integer(1), CellValue::Null],
                vec![CellValue::Integer(1), CellValue::Text("x".into())],
                vec![CellValue::Null, CellValue::Null],
            ],
        );
        assert!(t.is_numeric_column(0));
        assert!(!t.is_numeric_column(1));
        assert!(!t.is_numeric_column(2));
    }
}
