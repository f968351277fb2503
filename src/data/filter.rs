use std::fmt;

use thiserror::Error;

use super::model::Table;

// ---------------------------------------------------------------------------
// Filter request: one comparison against one column, plus a projection
// ---------------------------------------------------------------------------

/// Comparison operator offered by the filter UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Gt,
    Lt,
    Eq,
}

impl FilterOp {
    pub const ALL: [FilterOp; 3] = [FilterOp::Gt, FilterOp::Lt, FilterOp::Eq];
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOp::Gt => write!(f, ">"),
            FilterOp::Lt => write!(f, "<"),
            FilterOp::Eq => write!(f, "=="),
        }
    }
}

/// One filter request. Built fresh per invocation, never persisted.
#[derive(Debug, Clone)]
pub struct FilterSpec {
    pub column: String,
    pub op: FilterOp,
    /// The comparison value exactly as typed.
    pub value: String,
    /// Columns of the result view, in display order.
    pub projection: Vec<String>,
}

impl FilterSpec {
    /// A spec whose projection defaults to the filtered column itself.
    pub fn new(column: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        let column = column.into();
        FilterSpec {
            projection: vec![column.clone()],
            column,
            op,
            value: value.into(),
        }
    }

    pub fn with_projection(mut self, projection: Vec<String>) -> Self {
        self.projection = projection;
        self
    }
}

/// The typed interpretation of the raw comparison value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Numeric(f64),
    Text(String),
}

impl FilterValue {
    /// Attempt the numeric interpretation; fall back to the raw text.
    pub fn parse(raw: &str) -> FilterValue {
        match raw.trim().parse::<f64>() {
            Ok(n) => FilterValue::Numeric(n),
            Err(_) => FilterValue::Text(raw.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

/// User-visible filter failures. None of these abort the session; the
/// caller shows the message and keeps the prior view.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("operator '{op}' requires a numeric comparison value")]
    NonNumericValue { op: FilterOp },
    #[error("select at least one column to display")]
    EmptyProjection,
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Apply one comparison filter and project the result.
///
/// Ordering operators compare numerically; rows whose target cell does not
/// coerce to a number are excluded from the result rather than raising an
/// error. Equality compares numerically when the value parses as a number,
/// otherwise as exact text against the raw value. Original row order is
/// preserved.
pub fn apply_filter(table: &Table, spec: &FilterSpec) -> Result<Table, FilterError> {
    if spec.projection.is_empty() {
        return Err(FilterError::EmptyProjection);
    }

    let target = table
        .column(&spec.column)
        .ok_or_else(|| FilterError::UnknownColumn(spec.column.clone()))?;

    let value = FilterValue::parse(&spec.value);

    let keep: Vec<usize> = match (spec.op, &value) {
        (op @ (FilterOp::Gt | FilterOp::Lt), FilterValue::Text(_)) => {
            return Err(FilterError::NonNumericValue { op });
        }
        (FilterOp::Gt, FilterValue::Numeric(n)) => {
            matching_rows(target.iter().map(|c| c.as_f64().is_some_and(|v| v > *n)))
        }
        (FilterOp::Lt, FilterValue::Numeric(n)) => {
            matching_rows(target.iter().map(|c| c.as_f64().is_some_and(|v| v < *n)))
        }
        (FilterOp::Eq, FilterValue::Numeric(n)) => {
            matching_rows(target.iter().map(|c| c.as_f64().is_some_and(|v| v == *n)))
        }
        (FilterOp::Eq, FilterValue::Text(_)) => {
            matching_rows(target.iter().map(|c| c.text_eq(&spec.value)))
        }
    };

    table
        .take_rows(&keep)
        .select(&spec.projection)
        .ok_or_else(|| {
            let missing = spec
                .projection
                .iter()
                .find(|n| table.column_index(n).is_none())
                .cloned()
                .unwrap_or_default();
            FilterError::UnknownColumn(missing)
        })
}

fn matching_rows(mask: impl Iterator<Item = bool>) -> Vec<usize> {
    mask.enumerate()
        .filter(|(_, keep)| *keep)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn ages() -> Table {
        Table::new(
            vec!["Edad".into(), "Nombre".into()],
            vec![
                vec![
                    CellValue::Integer(10),
                    CellValue::Integer(20),
                    CellValue::Integer(30),
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
    fn greater_than_keeps_matching_rows_in_order() {
        let result = apply_filter(&ages(), &FilterSpec::new("Edad", FilterOp::Gt, "15")).unwrap();
        assert_eq!(result.column_names, vec!["Edad"]);
        assert_eq!(
            result.column("Edad").unwrap(),
            &[CellValue::Integer(20), CellValue::Integer(30)]
        );
    }

    #[test]
    fn ordering_with_non_numeric_value_is_rejected() {
        let err = apply_filter(&ages(), &FilterSpec::new("Edad", FilterOp::Gt, "quince"))
            .unwrap_err();
        assert_eq!(
            err,
            FilterError::NonNumericValue { op: FilterOp::Gt }
        );
        assert_eq!(
            err.to_string(),
            "operator '>' requires a numeric comparison value"
        );
    }

    #[test]
    fn less_than_compares_numerically() {
        let result = apply_filter(&ages(), &FilterSpec::new("Edad", FilterOp::Lt, "20")).unwrap();
        assert_eq!(result.column("Edad").unwrap(), &[CellValue::Integer(10)]);
    }

    #[test]
    fn numeric_equality_ignores_text_formatting() {
        // "5" must match a float cell holding 5.0.
        let table = Table::new(
            vec!["v".into()],
            vec![vec![CellValue::Float(5.0), CellValue::Float(5.5)]],
        );
        let result = apply_filter(&table, &FilterSpec::new("v", FilterOp::Eq, "5")).unwrap();
        assert_eq!(result.column("v").unwrap(), &[CellValue::Float(5.0)]);
    }

    #[test]
    fn text_equality_matches_raw_value_exactly() {
        let result = apply_filter(&ages(), &FilterSpec::new("Nombre", FilterOp::Eq, "bo"))
            .unwrap();
        assert_eq!(result.n_rows(), 1);
        assert_eq!(
            result.column("Nombre").unwrap(),
            &[CellValue::Text("bo".into())]
        );
    }

    #[test]
    fn text_equality_never_matches_numeric_cells() {
        let result = apply_filter(&ages(), &FilterSpec::new("Edad", FilterOp::Eq, "diez"))
            .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn rows_failing_coercion_are_excluded_not_errors() {
        let table = Table::new(
            vec!["v".into()],
            vec![vec![
                CellValue::Integer(10),
                CellValue::Text("x".into()),
                CellValue::Null,
                CellValue::Integer(30),
            ]],
        );
        let result = apply_filter(&table, &FilterSpec::new("v", FilterOp::Gt, "5")).unwrap();
        assert_eq!(
            result.column("v").unwrap(),
            &[CellValue::Integer(10), CellValue::Integer(30)]
        );
    }

    #[test]
    fn projection_defaults_to_the_filtered_column() {
        let spec = FilterSpec::new("Edad", FilterOp::Gt, "15");
        assert_eq!(spec.projection, vec!["Edad"]);
    }

    #[test]
    fn projection_follows_requested_columns() {
        let spec = FilterSpec::new("Edad", FilterOp::Gt, "15")
            .with_projection(vec!["Nombre".into(), "Edad".into()]);
        let result = apply_filter(&ages(), &spec).unwrap();
        assert_eq!(result.column_names, vec!["Nombre", "Edad"]);
        assert_eq!(result.n_rows(), 2);
    }

    #[test]
    fn empty_projection_is_rejected() {
        let spec = FilterSpec::new("Edad", FilterOp::Gt, "15").with_projection(Vec::new());
        assert_eq!(
            apply_filter(&ages(), &spec).unwrap_err(),
            FilterError::EmptyProjection
        );
    }

    #[test]
    fn unknown_columns_are_reported_by_name() {
        let err = apply_filter(&ages(), &FilterSpec::new("Nope", FilterOp::Eq, "1")).unwrap_err();
        assert_eq!(err, FilterError::UnknownColumn("Nope".into()));

        let spec = FilterSpec::new("Edad", FilterOp::Gt, "15")
            .with_projection(vec!["Ghost".into()]);
        assert_eq!(
            apply_filter(&ages(), &spec).unwrap_err(),
            FilterError::UnknownColumn("Ghost".into())
        );
    }

    #[test]
    fn whitespace_around_numeric_values_is_tolerated() {
        assert_eq!(FilterValue::parse(" 15 "), FilterValue::Numeric(15.0));
        assert_eq!(
            FilterValue::parse("quince"),
            FilterValue::Text("quince".into())
        );
    }
}
