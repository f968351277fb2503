use crate::data::filter::{self, FilterOp, FilterSpec};
use crate::data::model::{LoadedFile, Table};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Currently opened file (None until the user opens one). Replaced
    /// wholesale on re-open.
    pub file: Option<LoadedFile>,

    // -- Preview --
    pub show_head: bool,
    pub head_n: usize,
    pub show_tail: bool,
    pub tail_n: usize,

    // -- Summary toggles --
    pub show_overview: bool,
    pub show_describe: bool,
    pub show_shape: bool,
    pub show_columns: bool,

    // -- Column selection --
    pub selected_column: Option<String>,
    /// Multi-column selection, in click order.
    pub selected_columns: Vec<String>,

    // -- Filter inputs --
    pub filter_column: Option<String>,
    pub filter_op: FilterOp,
    pub filter_value: String,
    /// Result columns, in click order. Reset to the filter column whenever
    /// the filter column changes.
    pub filter_projection: Vec<String>,

    /// Result of the last successful filter application.
    pub filter_result: Option<Table>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            file: None,
            show_head: false,
            head_n: 5,
            show_tail: false,
            tail_n: 5,
            show_overview: false,
            show_describe: false,
            show_shape: false,
            show_columns: false,
            selected_column: None,
            selected_columns: Vec::new(),
            filter_column: None,
            filter_op: FilterOp::Gt,
            filter_value: String::new(),
            filter_projection: Vec::new(),
            filter_result: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly opened file, resetting all per-file widget state.
    pub fn set_file(&mut self, file: LoadedFile) {
        let first = file.table.column_names.first().cloned();

        self.head_n = 5;
        self.tail_n = 5;
        self.selected_column = first.clone();
        self.selected_columns.clear();
        self.filter_column = first.clone();
        self.filter_op = FilterOp::Gt;
        self.filter_value.clear();
        self.filter_projection = first.into_iter().collect();
        self.filter_result = None;
        self.status_message = None;

        self.file = Some(file);
    }

    /// Change the filter column, resetting the projection to it.
    pub fn set_filter_column(&mut self, column: String) {
        self.filter_projection = vec![column.clone()];
        self.filter_column = Some(column);
    }

    /// Toggle one column in the filter's projection set.
    pub fn toggle_projection(&mut self, column: &str) {
        toggle(&mut self.filter_projection, column);
    }

    /// Toggle one column in the multi-column selection.
    pub fn toggle_selected(&mut self, column: &str) {
        toggle(&mut self.selected_columns, column);
    }

    /// Run the filter described by the current inputs.
    ///
    /// On failure the message is shown and the previous result view is left
    /// untouched; nothing here invalidates the loaded table.
    pub fn apply_filter(&mut self) {
        let Some(file) = &self.file else { return };
        let Some(column) = self.filter_column.clone() else {
            return;
        };

        let spec = FilterSpec::new(column, self.filter_op, self.filter_value.clone())
            .with_projection(self.filter_projection.clone());

        match filter::apply_filter(&file.table, &spec) {
            Ok(result) => {
                log::info!(
                    "filter {} {} '{}' matched {} of {} rows",
                    spec.column,
                    spec.op,
                    spec.value,
                    result.n_rows(),
                    file.table.n_rows()
                );
                self.filter_result = Some(result);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("filter rejected: {e}");
                self.status_message = Some(format!("Filter error: {e}"));
            }
        }
    }
}

fn toggle(list: &mut Vec<String>, column: &str) {
    if let Some(pos) = list.iter().position(|c| c == column) {
        list.remove(pos);
    } else {
        list.push(column.to_string());
    }
}
