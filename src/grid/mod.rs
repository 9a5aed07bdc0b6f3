// src/grid/mod.rs
//
// Seam to the display widget. The widget itself (sorting UI, filtering,
// pagination, cell styling) lives outside this crate; what crosses the
// boundary is a finished row collection under the `rowData` binding.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Explicit handle for one grid instance. Passed to whichever function
/// needs to push data; there is no process-wide grid reference.
pub struct GridHandle {
    name: String,
    row_data: Vec<Value>,
}

impl GridHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            row_data: Vec::new(),
        }
    }

    /// Replace the bound row collection wholesale.
    pub fn set_row_data<T: Serialize>(&mut self, rows: &[T]) -> Result<()> {
        self.row_data = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<_, _>>()
            .with_context(|| format!("serializing rows for grid {}", self.name))?;
        info!(grid = %self.name, rows = self.row_data.len(), "row data bound");
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_data.len()
    }

    /// The widget's data-binding payload: `{ "rowData": [...] }`.
    pub fn render_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&serde_json::json!({ "rowData": self.row_data }))
            .with_context(|| format!("rendering grid {}", self.name))
    }
}

/// Comparator for integer-valued columns: numeric subtraction, so `"10"`
/// sorts after `"9"`. A failed parse propagates as NaN, which sorts
/// unpredictably; that matches the column data contract.
pub fn number_sort(a: &str, b: &str) -> f64 {
    let parse = |s: &str| s.trim().parse::<i64>().map(|n| n as f64).unwrap_or(f64::NAN);
    parse(a) - parse(b)
}

/// Comparator for fractional columns such as the percentile: parse as
/// float, then subtract. Same NaN behavior as [`number_sort`].
pub fn float_sort(a: &str, b: &str) -> f64 {
    let parse = |s: &str| s.trim().parse::<f64>().unwrap_or(f64::NAN);
    parse(a) - parse(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Row {
        #[serde(rename = "Rank")]
        rank: String,
    }

    #[test]
    fn number_sort_is_numeric_not_lexicographic() {
        assert!(number_sort("10", "9") > 0.0);
        assert!(number_sort("9", "10") < 0.0);
        assert_eq!(number_sort("7", "7"), 0.0);
    }

    #[test]
    fn float_sort_compares_fractions() {
        assert!(float_sort("3.5", "3.14") > 0.0);
        assert!(float_sort("3.14", "3.5") < 0.0);
    }

    #[test]
    fn unparseable_input_propagates_nan() {
        assert!(number_sort("n/a", "9").is_nan());
        assert!(float_sort("", "3.14").is_nan());
    }

    #[test]
    fn render_json_exposes_rows_under_row_data() {
        let mut grid = GridHandle::new("leaderboard");
        grid.set_row_data(&[Row { rank: "1".into() }]).unwrap();
        assert_eq!(grid.row_count(), 1);

        let payload: serde_json::Value =
            serde_json::from_str(&grid.render_json().unwrap()).unwrap();
        assert_eq!(payload["rowData"][0]["Rank"], "1");
    }

    #[test]
    fn set_row_data_replaces_rather_than_appends() {
        let mut grid = GridHandle::new("leaderboard");
        grid.set_row_data(&[Row { rank: "1".into() }, Row { rank: "2".into() }])
            .unwrap();
        grid.set_row_data(&[Row { rank: "3".into() }]).unwrap();
        assert_eq!(grid.row_count(), 1);
    }
}
