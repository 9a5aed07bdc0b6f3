// src/decode/records.rs

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Delimited records with their header row, in file order.
#[derive(Debug)]
pub struct RecordSet {
    /// Header names exactly as the file spells them.
    pub headers: Vec<String>,
    /// One entry per data record, fields positionally aligned with `headers`.
    pub rows: Vec<Vec<String>>,
}

/// Parse delimited text, first line as headers. Direct synchronous return;
/// the source bytes are already fully in memory.
pub fn parse_records(text: &str) -> Result<RecordSet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record =
            result.with_context(|| format!("CSV parse error at record {}", idx))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    Ok(RecordSet { headers, rows })
}
