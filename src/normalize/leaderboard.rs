// src/normalize/leaderboard.rs

use anyhow::Result;
use serde::Serialize;

use crate::decode::workbook::Sheet;

/// First data row; row 1 of the workbook is the header row.
const FIRST_DATA_ROW: u32 = 2;

/// One scored leaderboard entry. Serde renames are the canonical field
/// names the grid's column definitions bind to, matching the workbook's
/// column order A..N.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    #[serde(rename = "Rank")]
    pub rank: String,
    #[serde(rename = "Handle")]
    pub handle: String,
    #[serde(rename = "Codeforces_Handle")]
    pub codeforces_handle: String,
    #[serde(rename = "Codeforces_Rating")]
    pub codeforces_rating: String,
    #[serde(rename = "GFG_Handle")]
    pub gfg_handle: String,
    #[serde(rename = "GFG_Contest_Score")]
    pub gfg_contest_score: String,
    #[serde(rename = "GFG_Practice_Score")]
    pub gfg_practice_score: String,
    #[serde(rename = "Leetcode_Handle")]
    pub leetcode_handle: String,
    #[serde(rename = "Leetcode_Rating")]
    pub leetcode_rating: String,
    #[serde(rename = "Codechef_Handle")]
    pub codechef_handle: String,
    #[serde(rename = "Codechef_Rating")]
    pub codechef_rating: String,
    #[serde(rename = "HackerRank_Handle")]
    pub hackerrank_handle: String,
    #[serde(rename = "HackerRank_Practice_Score")]
    pub hackerrank_practice_score: String,
    #[serde(rename = "Percentile")]
    pub percentile: String,
}

/// Map the decoded sheet into leaderboard rows.
///
/// Scans from row 2 up to the decoder's row bound. A row is consumed iff
/// its anchor cell (column A, the rank) is non-empty; the first empty
/// anchor terminates the scan, so rows past a gap are never included.
/// A missing or empty mapped cell inside a consumed row yields the empty
/// string rather than an error.
pub fn normalize(sheet: &Sheet) -> Result<Vec<LeaderboardRow>> {
    let mut rows = Vec::new();

    for row in FIRST_DATA_ROW..=sheet.last_row() {
        let rank = match sheet.value("A", row) {
            Some(v) if !v.trim().is_empty() => v,
            _ => break,
        };
        let cell = |column: &str| sheet.value(column, row).unwrap_or_default();

        rows.push(LeaderboardRow {
            rank,
            handle: cell("B"),
            codeforces_handle: cell("C"),
            codeforces_rating: cell("D"),
            gfg_handle: cell("E"),
            gfg_contest_score: cell("F"),
            gfg_practice_score: cell("G"),
            leetcode_handle: cell("H"),
            leetcode_rating: cell("I"),
            codechef_handle: cell("J"),
            codechef_rating: cell("K"),
            hackerrank_handle: cell("L"),
            hackerrank_practice_score: cell("M"),
            percentile: cell("N"),
        });
    }

    Ok(rows)
}
