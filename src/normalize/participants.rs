// src/normalize/participants.rs

use anyhow::{anyhow, Result};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

use crate::decode::records::RecordSet;

/// Platforms with a verified-profile companion column in the roster.
pub const PLATFORMS: [&str; 5] = [
    "GeeksForGeeks",
    "Codeforces",
    "LeetCode",
    "CodeChef",
    "HackerRank",
];

/// Stray header row occasionally re-emitted as the first data record.
const HEADER_SENTINEL: &str = "RollNumber";

/// The raw value meaning "profile URL verified". Strict comparison; any
/// other spelling, including case variants, counts as unverified.
const URL_EXISTS_TRUE: &str = "True";

/// One roster entry. Handles stay strings; the `<Platform>URLExists`
/// companion columns are converted to real booleans at this boundary
/// (`"True"` → true, anything else → false).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantRow {
    #[serde(rename = "Handle")]
    pub handle: String,
    #[serde(rename = "GeeksForGeeksHandle")]
    pub geeksforgeeks_handle: String,
    #[serde(rename = "CodeforcesHandle")]
    pub codeforces_handle: String,
    #[serde(rename = "LeetCodeHandle")]
    pub leetcode_handle: String,
    #[serde(rename = "CodeChefHandle")]
    pub codechef_handle: String,
    #[serde(rename = "HackerRankHandle")]
    pub hackerrank_handle: String,
    #[serde(rename = "GeeksForGeeksURLExists")]
    pub geeksforgeeks_url_exists: bool,
    #[serde(rename = "CodeforcesURLExists")]
    pub codeforces_url_exists: bool,
    #[serde(rename = "LeetCodeURLExists")]
    pub leetcode_url_exists: bool,
    #[serde(rename = "CodeChefURLExists")]
    pub codechef_url_exists: bool,
    #[serde(rename = "HackerRankURLExists")]
    pub hackerrank_url_exists: bool,
}

/// Map parsed roster records into participant rows.
///
/// Headers are canonicalized by stripping spaces, so both the spaced
/// (`"GeeksForGeeks URL Exists"`) and concatenated spellings resolve to
/// the same column. Every expected column must be present.
pub fn normalize(records: &RecordSet) -> Result<Vec<ParticipantRow>> {
    let index: HashMap<String, usize> = records
        .headers
        .iter()
        .enumerate()
        .map(|(i, h)| (canonical_header(h), i))
        .collect();

    let column = |name: &str| -> Result<usize> {
        index
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("roster is missing expected column {}", name))
    };

    let handle_col = column("Handle")?;
    let mut handle_cols = [0usize; PLATFORMS.len()];
    let mut exists_cols = [0usize; PLATFORMS.len()];
    for (i, platform) in PLATFORMS.iter().enumerate() {
        handle_cols[i] = column(&format!("{}Handle", platform))?;
        exists_cols[i] = column(&format!("{}URLExists", platform))?;
    }

    let mut rows = Vec::with_capacity(records.rows.len());
    for (idx, record) in records.rows.iter().enumerate() {
        let field = |col: usize| record.get(col).map(String::as_str).unwrap_or("");

        let handle = field(handle_col).to_string();
        if idx == 0 && handle == HEADER_SENTINEL {
            debug!("dropping duplicated header row from roster data");
            continue;
        }

        rows.push(ParticipantRow {
            handle,
            geeksforgeeks_handle: field(handle_cols[0]).to_string(),
            codeforces_handle: field(handle_cols[1]).to_string(),
            leetcode_handle: field(handle_cols[2]).to_string(),
            codechef_handle: field(handle_cols[3]).to_string(),
            hackerrank_handle: field(handle_cols[4]).to_string(),
            geeksforgeeks_url_exists: url_exists(field(exists_cols[0])),
            codeforces_url_exists: url_exists(field(exists_cols[1])),
            leetcode_url_exists: url_exists(field(exists_cols[2])),
            codechef_url_exists: url_exists(field(exists_cols[3])),
            hackerrank_url_exists: url_exists(field(exists_cols[4])),
        });
    }

    Ok(rows)
}

fn canonical_header(raw: &str) -> String {
    raw.trim().replace(' ', "")
}

fn url_exists(raw: &str) -> bool {
    raw == URL_EXISTS_TRUE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::records::parse_records;

    const SPACED_HEADER: &str = "Handle,GeeksForGeeks Handle,Codeforces Handle,LeetCode Handle,CodeChef Handle,HackerRank Handle,GeeksForGeeks URL Exists,Codeforces URL Exists,LeetCode URL Exists,CodeChef URL Exists,HackerRank URL Exists";

    fn roster(lines: &[&str]) -> RecordSet {
        let mut text = String::from(SPACED_HEADER);
        for line in lines {
            text.push('\n');
            text.push_str(line);
        }
        text.push('\n');
        parse_records(&text).unwrap()
    }

    #[test]
    fn spaced_headers_canonicalize_to_concatenated_names() {
        let rows = normalize(&roster(&[
            "r1,g1,c1,l1,cc1,h1,True,False,True,False,True",
        ]))
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].handle, "r1");
        assert_eq!(rows[0].geeksforgeeks_handle, "g1");
        assert!(rows[0].geeksforgeeks_url_exists);
        assert!(!rows[0].codeforces_url_exists);
        assert!(rows[0].hackerrank_url_exists);
    }

    #[test]
    fn duplicated_header_row_is_dropped() {
        let rows = normalize(&roster(&[
            "RollNumber,GeeksForGeeks Handle,Codeforces Handle,LeetCode Handle,CodeChef Handle,HackerRank Handle,GeeksForGeeks URL Exists,Codeforces URL Exists,LeetCode URL Exists,CodeChef URL Exists,HackerRank URL Exists",
            "r1,g1,c1,l1,cc1,h1,True,True,True,True,True",
        ]))
        .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].handle, "r1");
    }

    #[test]
    fn sentinel_only_applies_to_the_first_record() {
        let rows = normalize(&roster(&[
            "r1,g1,c1,l1,cc1,h1,True,True,True,True,True",
            "RollNumber,g2,c2,l2,cc2,h2,False,False,False,False,False",
        ]))
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].handle, "RollNumber");
    }

    #[test]
    fn url_exists_is_a_strict_string_match() {
        assert!(url_exists("True"));
        assert!(!url_exists("true"));
        assert!(!url_exists("TRUE"));
        assert!(!url_exists("1"));
        assert!(!url_exists(""));
        assert!(!url_exists(" True"));
    }

    #[test]
    fn missing_expected_column_is_an_error() {
        let set = parse_records("Handle,GeeksForGeeks Handle\nr1,g1\n").unwrap();
        let err = normalize(&set).unwrap_err();
        assert!(err.to_string().contains("missing expected column"));
    }

    #[test]
    fn short_records_pad_with_defaults() {
        let rows = normalize(&roster(&["r1,g1,c1"])).unwrap();
        assert_eq!(rows[0].leetcode_handle, "");
        assert!(!rows[0].geeksforgeeks_url_exists);
    }

    #[test]
    fn serializes_under_canonical_field_names() {
        let rows = normalize(&roster(&[
            "r1,g1,c1,l1,cc1,h1,True,False,True,False,True",
        ]))
        .unwrap();
        let json = serde_json::to_value(&rows[0]).unwrap();
        assert_eq!(json["Handle"], "r1");
        assert_eq!(json["GeeksForGeeksURLExists"], true);
        assert_eq!(json["CodeforcesURLExists"], false);
    }
}
