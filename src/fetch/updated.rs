// src/fetch/updated.rs
//
// "Last updated" metadata lookup. This is an isolated failure domain:
// whatever goes wrong here is downgraded to a placeholder label and never
// aborts the main ingestion pipelines.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use super::sources;

pub const NO_COMMITS_LABEL: &str = "No commits found";
pub const FETCH_ERROR_LABEL: &str = "Error fetching date";

/// One entry of the GitHub commits listing; only the committer date is kept.
#[derive(Debug, Deserialize)]
pub struct CommitEntry {
    pub commit: CommitInfo,
}

#[derive(Debug, Deserialize)]
pub struct CommitInfo {
    pub committer: Committer,
}

#[derive(Debug, Deserialize)]
pub struct Committer {
    pub date: DateTime<Utc>,
}

/// Human-readable label for when the leaderboard workbook last changed.
///
/// Never fails: an empty commit list or any transport/decode error is
/// replaced by the corresponding placeholder string.
pub async fn last_updated_label(client: &Client) -> String {
    label_for(fetch_latest_commits(client).await)
}

fn label_for(outcome: Result<Vec<CommitEntry>>) -> String {
    match outcome {
        Ok(commits) => label_from_commits(&commits),
        Err(e) => {
            warn!(error = %e, "last-updated lookup failed");
            FETCH_ERROR_LABEL.to_string()
        }
    }
}

async fn fetch_latest_commits(client: &Client) -> Result<Vec<CommitEntry>> {
    let url = sources::commits_url(sources::LEADERBOARD_PATH);
    let resp = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?
        .error_for_status()
        .with_context(|| format!("non-success status from {}", url))?;
    resp.json::<Vec<CommitEntry>>()
        .await
        .with_context(|| format!("decoding commit listing from {}", url))
}

fn label_from_commits(commits: &[CommitEntry]) -> String {
    match commits.first() {
        Some(entry) => format_commit_date(entry.commit.committer.date),
        None => NO_COMMITS_LABEL.to_string(),
    }
}

/// `"January 5, 2026 at 10:30:15 AM"`, matching the page's date element.
fn format_commit_date(date: DateTime<Utc>) -> String {
    format!(
        "{} at {}",
        date.format("%B %-d, %Y"),
        date.format("%-I:%M:%S %p")
    )
}
