// src/fetch/sources.rs

use url::Url;

/// The published leaderboard repository on GitHub.
pub const REPO_OWNER: &str = "gabyah92";
pub const REPO_NAME: &str = "CMRIT2026Leaderboard";

/// Workbook with the scored leaderboard, regenerated by the scraper runs.
pub const LEADERBOARD_PATH: &str = "Leaderboards/CurrentCMRITLeaderboard2026.xlsx";

/// Participant roster with per-platform handles and URL verification flags.
pub const PARTICIPANTS_PATH: &str = "src/main/resources/participant_details.csv";

/// Raw-content URL for a file on the repository's main branch.
pub fn raw_file_url(path: &str) -> String {
    format!(
        "https://raw.githubusercontent.com/{}/{}/main/{}",
        REPO_OWNER, REPO_NAME, path
    )
}

/// Commits-API URL returning the single most recent commit touching `path`.
pub fn commits_url(path: &str) -> String {
    let mut url = Url::parse(&format!(
        "https://api.github.com/repos/{}/{}/commits",
        REPO_OWNER, REPO_NAME
    ))
    .expect("commits API base URL should be valid");
    url.query_pairs_mut()
        .append_pair("path", path)
        .append_pair("page", "1")
        .append_pair("per_page", "1");
    url.into()
}
