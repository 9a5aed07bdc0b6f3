// src/fetch/mod.rs

use anyhow::{bail, Context, Result};
use reqwest::Client;

pub mod sources;
pub mod updated;

/// Issue one GET and return the raw response body.
///
/// No retries and no timeout: each source file is requested exactly once
/// per pipeline run. On a non-success status the error carries the status
/// plus whatever body the server sent, which may be empty.
pub async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;

    let status = resp.status();
    if !status.is_success() {
        // best-effort error payload
        let body = resp.text().await.unwrap_or_default();
        bail!("GET {} returned {}: {}", url, status, body);
    }

    let bytes = resp
        .bytes()
        .await
        .with_context(|| format!("reading body from {}", url))?;
    Ok(bytes.to_vec())
}

/// Same contract as [`get_bytes`], decoded as text.
pub async fn get_text(client: &Client, url: &str) -> Result<String> {
    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("GET {} failed", url))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        bail!("GET {} returned {}: {}", url, status, body);
    }

    resp.text()
        .await
        .with_context(|| format!("reading text from {}", url))
}
