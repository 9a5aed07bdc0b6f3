use anyhow::Result;
use boardscraper::{
    decode, fetch,
    fetch::sources,
    grid::GridHandle,
    normalize,
};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // GitHub rejects anonymous clients without a User-Agent
    let client = Client::builder()
        .user_agent(concat!("boardscraper/", env!("CARGO_PKG_VERSION")))
        .build()?;

    // ─── 2) last-updated metadata (isolated failure domain) ──────────
    let updated = fetch::updated::last_updated_label(&client).await;
    info!(label = %updated, "leaderboard last updated");

    // ─── 3) leaderboard pipeline: workbook → rows → grid ─────────────
    let workbook_url = sources::raw_file_url(sources::LEADERBOARD_PATH);
    info!(url = %workbook_url, "fetching leaderboard workbook");
    let bytes = fetch::get_bytes(&client, &workbook_url).await?;
    let sheet = decode::workbook::first_sheet(&bytes)?;
    let rows = normalize::leaderboard::normalize(&sheet)?;

    let mut leaderboard = GridHandle::new("leaderboard");
    leaderboard.set_row_data(&rows)?;
    info!(rows = leaderboard.row_count(), "leaderboard grid populated");

    // ─── 4) participant pipeline: CSV → rows → grid ──────────────────
    let roster_url = sources::raw_file_url(sources::PARTICIPANTS_PATH);
    info!(url = %roster_url, "fetching participant roster");
    let text = fetch::get_text(&client, &roster_url).await?;
    let records = decode::records::parse_records(&text)?;
    let participants_rows = normalize::participants::normalize(&records)?;

    let mut participants = GridHandle::new("participants");
    participants.set_row_data(&participants_rows)?;
    info!(rows = participants.row_count(), "participant grid populated");

    // ─── 5) emit the data-binding payloads ───────────────────────────
    println!("{}", leaderboard.render_json()?);
    println!("{}", participants.render_json()?);

    info!("all done");
    Ok(())
}
