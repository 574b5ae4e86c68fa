//! Lists an organization's teams and the members of one of them.
//!
//! Run with: `GITHUB_TOKEN=... cargo run --example list_teams -- acme eng`

use anyhow::{Context, Result};
use github_teams::{ClientConfig, HttpTransport, Teams};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut args = std::env::args().skip(1);
    let org = args.next().context("usage: list_teams <org> [team]")?;
    let team = args.next();

    let config = ClientConfig {
        enable_logging: true,
        ..ClientConfig::from_env()
    };
    let teams = Teams::new(HttpTransport::with_config(config)?);

    let listing: Value = teams.all(&org).await?.json()?;
    for entry in listing.as_array().into_iter().flatten() {
        println!("{}\t{}", entry["slug"].as_str().unwrap_or("?"), entry["name"]);
    }

    if let Some(team) = team {
        let members: Value = teams.members(&team, Some(&org)).await?.json()?;
        for member in members.as_array().into_iter().flatten() {
            println!("  {}", member["login"].as_str().unwrap_or("?"));
        }
    }

    Ok(())
}
