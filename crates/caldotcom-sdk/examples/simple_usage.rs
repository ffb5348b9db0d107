//! Minimal example: build a client from the environment and show the
//! authenticated user's profile.
//!
//! Run with `CALDOTCOM_API_KEY=cal_live_... cargo run --example simple_usage`.

use caldotcom_sdk::{CalClient, CalResult};

#[tokio::main]
async fn main() -> CalResult<()> {
    let client = CalClient::from_env()?;

    let profile = client.me().get().await?;
    println!(
        "{} <{}> ({}h clock, {})",
        profile.username, profile.email, profile.time_format, profile.time_zone
    );

    Ok(())
}
