use anyhow::{Context, Result};
use reqwest::Client;
use urlencoding::encode;

/// Fetch the raw practice-profile page for a username.
///
/// One GET, no retries; any network error or non-success status comes back
/// as an error for the route handler to map to a 404.
pub async fn fetch_profile(client: &Client, base_url: &str, username: &str) -> Result<String> {
    let profile_url = format!("{}/user/{}/practice/", base_url, encode(username));

    let response = client
        .get(&profile_url)
        .send()
        .await
        .context("Failed to send request to profile page")?
        .error_for_status()
        .context("Profile page returned an error status")?;

    response
        .text()
        .await
        .context("Failed to read profile page body")
}
