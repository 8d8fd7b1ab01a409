use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use reqwest::Client;

use crate::{config, types::Token};

/// Requests an application token via the OAuth 2.0 client-credentials grant.
///
/// Sends the client ID and secret as a `Basic` authorization header to the
/// Spotify token endpoint. The returned token carries no user context and is
/// valid for metadata lookups only, which is all the bot needs.
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Token)` - Fresh app token with its expiry and the time it was obtained
/// - `Err(String)` - Error message describing the failure
///
/// # Error Conditions
///
/// Common failures include:
/// - Invalid client ID or secret (401 from the token endpoint)
/// - Network connectivity issues
/// - Malformed response data
pub async fn request_token() -> Result<Token, String> {
    let credentials = format!(
        "{id}:{secret}",
        id = config::spotify_client_id(),
        secret = config::spotify_client_secret()
    );
    let basic = STANDARD.encode(credentials.as_bytes());

    let client = Client::new();
    let res = client
        .post(&config::spotify_apitoken_url())
        .header("Authorization", format!("Basic {}", basic))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = json["access_token"].as_str().unwrap_or_default().to_string();
    if access_token.is_empty() {
        return Err("token endpoint returned no access_token".to_string());
    }

    Ok(Token {
        access_token,
        token_type: json["token_type"].as_str().unwrap_or("Bearer").to_string(),
        expires_in: json["expires_in"].as_i64().unwrap_or(3600) as u64,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
