use std::path::PathBuf;

use chrono::Utc;

use crate::{spotify, types::Token};

pub struct TokenManager {
    token: Option<Token>,
}

impl TokenManager {
    pub fn new() -> Self {
        TokenManager { token: None }
    }

    pub async fn load() -> Result<Self, String> {
        let path = Self::token_path();
        let content = async_fs::read_to_string(&path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        return Ok(Self { token: Some(token) });
    }

    /// Loads the cached token, falling back to an empty manager. A fresh
    /// token is requested lazily on first use.
    pub async fn load_or_default() -> Self {
        match Self::load().await {
            Ok(manager) => manager,
            Err(_) => Self::new(),
        }
    }

    pub async fn persist(&self) -> Result<(), String> {
        let Some(token) = &self.token else {
            return Ok(());
        };

        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    /// Returns a usable access token, requesting a new one from the token
    /// endpoint when the cached one is missing or about to expire.
    pub async fn get_valid_token(&mut self) -> Result<String, String> {
        if self.is_expired() {
            let new_token = spotify::auth::request_token().await?;
            self.token = Some(new_token);
            let _ = self.persist().await;
        }

        match &self.token {
            Some(token) => Ok(token.access_token.clone()),
            None => Err("no token available".to_string()),
        }
    }

    fn is_expired(&self) -> bool {
        match &self.token {
            Some(token) => {
                let now = Utc::now().timestamp() as u64;
                now >= (token.obtained_at + token.expires_in).saturating_sub(240)
            }
            None => true,
        }
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spotigram/cache/token.json");
        path
    }
}
