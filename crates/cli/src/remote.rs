use reqwest::Client;
use thiserror::Error;
use voicecart_protocol::UserState;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("state endpoint returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Client for the persistence service. Callers decide what a failure
/// means; this type only reports it.
#[derive(Debug, Clone)]
pub struct StateClient {
    http: Client,
    base_url: String,
    user_id: String,
}

impl StateClient {
    pub fn new(base_url: &str, user_id: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.to_string(),
        }
    }

    fn state_url(&self) -> String {
        format!("{}/api/state", self.base_url)
    }

    pub async fn load(&self) -> Result<UserState, SyncError> {
        let response = self
            .http
            .get(self.state_url())
            .query(&[("userId", self.user_id.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }
        Ok(response.json().await?)
    }

    pub async fn save(&self, state: &UserState) -> Result<(), SyncError> {
        let response = self
            .http
            .post(self.state_url())
            .query(&[("userId", self.user_id.as_str())])
            .json(state)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SyncError::Status(response.status()));
        }
        Ok(())
    }
}
