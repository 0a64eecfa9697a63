use anyhow::{Context, Result};
use log::{info, warn};

use crate::config::settings::SubmitSettings;
use crate::domain::models::{GameRecord, RecordGameRequest};
use crate::http::JsonClient;

/// Score service API client
pub struct ScoreServiceClient {
    client: JsonClient,
    endpoint: &'static str,
}

impl ScoreServiceClient {
    /// Create a new score service client
    pub fn new(settings: &SubmitSettings) -> Result<Self> {
        let client = JsonClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            endpoint: settings.endpoint,
        })
    }

    /// Submit one finished game and return the raw response body.
    ///
    /// The body is returned even for non-2xx statuses; the caller decides
    /// what to show. Transport errors propagate.
    pub async fn record_game(&self, token: &str, game: &GameRecord) -> Result<String> {
        let request = RecordGameRequest::new(token, game.clone());
        info!("Submitting game {} to {}", game.game_date, self.endpoint);

        let response = self.client.post_json(self.endpoint, &request).await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Score service returned status: {}", status);
        }

        let text = response
            .text()
            .await
            .context("Failed to read score service response body")?;
        Ok(text)
    }
}
