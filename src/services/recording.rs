use anyhow::Result;
use log::info;

use crate::api::ScoreServiceClient;
use crate::config::settings::AppConfig;
use crate::domain::models::GameRecord;

pub struct RecordingService {
    api_client: ScoreServiceClient,
}

impl RecordingService {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            api_client: ScoreServiceClient::new(&config.submit)?,
        })
    }

    pub async fn run(&self, token: &str, game: &GameRecord) -> Result<()> {
        info!("=== Recording Game ===\n");

        // Step 1: Validate the assembled payload
        game.check_uniform_stats()?;
        info!("  → Payload validated\n");

        // Step 2: Show what will be uploaded
        self.print_game(game)?;

        // Step 3: Submit and print the raw response
        let body = self.api_client.record_game(token, game).await?;
        info!("  → Game submitted\n");
        println!("{body}");

        info!("=== Recording Complete ===");
        Ok(())
    }

    fn print_game(&self, game: &GameRecord) -> Result<()> {
        let pretty = serde_json::to_string_pretty(game)?;
        println!("game to upload:");
        println!("{pretty}");
        Ok(())
    }
}
