pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod scoring;
pub mod services;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::domain::models::{GameRecord, Seat};
use crate::scoring::uma::SEATS;
use crate::services::recording::RecordingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_record(token: &str, game: GameRecord) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::new();
        let service = RecordingService::new(&config)?;
        service.run(token, &game).await
    })
}

pub fn handle_uma(ranks: [u8; SEATS], uma: [f64; SEATS]) -> Result<()> {
    let adjusted = scoring::adjusted_uma(ranks, uma)?;
    for (seat, value) in Seat::ALL.into_iter().zip(adjusted) {
        println!("{seat}: {value:+}");
    }
    Ok(())
}
