use anyhow::Result;

use riichi_game_recorder::cli::Command;
use riichi_game_recorder::domain::models::GameRecord;
use riichi_game_recorder::{handle_record, handle_uma, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Record {
            token,
            date,
            hand_count,
            east,
            south,
            west,
            north,
        } => {
            let game = GameRecord::new(date, hand_count, east, south, west, north);
            handle_record(&token, game)
        }
        Command::Uma { ranks, uma } => handle_uma(ranks, uma),
    }
}
