use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::domain::models::PlayerStats;
use crate::errors::RecorderError;
use crate::scoring::uma::SEATS;

#[derive(Parser, Debug)]
#[command(author, version, about = "record riichi league games")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Submit a finished game to the score service
    Record {
        /// Access token for the score service
        #[arg(short, long)]
        token: String,
        /// Game date as YYYYMMDD
        #[arg(short, long, value_parser = parse_game_date)]
        date: u32,
        /// Number of hands played (optional)
        #[arg(short = 'c', long = "hand_count")]
        hand_count: Option<u32>,
        /// East seat stats: name,points,riichi,agari,deal_in[,tenpai_on_draw,agari_pt_sum,deal_in_pt_sum]
        #[arg(short = 'E', long)]
        east: PlayerStats,
        /// South seat stats, same format as --east
        #[arg(short = 'S', long)]
        south: PlayerStats,
        /// West seat stats, same format as --east
        #[arg(short = 'W', long)]
        west: PlayerStats,
        /// North seat stats, same format as --east
        #[arg(short = 'N', long)]
        north: PlayerStats,
    },
    /// Compute tie-adjusted uma for the four seats
    Uma {
        /// Per-seat ranks in east,south,west,north order, e.g. 2,1,4,3
        #[arg(short, long, value_parser = parse_ranks)]
        ranks: [u8; SEATS],
        /// Uma table from best rank to worst
        #[arg(
            short,
            long,
            value_parser = parse_uma_table,
            default_value = "45,5,-15,-35",
            allow_hyphen_values = true
        )]
        uma: [f64; SEATS],
    },
}

fn parse_game_date(arg: &str) -> Result<u32, RecorderError> {
    let invalid = || RecorderError::InvalidDate(arg.to_string());
    let date: u32 = arg.parse().map_err(|_| invalid())?;

    let (year, month, day) = (date / 10_000, date / 100 % 100, date % 100);
    NaiveDate::from_ymd_opt(year as i32, month, day).ok_or_else(invalid)?;
    Ok(date)
}

fn parse_ranks(arg: &str) -> Result<[u8; SEATS], RecorderError> {
    let invalid = || RecorderError::InvalidRankList(arg.to_string());
    let ranks: Vec<u8> = arg
        .split(',')
        .map(|v| v.trim().parse().map_err(|_| invalid()))
        .collect::<Result<_, _>>()?;
    ranks.try_into().map_err(|_| invalid())
}

fn parse_uma_table(arg: &str) -> Result<[f64; SEATS], RecorderError> {
    let invalid = || RecorderError::InvalidUmaTable(arg.to_string());
    let table: Vec<f64> = arg
        .split(',')
        .map(|v| v.trim().parse().map_err(|_| invalid()))
        .collect::<Result<_, _>>()?;
    table.try_into().map_err(|_| invalid())
}
