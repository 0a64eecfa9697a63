use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RecorderError;

/// The four fixed player positions, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seat {
    East,
    South,
    West,
    North,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::East, Seat::South, Seat::West, Seat::North];

    pub fn as_str(&self) -> &'static str {
        match self {
            Seat::East => "east",
            Seat::South => "south",
            Seat::West => "west",
            Seat::North => "north",
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-seat result line for one game.
///
/// The wire format has two shapes: the 5-field form stops at `deal_in`, the
/// 8-field form adds the `tenpai_on_draw`/`agari_pt_sum`/`deal_in_pt_sum`
/// block. Absent fields are omitted from the JSON, never serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub name: String,
    pub points: i64,
    pub riichi: u32,
    pub agari: u32,
    pub deal_in: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenpai_on_draw: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agari_pt_sum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deal_in_pt_sum: Option<i64>,
}

impl PlayerStats {
    pub fn is_extended(&self) -> bool {
        self.tenpai_on_draw.is_some()
    }
}

impl FromStr for PlayerStats {
    type Err = RecorderError;

    /// Parses `name,points,riichi,agari,deal_in`, optionally extended with
    /// `,tenpai_on_draw,agari_pt_sum,deal_in_pt_sum`.
    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let vals: Vec<&str> = arg.split(',').collect();
        if vals.len() != 5 && vals.len() != 8 {
            return Err(RecorderError::StatsFieldCount {
                input: arg.to_string(),
                found: vals.len(),
            });
        }

        let mut stats = PlayerStats {
            name: vals[0].trim().to_string(),
            points: parse_stat(vals[1], arg, "points")?,
            riichi: parse_stat(vals[2], arg, "riichi")?,
            agari: parse_stat(vals[3], arg, "agari")?,
            deal_in: parse_stat(vals[4], arg, "deal_in")?,
            tenpai_on_draw: None,
            agari_pt_sum: None,
            deal_in_pt_sum: None,
        };

        if vals.len() == 8 {
            stats.tenpai_on_draw = Some(parse_stat(vals[5], arg, "tenpai_on_draw")?);
            stats.agari_pt_sum = Some(parse_stat(vals[6], arg, "agari_pt_sum")?);
            stats.deal_in_pt_sum = Some(parse_stat(vals[7], arg, "deal_in_pt_sum")?);
        }

        Ok(stats)
    }
}

fn parse_stat<T: FromStr>(raw: &str, input: &str, field: &'static str) -> Result<T, RecorderError> {
    raw.trim().parse().map_err(|_| RecorderError::StatsFieldValue {
        input: input.to_string(),
        field,
    })
}

/// One finished game as submitted to the score service.
///
/// Field order matches the wire payload: `game_hand_count` sits between the
/// date and the seats and is omitted entirely when not supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game_date: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_hand_count: Option<u32>,
    pub east: PlayerStats,
    pub south: PlayerStats,
    pub west: PlayerStats,
    pub north: PlayerStats,
}

impl GameRecord {
    pub fn new(
        game_date: u32,
        game_hand_count: Option<u32>,
        east: PlayerStats,
        south: PlayerStats,
        west: PlayerStats,
        north: PlayerStats,
    ) -> Self {
        Self {
            game_date,
            game_hand_count,
            east,
            south,
            west,
            north,
        }
    }

    pub fn seats(&self) -> [(Seat, &PlayerStats); 4] {
        [
            (Seat::East, &self.east),
            (Seat::South, &self.south),
            (Seat::West, &self.west),
            (Seat::North, &self.north),
        ]
    }

    /// All four seats must use the same stats form before submission.
    pub fn check_uniform_stats(&self) -> Result<(), RecorderError> {
        let extended = self
            .seats()
            .iter()
            .filter(|(_, stats)| stats.is_extended())
            .count();
        if extended == 0 || extended == 4 {
            Ok(())
        } else {
            Err(RecorderError::MixedStatsVariants)
        }
    }
}

// --- API Request Structures ---

pub const ACTION_RECORD_GAME: &str = "record_game";

/// Request envelope understood by the score service.
#[derive(Debug, Clone, Serialize)]
pub struct RecordGameRequest {
    pub action: &'static str,
    pub token: String,
    pub game: GameRecord,
}

impl RecordGameRequest {
    pub fn new(token: &str, game: GameRecord) -> Self {
        Self {
            action: ACTION_RECORD_GAME,
            token: token.to_string(),
            game,
        }
    }
}
