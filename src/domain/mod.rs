pub mod models;

pub use models::{GameRecord, PlayerStats, RecordGameRequest, Seat};
