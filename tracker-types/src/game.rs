use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::user::Player;

/// Response to `POST /games`; the server issues the short code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatedGame {
    #[serde(default)]
    pub id: Option<i64>,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameDetails {
    pub code: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>, // ISO 8601 string
    #[serde(default)]
    pub players: Vec<Player>,
}

/// One recorded loss: a result is stored per (winner, loser) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameResult {
    #[serde(default)]
    pub id: Option<i64>,
    pub winner_name: String,
    pub loser_name: String,
    pub created_at: String, // ISO 8601 string, no offset
}
