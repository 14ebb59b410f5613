use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{PlayerId, UserId};

/// The authenticated account as reported by login, register and `/auth/me`.
///
/// Login and register report the account id as `user_id`, `/auth/me` as `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SessionUser {
    #[serde(default, alias = "user_id")]
    pub id: Option<UserId>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub player_name: Option<String>,
}

impl SessionUser {
    /// Player linked to this account, if the server reported one.
    /// The player name falls back to the username.
    pub fn linked_player(&self) -> Option<Player> {
        self.player_id.map(|id| Player {
            id,
            name: self
                .player_name
                .clone()
                .unwrap_or_else(|| self.username.clone()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerStats {
    pub name: String,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub games_lost: u32,
    #[serde(default)]
    pub total_games: u32,
}
