use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of create-game and join-game requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlayerRequest {
    #[serde(rename = "playerId")]
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordResultRequest {
    #[serde(rename = "winnerId")]
    pub winner_id: PlayerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreatePlayerRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_ids_on_the_wire() {
        let join = serde_json::to_value(PlayerRequest { player_id: 7 }).unwrap();
        assert_eq!(join, serde_json::json!({"playerId": 7}));

        let result = serde_json::to_value(RecordResultRequest { winner_id: 3 }).unwrap();
        assert_eq!(result, serde_json::json!({"winnerId": 3}));
    }
}
