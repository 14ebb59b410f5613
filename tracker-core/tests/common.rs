#![allow(dead_code)]

use tracker_core::{ActiveGame, Forms, Session};
use tracker_types::{GameDetails, GameResult, Player, SessionUser};

/// Creates a session user, optionally linked to a player
pub fn create_test_user(username: &str, player_id: Option<i64>) -> SessionUser {
    SessionUser {
        id: Some(1),
        username: username.to_string(),
        email: Some(format!("{}@test.com", username.to_lowercase())),
        player_id,
        player_name: player_id.map(|_| username.to_string()),
    }
}

pub fn create_test_player(id: i64, name: &str) -> Player {
    Player {
        id,
        name: name.to_string(),
    }
}

pub fn create_test_result(winner: &str, loser: &str, created_at: &str) -> GameResult {
    GameResult {
        id: None,
        winner_name: winner.to_string(),
        loser_name: loser.to_string(),
        created_at: created_at.to_string(),
    }
}

pub fn create_game_details(code: &str, players: Vec<Player>) -> GameDetails {
    GameDetails {
        code: code.to_string(),
        status: Some("active".to_string()),
        created_at: Some("2024-03-01T18:00:00".to_string()),
        players,
    }
}

/// A signed-in session with player 7 sitting at table `code`
pub fn create_session_with_game(code: &str) -> Session {
    let mut session = Session::new();
    session.sign_in(create_test_user("alice", Some(7)));
    session.game = Some(ActiveGame::stub(code));
    session.replace_game(create_game_details(
        code,
        vec![create_test_player(7, "alice"), create_test_player(3, "bob")],
    ));
    session
}

pub fn filled_login_form(username: &str, password: &str) -> Forms {
    Forms {
        login_username: username.to_string(),
        login_password: password.to_string(),
        ..Forms::default()
    }
}
