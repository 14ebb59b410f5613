use tracing::info;
use tracker_types::{GameDetails, GameResult, Player, SessionUser};

use crate::Section;

/// The game the player is currently looking at.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveGame {
    pub code: String,
    pub players: Vec<Player>,
    pub results: Vec<GameResult>,
}

impl ActiveGame {
    /// A game known only by its code, before its details have been fetched.
    pub fn stub(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    pub fn has_player(&self, player_id: tracker_types::PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }
}

/// Who is signed in, which player they act as, and which game is open.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user: Option<SessionUser>,
    pub player: Option<Player>,
    pub game: Option<ActiveGame>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the signed-in identity and return the section to show next:
    /// game management when the account has a linked player, player setup otherwise.
    /// The previous player and game never carry over to the new user.
    pub fn sign_in(&mut self, user: SessionUser) -> Section {
        let player = user.linked_player();
        info!(
            "Signed in as {} (player: {:?})",
            user.username,
            player.as_ref().map(|p| p.id)
        );

        let section = match player {
            Some(_) => Section::GameManagement,
            None => Section::PlayerSetup,
        };
        self.user = Some(user);
        self.player = player;
        self.game = None;
        section
    }

    pub fn set_player(&mut self, player: Player) {
        info!("Acting as player {} ({})", player.name, player.id);
        self.player = Some(player);
    }

    pub fn clear(&mut self) {
        self.user = None;
        self.player = None;
        self.game = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn game_code(&self) -> Option<&str> {
        self.game.as_ref().map(|g| g.code.as_str())
    }

    /// Replace the active game with freshly fetched details. Previously loaded results are dropped.
    pub fn replace_game(&mut self, details: GameDetails) {
        self.game = Some(ActiveGame {
            code: details.code.to_uppercase(),
            players: details.players,
            results: Vec::new(),
        });
    }

    /// Store results for `code`. Returns false if that game is no longer the active one.
    pub fn set_results(&mut self, code: &str, results: Vec<GameResult>) -> bool {
        match self.game.as_mut() {
            Some(game) if game.code == code => {
                game.results = results;
                true
            }
            _ => false,
        }
    }

    pub fn leave_game(&mut self) {
        if let Some(game) = self.game.take() {
            info!("Left game {}", game.code);
        }
    }
}
