use tracker_types::PlayerId;

/// Draft input held between user edits and the action that submits it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Forms {
    pub login_username: String,
    pub login_password: String,
    pub register_username: String,
    pub register_email: String,
    pub register_password: String,
    pub game_code: String,
    pub winner: Option<PlayerId>,
    pub new_player_name: String,
}

impl Forms {
    /// Game codes are uppercased as they are typed.
    pub fn set_game_code(&mut self, input: &str) {
        self.game_code = input.to_uppercase();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
