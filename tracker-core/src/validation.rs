use thiserror::Error;
use tracker_types::{CreatePlayerRequest, LoginRequest, PlayerId, RegisterRequest};

use crate::Forms;

pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const GAME_CODE_LENGTH: usize = 4;

/// Input rejected before any request is made. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter username and password")]
    MissingCredentials,
    #[error("Please fill in all fields")]
    MissingRegistrationFields,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please enter a valid 4-letter game code")]
    InvalidGameCode,
    #[error("Please create a player first")]
    NoPlayer,
    #[error("Please select a winner")]
    NoWinnerSelected,
    #[error("Please enter a player name")]
    MissingPlayerName,
    #[error("Player {0} is not in this game")]
    NotInGame(PlayerId),
    #[error("Player {0} is not one of your players")]
    UnknownPlayer(PlayerId),
    #[error("No active game")]
    NoActiveGame,
}

/// Build a login request from the login form. The username is trimmed, the password is not.
pub fn validate_login(forms: &Forms) -> Result<LoginRequest, ValidationError> {
    let username = forms.login_username.trim();
    let password = forms.login_password.as_str();

    if username.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }

    Ok(LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_register(forms: &Forms) -> Result<RegisterRequest, ValidationError> {
    let username = forms.register_username.trim();
    let email = forms.register_email.trim();
    let password = forms.register_password.as_str();

    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingRegistrationFields);
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

/// Trim and uppercase a game code, rejecting anything that is not exactly four characters.
pub fn normalize_game_code(input: &str) -> Result<String, ValidationError> {
    let code = input.trim().to_uppercase();

    if code.chars().count() != GAME_CODE_LENGTH {
        return Err(ValidationError::InvalidGameCode);
    }

    Ok(code)
}

pub fn validate_player_name(input: &str) -> Result<CreatePlayerRequest, ValidationError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(ValidationError::MissingPlayerName);
    }

    Ok(CreatePlayerRequest {
        name: name.to_string(),
    })
}
