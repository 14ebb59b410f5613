use tracker_core::ValidationError;

/// Message used when a failed response carries no `error` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "API call failed";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{message}")]
    Request { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_server_message() {
        let error = ClientError::Request {
            status: 404,
            message: "Game not found".to_string(),
        };
        assert_eq!(error.to_string(), "Game not found");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let error = ClientError::from(ValidationError::NoWinnerSelected);
        assert!(matches!(error, ClientError::Validation(_)));
        assert_eq!(error.to_string(), "Please select a winner");
    }
}
