use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracker_types::{
    CreatePlayerRequest, CreatedGame, GameDetails, GameResult, LoginRequest, Player, PlayerId,
    PlayerRequest, PlayerStats, RecordResultRequest, RegisterRequest, SessionUser,
};

use crate::error::ClientError;
use crate::transport::Transport;

/// Typed endpoints of the tracker API. Exactly one attempt per call.
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Perform one request and decode the response body.
    pub async fn call<R, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body.map(serde_json::to_value).transpose()?;
        let value = self.transport.request(method, path, body).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, ClientError> {
        self.call::<R, Value>(Method::GET, path, None).await
    }

    async fn post<R, B>(&self, path: &str, body: Option<&B>) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.call(Method::POST, path, body).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<SessionUser, ClientError> {
        self.post("/auth/login", Some(request)).await
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<SessionUser, ClientError> {
        self.post("/auth/register", Some(request)).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        self.post::<Value, Value>("/auth/logout", None).await?;
        Ok(())
    }

    pub async fn me(&self) -> Result<SessionUser, ClientError> {
        self.get("/auth/me").await
    }

    pub async fn list_players(&self) -> Result<Vec<Player>, ClientError> {
        self.get("/players").await
    }

    pub async fn create_player(&self, request: &CreatePlayerRequest) -> Result<Player, ClientError> {
        self.post("/players", Some(request)).await
    }

    pub async fn create_game(&self, player_id: PlayerId) -> Result<CreatedGame, ClientError> {
        self.post("/games", Some(&PlayerRequest { player_id })).await
    }

    pub async fn join_game(&self, code: &str, player_id: PlayerId) -> Result<(), ClientError> {
        self.post::<Value, _>(&format!("/games/{}/join", code), Some(&PlayerRequest { player_id }))
            .await?;
        Ok(())
    }

    pub async fn game(&self, code: &str) -> Result<GameDetails, ClientError> {
        self.get(&format!("/games/{}", code)).await
    }

    pub async fn record_result(&self, code: &str, winner_id: PlayerId) -> Result<(), ClientError> {
        self.post::<Value, _>(
            &format!("/games/{}/result", code),
            Some(&RecordResultRequest { winner_id }),
        )
        .await?;
        Ok(())
    }

    pub async fn results(&self, code: &str) -> Result<Vec<GameResult>, ClientError> {
        self.get(&format!("/games/{}/results", code)).await
    }

    pub async fn player_stats(&self, player_id: PlayerId) -> Result<PlayerStats, ClientError> {
        self.get(&format!("/players/{}/stats", player_id)).await
    }
}
