use std::time::Duration;

use tracing::{debug, error, info};
use tracker_core::{
    ActiveGame, AuthForm, Forms, NotificationCenter, Section, Session, StatsView, ValidationError,
    ViewModel, ViewState, normalize_game_code, validate_login, validate_player_name,
    validate_register,
};
use tracker_types::{PlayerId, SessionUser};

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::transport::Transport;

/// Owns the session and everything on screen. Each operation takes `&mut self`,
/// so a response is always applied before the next operation starts.
///
/// Every failure has already been reported as an error notification by the
/// time an operation returns `Err`.
pub struct SessionController<T> {
    api: ApiClient<T>,
    session: Session,
    forms: Forms,
    view: ViewState,
    notifications: NotificationCenter,
}

impl<T: Transport> SessionController<T> {
    pub fn new(transport: T, notification_ttl: Duration) -> Self {
        Self {
            api: ApiClient::new(transport),
            session: Session::new(),
            forms: Forms::default(),
            view: ViewState::default(),
            notifications: NotificationCenter::new(notification_ttl),
        }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn forms(&self) -> &Forms {
        &self.forms
    }

    pub fn forms_mut(&mut self) -> &mut Forms {
        &mut self.forms
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn section(&self) -> Section {
        self.view.section
    }

    pub fn view_model(&mut self) -> ViewModel {
        let notifications = self.notifications.active();
        ViewModel::build(&self.session, &self.forms, &self.view, notifications)
    }

    pub fn show_section(&mut self, section: Section) {
        self.view.show(section);
    }

    pub fn show_login_form(&mut self) {
        self.view.auth_form = AuthForm::Login;
    }

    pub fn show_register_form(&mut self) {
        self.view.auth_form = AuthForm::Register;
    }

    /// Back to game management, closing the active game.
    pub fn show_game_management(&mut self) {
        self.session.leave_game();
        self.forms.winner = None;
        self.view.show(Section::GameManagement);
    }

    fn reject(&mut self, error: ValidationError) -> ClientError {
        self.notifications.error(error.to_string());
        error.into()
    }

    fn report<V>(&mut self, result: Result<V, ClientError>) -> Result<V, ClientError> {
        if let Err(e) = &result {
            self.notifications.error(e.to_string());
        }
        result
    }

    fn require_player(&mut self) -> Result<PlayerId, ClientError> {
        match self.session.player.as_ref().map(|p| p.id) {
            Some(player_id) => Ok(player_id),
            None => Err(self.reject(ValidationError::NoPlayer)),
        }
    }

    fn require_game(&mut self) -> Result<String, ClientError> {
        match self.session.game_code().map(str::to_string) {
            Some(code) => Ok(code),
            None => Err(self.reject(ValidationError::NoActiveGame)),
        }
    }

    fn sign_in(&mut self, user: SessionUser) {
        let section = self.session.sign_in(user);
        self.view.show(section);
    }

    pub async fn check_auth_status(&mut self) {
        let result = self.api.me().await;
        match self.report(result) {
            Ok(user) => self.sign_in(user),
            Err(e) => {
                debug!("No active session: {}", e);
                self.session.clear();
                self.view.show(Section::Auth);
            }
        }
    }

    pub async fn login(&mut self) -> Result<(), ClientError> {
        let request = validate_login(&self.forms).map_err(|e| self.reject(e))?;

        let result = self.api.login(&request).await;
        let user = self.report(result).inspect_err(|e| error!("Login failed: {}", e))?;

        self.notifications
            .success(format!("Welcome back, {}!", user.username));
        self.sign_in(user);
        Ok(())
    }

    pub async fn register(&mut self) -> Result<(), ClientError> {
        let request = validate_register(&self.forms).map_err(|e| self.reject(e))?;

        let result = self.api.register(&request).await;
        let user = self
            .report(result)
            .inspect_err(|e| error!("Registration failed: {}", e))?;

        self.notifications
            .success(format!("Account created! Welcome, {}!", user.username));
        self.sign_in(user);
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<(), ClientError> {
        let result = self.api.logout().await;
        self.report(result)
            .inspect_err(|e| error!("Logout failed: {}", e))?;

        self.session.clear();
        self.view = ViewState::default();
        self.forms.clear();
        self.notifications.success("Logged out successfully");
        info!("Logged out");
        Ok(())
    }

    pub async fn list_players(&mut self) -> Result<(), ClientError> {
        let result = self.api.list_players().await;
        let players = self
            .report(result)
            .inspect_err(|e| error!("Failed to load players: {}", e))?;

        self.view.setup_players = players;
        Ok(())
    }

    /// Act as one of the players offered in player setup.
    pub fn select_player(&mut self, player_id: PlayerId) -> Result<(), ClientError> {
        let player = self
            .view
            .setup_players
            .iter()
            .find(|p| p.id == player_id)
            .cloned();

        match player {
            Some(player) => {
                self.session.set_player(player);
                self.view.show(Section::GameManagement);
                Ok(())
            }
            None => Err(self.reject(ValidationError::UnknownPlayer(player_id))),
        }
    }

    pub async fn create_player(&mut self) -> Result<(), ClientError> {
        let request =
            validate_player_name(&self.forms.new_player_name).map_err(|e| self.reject(e))?;

        let result = self.api.create_player(&request).await;
        let player = self
            .report(result)
            .inspect_err(|e| error!("Failed to create player: {}", e))?;

        self.notifications
            .success(format!("Player {} created!", player.name));
        self.forms.new_player_name.clear();
        self.session.set_player(player);
        self.view.show(Section::GameManagement);
        Ok(())
    }

    pub async fn create_game(&mut self) -> Result<(), ClientError> {
        let player_id = self.require_player()?;

        let result = self.api.create_game(player_id).await;
        let game = self
            .report(result)
            .inspect_err(|e| error!("Failed to create game: {}", e))?;

        let code = game.code.to_uppercase();
        self.session.game = Some(ActiveGame::stub(code.clone()));
        self.notifications
            .success(format!("Game created! Code: {}", code));

        if let Err(e) = self.load_game_details(&code).await {
            error!("Failed to load game details: {}", e);
        }
        self.view.show(Section::ActiveGame);
        Ok(())
    }

    pub async fn join_game(&mut self) -> Result<(), ClientError> {
        let code = normalize_game_code(&self.forms.game_code).map_err(|e| self.reject(e))?;
        let player_id = self.require_player()?;

        let result = self.api.join_game(&code, player_id).await;
        self.report(result)
            .inspect_err(|e| error!("Failed to join game: {}", e))?;

        self.session.game = Some(ActiveGame::stub(code.clone()));
        self.notifications
            .success(format!("Successfully joined game {}!", code));

        if let Err(e) = self.load_game_details(&code).await {
            error!("Failed to load game details: {}", e);
        }
        self.view.show(Section::ActiveGame);
        self.forms.game_code.clear();
        Ok(())
    }

    /// Fetch the game and replace whatever was shown for it, then reload its results.
    pub async fn load_game_details(&mut self, code: &str) -> Result<(), ClientError> {
        let result = self.api.game(code).await;
        let details = self.report(result)?;

        debug!(
            "Loaded game {} with {} players",
            details.code,
            details.players.len()
        );
        let code = details.code.to_uppercase();
        self.session.replace_game(details);
        self.forms.winner = None;

        if let Err(e) = self.load_game_results(&code).await {
            error!("Failed to load results: {}", e);
        }
        Ok(())
    }

    /// Reload the active game.
    pub async fn refresh_game(&mut self) -> Result<(), ClientError> {
        let code = self.require_game()?;
        self.load_game_details(&code).await
    }

    pub fn select_winner(&mut self, winner: Option<PlayerId>) -> Result<(), ClientError> {
        if let Some(player_id) = winner {
            let in_game = self
                .session
                .game
                .as_ref()
                .is_some_and(|game| game.has_player(player_id));
            if !in_game {
                return Err(self.reject(ValidationError::NotInGame(player_id)));
            }
        }

        self.forms.winner = winner;
        Ok(())
    }

    /// Record the selected player as the winner. Everyone else in the game loses.
    pub async fn record_result(&mut self) -> Result<(), ClientError> {
        let Some(winner_id) = self.forms.winner else {
            return Err(self.reject(ValidationError::NoWinnerSelected));
        };
        let code = self.require_game()?;

        let result = self.api.record_result(&code, winner_id).await;
        self.report(result)
            .inspect_err(|e| error!("Failed to record result: {}", e))?;

        info!("Recorded player {} as winner of game {}", winner_id, code);
        self.notifications
            .success("Result recorded successfully! Everyone else lost.");
        self.forms.winner = None;

        if let Err(e) = self.load_game_results(&code).await {
            error!("Failed to load results: {}", e);
        }
        Ok(())
    }

    pub async fn load_game_results(&mut self, code: &str) -> Result<(), ClientError> {
        let result = self.api.results(code).await;
        let results = self.report(result)?;

        if !self.session.set_results(code, results) {
            debug!("Discarding results for {}, no longer the active game", code);
        }
        Ok(())
    }

    pub async fn load_player_stats(&mut self) -> Result<(), ClientError> {
        let player_id = self.require_player()?;

        let result = self.api.player_stats(player_id).await;
        let stats = self
            .report(result)
            .inspect_err(|e| error!("Failed to load player stats: {}", e))?;

        self.view.stats = Some(StatsView::from(&stats));
        self.view.show(Section::PlayerStats);
        Ok(())
    }
}
