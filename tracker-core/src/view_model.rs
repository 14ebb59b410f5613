use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use tracker_types::{GameResult, Player, PlayerId};

use crate::{Forms, Notification, Session, StatsView};

pub const WINNER_PLACEHOLDER: &str = "Select Winner";
pub const NO_RESULTS_PLACEHOLDER: &str = "No results recorded yet.";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The top-level screens. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Auth,
    PlayerSetup,
    GameManagement,
    ActiveGame,
    PlayerStats,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Auth,
        Section::PlayerSetup,
        Section::GameManagement,
        Section::ActiveGame,
        Section::PlayerStats,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Auth => "auth-section",
            Section::PlayerSetup => "player-setup",
            Section::GameManagement => "game-management",
            Section::ActiveGame => "active-game",
            Section::PlayerStats => "player-stats",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthForm {
    #[default]
    Login,
    Register,
}

/// What is on screen apart from the session itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub section: Section,
    pub auth_form: AuthForm,
    pub stats: Option<StatsView>,
    pub setup_players: Vec<Player>,
}

impl ViewState {
    pub fn show(&mut self, section: Section) {
        tracing::debug!("Showing section {}", section.id());
        self.section = section;
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.section == section
    }
}

/// Header line shown above every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInfo {
    pub greeting: Option<String>,
    pub player_name: String,
}

impl UserInfo {
    pub fn from_session(session: &Session) -> Self {
        match &session.user {
            Some(user) => Self {
                greeting: Some(format!("Welcome, {}", user.username)),
                player_name: session
                    .player
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| "No player selected".to_string()),
            },
            None => Self {
                greeting: None,
                player_name: "Not logged in".to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinnerChoice {
    pub player_id: Option<PlayerId>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultLine {
    pub winner: String,
    pub loser: String,
    pub timestamp: String,
}

impl ResultLine {
    pub fn from_result(result: &GameResult) -> Self {
        Self {
            winner: result.winner_name.clone(),
            loser: result.loser_name.clone(),
            timestamp: format_timestamp(&result.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsView {
    Empty,
    Lines(Vec<ResultLine>),
}

/// The active game as it is displayed: roster, winner picker and results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub code: String,
    pub roster: Vec<String>,
    pub winner_choices: Vec<WinnerChoice>,
    pub selected_winner: Option<PlayerId>,
    pub results: ResultsView,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub section: Section,
    pub auth_form: AuthForm,
    pub user_info: UserInfo,
    pub game_code_input: String,
    pub game: Option<GameView>,
    pub stats: Option<StatsView>,
    pub setup_players: Vec<Player>,
    pub notifications: Vec<Notification>,
}

impl ViewModel {
    pub fn build(
        session: &Session,
        forms: &Forms,
        view: &ViewState,
        notifications: Vec<Notification>,
    ) -> Self {
        let game = session.game.as_ref().map(|game| {
            let mut winner_choices = vec![WinnerChoice {
                player_id: None,
                label: WINNER_PLACEHOLDER.to_string(),
            }];
            winner_choices.extend(game.players.iter().map(|p| WinnerChoice {
                player_id: Some(p.id),
                label: p.name.clone(),
            }));

            let results = if game.results.is_empty() {
                ResultsView::Empty
            } else {
                ResultsView::Lines(game.results.iter().map(ResultLine::from_result).collect())
            };

            GameView {
                code: game.code.clone(),
                roster: game.players.iter().map(|p| p.name.clone()).collect(),
                winner_choices,
                selected_winner: forms.winner,
                results,
            }
        });

        Self {
            section: view.section,
            auth_form: view.auth_form,
            user_info: UserInfo::from_session(session),
            game_code_input: forms.game_code.clone(),
            game,
            stats: view.stats.clone(),
            setup_players: view.setup_players.clone(),
            notifications,
        }
    }
}

/// Render a server timestamp in local time. Timestamps without an offset are
/// already local; anything unparseable is shown verbatim.
pub fn format_timestamp(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string();
    }

    match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => match Local.from_local_datetime(&naive).earliest() {
            Some(local) => local.format(TIMESTAMP_FORMAT).to_string(),
            None => naive.format(TIMESTAMP_FORMAT).to_string(),
        },
        Err(_) => raw.to_string(),
    }
}
