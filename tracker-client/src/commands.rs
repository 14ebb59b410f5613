use tracing::info;
use tracker_types::PlayerId;

use crate::controller::SessionController;
use crate::error::ClientError;
use crate::transport::Transport;

pub const HELP: &str = "\
Commands:
  login <username> <password>
  register <username> <email> <password>
  logout
  show-login | show-register
  players                    list your players (player setup)
  use-player <id>
  new-player <name>
  create                     create a game
  join <code>                join a game by its 4-letter code
  refresh                    reload the active game
  winner [<player id>]       select (or clear) the winner
  record                     record the selected winner
  games                      back to game management
  stats                      show your statistics
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Register { username: String, email: String, password: String },
    Logout,
    ShowLogin,
    ShowRegister,
    Players,
    UsePlayer { player_id: PlayerId },
    NewPlayer { name: String },
    Create,
    Join { code: String },
    Refresh,
    Winner { player_id: Option<PlayerId> },
    Record,
    Games,
    Stats,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Missing arguments are passed through as empty
    /// strings so the controller's own validation reports them.
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or_else(|| "Empty command".to_string())?;
        let mut arg = || parts.next().unwrap_or_default().to_string();

        let command = match name {
            "login" => Command::Login {
                username: arg(),
                password: arg(),
            },
            "register" => Command::Register {
                username: arg(),
                email: arg(),
                password: arg(),
            },
            "logout" => Command::Logout,
            "show-login" => Command::ShowLogin,
            "show-register" => Command::ShowRegister,
            "players" => Command::Players,
            "use-player" => Command::UsePlayer {
                player_id: parse_id(&arg())?,
            },
            "new-player" => {
                let name = line.trim_start()[name.len()..].trim().to_string();
                Command::NewPlayer { name }
            }
            "create" => Command::Create,
            "join" => Command::Join { code: arg() },
            "refresh" => Command::Refresh,
            "winner" => {
                let raw = arg();
                let player_id = if raw.is_empty() {
                    None
                } else {
                    Some(parse_id(&raw)?)
                };
                Command::Winner { player_id }
            }
            "record" => Command::Record,
            "games" => Command::Games,
            "stats" => Command::Stats,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(format!("Unknown command: {}", other)),
        };

        Ok(command)
    }
}

fn parse_id(raw: &str) -> Result<PlayerId, String> {
    raw.parse()
        .map_err(|_| format!("Expected a player id, got '{}'", raw))
}

/// Fill the relevant form and run the matching controller operation.
pub async fn handle_command<T: Transport>(
    controller: &mut SessionController<T>,
    command: Command,
) -> Result<(), ClientError> {
    info!("Handling command {:?}", redacted(&command));

    match command {
        Command::Login { username, password } => {
            let forms = controller.forms_mut();
            forms.login_username = username;
            forms.login_password = password;
            controller.login().await
        }
        Command::Register {
            username,
            email,
            password,
        } => {
            let forms = controller.forms_mut();
            forms.register_username = username;
            forms.register_email = email;
            forms.register_password = password;
            controller.register().await
        }
        Command::Logout => controller.logout().await,
        Command::ShowLogin => {
            controller.show_login_form();
            Ok(())
        }
        Command::ShowRegister => {
            controller.show_register_form();
            Ok(())
        }
        Command::Players => controller.list_players().await,
        Command::UsePlayer { player_id } => controller.select_player(player_id),
        Command::NewPlayer { name } => {
            controller.forms_mut().new_player_name = name;
            controller.create_player().await
        }
        Command::Create => controller.create_game().await,
        Command::Join { code } => {
            controller.forms_mut().set_game_code(&code);
            controller.join_game().await
        }
        Command::Refresh => controller.refresh_game().await,
        Command::Winner { player_id } => controller.select_winner(player_id),
        Command::Record => controller.record_result().await,
        Command::Games => {
            controller.show_game_management();
            Ok(())
        }
        Command::Stats => controller.load_player_stats().await,
        Command::Help | Command::Quit => Ok(()),
    }
}

/// Keep passwords out of the logs.
fn redacted(command: &Command) -> Command {
    match command {
        Command::Login { username, .. } => Command::Login {
            username: username.clone(),
            password: "***".to_string(),
        },
        Command::Register {
            username, email, ..
        } => Command::Register {
            username: username.clone(),
            email: email.clone(),
            password: "***".to_string(),
        },
        other => other.clone(),
    }
}
