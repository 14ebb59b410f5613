use std::io::{self, Write};

use tracker_core::{
    AuthForm, GameView, NO_RESULTS_PLACEHOLDER, ResultsView, Section, Severity, ViewModel,
};

/// Projects a [`ViewModel`] onto some display.
pub trait Renderer {
    fn render(&mut self, model: &ViewModel) -> io::Result<()>;
}

/// Plain-text renderer for the interactive terminal front-end.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render_game(&mut self, game: &GameView) -> io::Result<()> {
        writeln!(self.out, "Game {}", game.code)?;
        writeln!(self.out, "Players:")?;
        for name in &game.roster {
            writeln!(self.out, "  - {}", name)?;
        }

        writeln!(self.out, "Winner:")?;
        for choice in &game.winner_choices {
            let marker = if choice.player_id == game.selected_winner { "*" } else { " " };
            match choice.player_id {
                Some(id) => writeln!(self.out, " {} [{}] {}", marker, id, choice.label)?,
                None => writeln!(self.out, " {} {}", marker, choice.label)?,
            }
        }

        writeln!(self.out, "Results:")?;
        match &game.results {
            ResultsView::Empty => writeln!(self.out, "  {}", NO_RESULTS_PLACEHOLDER)?,
            ResultsView::Lines(lines) => {
                for line in lines {
                    writeln!(
                        self.out,
                        "  {} defeated {}  ({})",
                        line.winner, line.loser, line.timestamp
                    )?;
                }
            }
        }
        Ok(())
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, model: &ViewModel) -> io::Result<()> {
        for notification in &model.notifications {
            let tag = match notification.severity {
                Severity::Success => "ok",
                Severity::Error => "error",
            };
            writeln!(self.out, "[{}] {}", tag, notification.message)?;
        }

        match &model.user_info.greeting {
            Some(greeting) => writeln!(
                self.out,
                "{} | Player: {}",
                greeting, model.user_info.player_name
            )?,
            None => writeln!(self.out, "{}", model.user_info.player_name)?,
        }
        writeln!(self.out, "== {} ==", model.section.id())?;

        match model.section {
            Section::Auth => match model.auth_form {
                AuthForm::Login => writeln!(self.out, "login <username> <password>  (or: show-register)")?,
                AuthForm::Register => writeln!(
                    self.out,
                    "register <username> <email> <password>  (or: show-login)"
                )?,
            },
            Section::PlayerSetup => {
                if model.setup_players.is_empty() {
                    writeln!(self.out, "No players loaded. Use `players` or `new-player <name>`.")?;
                }
                for player in &model.setup_players {
                    writeln!(self.out, "  [{}] {}", player.id, player.name)?;
                }
            }
            Section::GameManagement => {
                writeln!(self.out, "create | join <code>")?;
                if !model.game_code_input.is_empty() {
                    writeln!(self.out, "Code: {}", model.game_code_input)?;
                }
            }
            Section::ActiveGame => match &model.game {
                Some(game) => self.render_game(game)?,
                None => writeln!(self.out, "No active game")?,
            },
            Section::PlayerStats => match &model.stats {
                Some(stats) => {
                    writeln!(self.out, "{}'s Statistics", stats.name)?;
                    writeln!(self.out, "  Games Won:   {}", stats.games_won)?;
                    writeln!(self.out, "  Games Lost:  {}", stats.games_lost)?;
                    writeln!(self.out, "  Total Games: {}", stats.total_games)?;
                    writeln!(self.out, "  Win Rate:    {}%", stats.win_rate)?;
                }
                None => writeln!(self.out, "No statistics loaded")?,
            },
        }

        self.out.flush()
    }
}
