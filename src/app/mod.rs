pub mod messages;
mod views;

use std::sync::Arc;

use tracing::{debug, info};

use crate::console::Console;
use crate::game::{AttemptBudget, GameSession, Guess, SecretGenerator, Turn};
use crate::record::RecordService;
use crate::shared::AppError;

/// The four menu actions plus a fallback retry path for anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    NewGame,
    ShowHistory,
    ShowStatistics,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::NewGame),
            "2" => Some(MenuChoice::ShowHistory),
            "3" => Some(MenuChoice::ShowStatistics),
            "9" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Top-level menu loop dispatching to game play, history and statistics
/// views. Owns nothing global: the console, secret source and record
/// service are injected.
pub struct App {
    console: Arc<dyn Console>,
    secrets: Arc<dyn SecretGenerator>,
    records: RecordService,
}

impl App {
    pub fn new(
        console: Arc<dyn Console>,
        secrets: Arc<dyn SecretGenerator>,
        records: RecordService,
    ) -> Self {
        Self {
            console,
            secrets,
            records,
        }
    }

    pub async fn run(&self) -> Result<(), AppError> {
        loop {
            let input = self.console.ask_line(messages::MENU_PROMPT).await?;
            match MenuChoice::parse(&input) {
                Some(MenuChoice::NewGame) => self.play_game().await?,
                Some(MenuChoice::ShowHistory) => self.show_history().await?,
                Some(MenuChoice::ShowStatistics) => self.show_statistics().await?,
                Some(MenuChoice::Exit) => {
                    self.console.display(messages::GOODBYE).await?;
                    return Ok(());
                }
                None => self.console.display(messages::INVALID_MENU).await?,
            }
        }
    }

    async fn play_game(&self) -> Result<(), AppError> {
        let budget = self.ask_budget().await?;
        let mut session = GameSession::new(self.secrets.generate(), budget);
        info!(budget = budget.get(), "session started");
        self.console.display(messages::SECRET_DRAWN).await?;

        loop {
            let line = self.console.ask_line(messages::GUESS_PROMPT).await?;
            let guess = match Guess::try_from(line.as_str()) {
                Ok(guess) => guess,
                Err(err) => {
                    // Invalid input does not consume an attempt.
                    debug!(input = %line, %err, "rejected guess");
                    self.console
                        .display(&format!("Invalid input: {err}. Try again."))
                        .await?;
                    continue;
                }
            };

            match session.submit(guess)? {
                Turn::Continue(hint) => self.console.display(&hint.to_string()).await?,
                Turn::Won(hint) | Turn::Lost(hint) => {
                    self.console.display(&hint.to_string()).await?;
                    break;
                }
            }
        }

        let outcome = session.into_outcome()?;
        self.console.display(outcome.winner.announcement()).await?;
        self.console.display(messages::GAME_OVER).await?;
        self.records.finalize(outcome).await?;
        Ok(())
    }

    async fn ask_budget(&self) -> Result<AttemptBudget, AppError> {
        loop {
            let line = self.console.ask_line(messages::BUDGET_PROMPT).await?;
            match line.parse::<AttemptBudget>() {
                Ok(budget) => return Ok(budget),
                Err(err) => {
                    self.console
                        .display(&format!("Invalid input: {err}. Try again."))
                        .await?
                }
            }
        }
    }

    async fn show_history(&self) -> Result<(), AppError> {
        let results = self.records.all_results().await?;
        if results.is_empty() {
            self.console.display(messages::NO_GAMES_YET).await?;
        } else {
            for result in &results {
                self.console.display(&views::result_header(result)).await?;
                self.console.display(messages::SECRET_DRAWN).await?;
                for entry in &result.history {
                    if let Some(guess) = &entry.guess {
                        self.console
                            .display(&format!("{}{}", messages::GUESS_PROMPT, guess))
                            .await?;
                    }
                    self.console.display(&entry.hint).await?;
                }
            }
        }
        self.console.display(messages::HISTORY_END).await?;
        Ok(())
    }

    async fn show_statistics(&self) -> Result<(), AppError> {
        let stats = self.records.statistics().await?;
        for line in views::stats_lines(&stats) {
            self.console.display(&line).await?;
        }
        Ok(())
    }
}
