use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::shared::AppError;

/// The single capability the core needs from its surroundings: ask a
/// question and await one line, or display a line of text. The core
/// never touches a transport directly.
#[async_trait]
pub trait Console: Send + Sync {
    async fn ask_line(&self, prompt: &str) -> Result<String, AppError>;
    async fn display(&self, text: &str) -> Result<(), AppError>;
}

/// Interactive console over stdin/stdout.
pub struct StdConsole {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Console for StdConsole {
    async fn ask_line(&self, prompt: &str) -> Result<String, AppError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(prompt.as_bytes()).await?;
        stdout.flush().await?;

        let mut lines = self.lines.lock().await;
        let line = lines.next_line().await?.ok_or(AppError::InputClosed)?;
        Ok(line)
    }

    async fn display(&self, text: &str) -> Result<(), AppError> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}
