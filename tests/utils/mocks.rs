use async_trait::async_trait;
use std::collections::VecDeque;
use tokio::sync::Mutex;

use strikeball::game::{Digit, Guess, Secret, SecretGenerator};
use strikeball::{AppError, Console};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Console fed from a fixed script of input lines; records everything
/// the application displays (prompts included) for later assertions.
pub struct ScriptedConsole {
    inputs: Mutex<VecDeque<String>>,
    output: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            inputs: Mutex::new(lines.iter().map(|s| s.to_string()).collect()),
            output: Mutex::new(Vec::new()),
        }
    }

    pub async fn output(&self) -> Vec<String> {
        self.output.lock().await.clone()
    }

    pub async fn output_contains(&self, needle: &str) -> bool {
        self.output
            .lock()
            .await
            .iter()
            .any(|line| line.contains(needle))
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn ask_line(&self, prompt: &str) -> Result<String, AppError> {
        self.output.lock().await.push(prompt.to_string());
        self.inputs
            .lock()
            .await
            .pop_front()
            .ok_or(AppError::InputClosed)
    }

    async fn display(&self, text: &str) -> Result<(), AppError> {
        self.output.lock().await.push(text.to_string());
        Ok(())
    }
}

/// Always generates the same secret so game flows are deterministic.
pub struct FixedSecretGenerator {
    digits: [Digit; 3],
}

impl FixedSecretGenerator {
    pub fn new(digits: &str) -> Self {
        let guess = Guess::try_from(digits).expect("fixed secret digits must be valid");
        Self {
            digits: *guess.digits(),
        }
    }
}

impl SecretGenerator for FixedSecretGenerator {
    fn generate(&self) -> Secret {
        Secret::new(self.digits)
    }
}
