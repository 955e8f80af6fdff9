pub mod mocks;

use std::sync::Arc;

use strikeball::record::{InMemoryRecordRepository, RecordService};
use strikeball::App;

use mocks::{FixedSecretGenerator, ScriptedConsole};

/// Wires an application around a scripted console and a fixed secret,
/// keeping handles to the console and repository for assertions.
pub struct TestApp {
    pub app: App,
    pub console: Arc<ScriptedConsole>,
    pub repository: Arc<InMemoryRecordRepository>,
}

pub fn test_app(secret: &str, script: &[&str]) -> TestApp {
    let console = Arc::new(ScriptedConsole::new(script));
    let repository = Arc::new(InMemoryRecordRepository::new());
    let app = App::new(
        console.clone(),
        Arc::new(FixedSecretGenerator::new(secret)),
        RecordService::new(repository.clone()),
    );
    TestApp {
        app,
        console,
        repository,
    }
}
