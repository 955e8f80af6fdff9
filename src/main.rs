use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strikeball::game::ShuffledSecretGenerator;
use strikeball::record::{InMemoryRecordRepository, RecordService};
use strikeball::{App, StdConsole};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing; logs go to stderr so they never interleave
    // with the game's stdout transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "strikeball=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting number baseball");

    let repository = Arc::new(InMemoryRecordRepository::new());
    let records = RecordService::new(repository);
    let console = Arc::new(StdConsole::new());
    let secrets = Arc::new(ShuffledSecretGenerator::new());
    let app = App::new(console, secrets, records);

    if let Err(err) = app.run().await {
        error!(?err, "application terminated with an error");
        std::process::exit(1);
    }
}
