use anyhow::Context;
use atbara_app::{AppContext, Outcome, Shell};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "atbara_app=info,atbara_booking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = atbara_store::Config::load().context("Failed to load config")?;
    tracing::info!(
        locale = config.app.default_locale.code(),
        search_delay_ms = config.business_rules.search_delay_ms,
        "Starting Atbara Rail"
    );

    let ctx = AppContext::from_config(config);
    let mut shell = Shell::new(ctx, StdRng::from_entropy());

    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    stdout.write_all(b"Atbara Rail. Type 'help' for commands.\n> ").await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match shell.execute(&line).await {
            Outcome::Quit => break,
            Outcome::Continue(text) => {
                if !text.is_empty() {
                    stdout.write_all(text.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
            }
        }
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
    }

    tracing::info!("Shutting down");
    Ok(())
}
