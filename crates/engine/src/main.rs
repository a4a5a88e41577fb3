//! Roster Engine - Main entry point.
//!
//! Composition root: loads configuration, opens the configured player store
//! and reports what it holds. Transport layers embed [`roster_engine::App`]
//! the same way.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster_domain::{PageRequest, PlayerFilter, PlayerOrder};
use roster_engine::infrastructure::config::{load_dotenv_from_repo_root, EngineConfig};
use roster_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Roster Engine");

    let config = EngineConfig::from_env();
    let app = App::from_config(&config).await?;

    let players = &app.use_cases.management.player;
    let total = players.count(&PlayerFilter::new()).await?;
    let banned = players.count(&PlayerFilter::new().with_banned(true)).await?;
    tracing::info!(total, banned, storage = ?config.storage, "Player store ready");

    let first_page = players
        .list(
            &PlayerFilter::new(),
            Some(PlayerOrder::Level),
            PageRequest::default(),
        )
        .await?;
    for player in first_page {
        tracing::debug!(
            player_id = ?player.id,
            name = %player.name,
            level = player.level,
            "Stored player"
        );
    }

    Ok(())
}
