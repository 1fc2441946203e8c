mod chat;
mod config;
mod context;
mod event;
mod handler;
mod leaderboard;
mod logging;
mod persistent_state;
mod plugin;
mod responses;
mod trigger;

use serenity::{all::GatewayIntents, Client};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    crate::config::load_dotenv()?;

    let cfg = crate::config::Config::load().await?;
    let token = cfg.discord_token.clone();
    let pstate = crate::persistent_state::PersistentState::load(cfg.state_path()?).await?;
    let handler = handler::Handler::new(cfg, pstate);

    // Things we want discord to tell us about.
    let intents =
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

    Client::builder(&token, intents)
        .event_handler(handler)
        .await?
        .start()
        .await
        .map_err(Into::into)
}
