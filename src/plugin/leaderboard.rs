use crate::{event::*, plugin::*};
use anyhow::Result;

const LEADERBOARD: SlashCommand = SlashCommand {
    name: "leaderboard",
    description: "Show the top poopers",
};

/// Answers `/leaderboard`
pub struct Leaderboard;

#[serenity::async_trait]
impl Plugin for Leaderboard {
    fn name(&self) -> &'static str {
        "leaderboard"
    }

    fn command(&self) -> Option<SlashCommand> {
        Some(LEADERBOARD)
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Command(cmd) = event else {
            return Ok(EventHandled::No);
        };

        if cmd.name != LEADERBOARD.name {
            return Ok(EventHandled::No);
        }

        let content = {
            let pstate = ctx.pstate.read().await;
            crate::leaderboard::render(pstate.snapshot(), ctx.cfg.general.leaderboard_limit)
        };

        ctx.chat.respond(&cmd.invocation, &content).await?;
        Ok(EventHandled::Yes)
    }
}
