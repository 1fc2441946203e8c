use crate::{event::*, log_internal, plugin::*};
use anyhow::Result;

/// Registers slash commands when the connection to Discord is ready.
pub struct Ready;

#[serenity::async_trait]
impl Plugin for Ready {
    fn name(&self) -> &'static str {
        "ready"
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Ready { .. } = event else {
            return Ok(EventHandled::No);
        };

        let commands: Vec<SlashCommand> = crate::plugin::plugins()
            .iter()
            .filter_map(|plugin| plugin.command())
            .collect();

        ctx.chat.register_commands(&commands).await?;
        log_internal!("Registered {} slash command(s)", commands.len());
        Ok(EventHandled::Yes)
    }
}
