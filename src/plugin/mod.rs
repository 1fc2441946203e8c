use crate::{chat::SlashCommand, context::Context, event::EventHandled};
use anyhow::Result;

mod debug;
mod ignore_bots;
mod leaderboard;
mod poop;
mod ready;

#[serenity::async_trait]
pub trait Plugin: Sync + Send {
    /// Plugin name.  Used for debug
    fn name(&self) -> &'static str;
    /// Slash command this plugin answers.  None if it doesn't answer one
    fn command(&self) -> Option<SlashCommand> {
        None
    }
    /// Potentially handle event.  Returns:
    /// - Ok(EventHandled::Yes) if the event has been handled and no other plugin should attempt to
    /// handle it
    /// - Ok(EventHandled::No) if another plugin should attempt to handle the event
    /// - Err if an error occurred
    async fn handle(&self, ctx: &Context, event: &crate::event::Event) -> Result<EventHandled>;
}

/// Ordered list of available plugins
pub fn plugins() -> Vec<Box<dyn Plugin>> {
    use crate::plugin::*;

    vec![
        // Core bot operations
        Box::new(debug::Debug),
        Box::new(ready::Ready),
        Box::new(ignore_bots::IgnoreBots),
        // Counting
        Box::new(poop::Poop),
        Box::new(leaderboard::Leaderboard),
    ]
}
