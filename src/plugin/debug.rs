use crate::{event::*, log_event, logging::*, plugin::*};
use anyhow::Result;

/// Prints debug information about event to stdout
pub struct Debug;

#[serenity::async_trait]
impl Plugin for Debug {
    fn name(&self) -> &'static str {
        "debug"
    }

    async fn handle(&self, _ctx: &Context, event: &Event) -> Result<EventHandled> {
        match event {
            Event::Ready {
                user_name,
                guild_count,
            } => {
                log_event!(
                    "Connected to {} server(s) as {}{}{} 💩",
                    guild_count,
                    Color::User,
                    user_name,
                    Color::Default,
                );
            }
            Event::Message(msg) => {
                log_event!(
                    "{}{}{}{} {}",
                    msg.id.color(),
                    Glue {}.color(),
                    msg.author.color(),
                    Glue {}.color(),
                    msg.content,
                );
            }
            Event::Command(cmd) => {
                log_event!("{} invoked /{}", cmd.color(), cmd.name);
            }
        }

        Ok(EventHandled::No)
    }
}
