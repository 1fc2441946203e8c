//! serenity hands us events through one callback per event type.  Plugins instead see a single
//! `Event` enum carrying only the fields the bot cares about.

use crate::{
    chat::{CommandRef, MessageRef},
    context::Context,
    log_internal,
    logging::PrintColor,
};

/// A chat platform event
pub enum Event {
    Ready { user_name: String, guild_count: usize },
    Message(IncomingMessage),
    Command(IncomingCommand),
}

pub struct Author {
    pub id: String,
    pub name: String,
    pub bot: bool,
}

/// A newly created message
pub struct IncomingMessage {
    pub id: MessageRef,
    pub author: Author,
    pub content: String,
}

/// A slash command invocation
pub struct IncomingCommand {
    pub name: String,
    pub invocation: CommandRef,
    pub user_name: String,
}

impl From<&serenity::all::Ready> for Event {
    fn from(ready: &serenity::all::Ready) -> Self {
        Event::Ready {
            user_name: ready.user.name.clone(),
            guild_count: ready.guilds.len(),
        }
    }
}

impl From<&serenity::all::Message> for IncomingMessage {
    fn from(msg: &serenity::all::Message) -> Self {
        Self {
            id: MessageRef {
                channel_id: msg.channel_id.get(),
                message_id: msg.id.get(),
            },
            author: Author {
                id: msg.author.id.to_string(),
                name: msg.author.name.clone(),
                bot: msg.author.bot,
            },
            content: msg.content.clone(),
        }
    }
}

impl From<&serenity::all::CommandInteraction> for IncomingCommand {
    fn from(command: &serenity::all::CommandInteraction) -> Self {
        Self {
            name: command.data.name.clone(),
            invocation: CommandRef {
                interaction_id: command.id.get(),
                token: command.token.clone(),
            },
            user_name: command.user.name.clone(),
        }
    }
}

impl Event {
    // When an event occurs, iterate over all the plugins to see if any can/should handle it.
    pub async fn handle(self, ctx: Context<'_>) {
        for plugin in crate::plugin::plugins() {
            match plugin.handle(&ctx, &self).await {
                Ok(EventHandled::Yes) => return,
                Ok(EventHandled::No) => continue,
                Err(err) => eprintln!("Error in plugin {}: {}", plugin.name(), err),
            }
        }

        if let Event::Command(cmd) = &self {
            log_internal!("{} invoked unknown command /{}", cmd.color(), cmd.name);
        }
    }
}

pub enum EventHandled {
    Yes,
    No,
}
