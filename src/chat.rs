//! The chat platform as seen by the plugins.
//!
//! Plugins never talk to serenity directly.  They go through [`Chat`], which lets the event
//! handling logic run against a recording fake in tests.

use anyhow::Result;
use serenity::all::{
    ChannelId, Command, CreateCommand, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, InteractionId, MessageId, ReactionType,
};

/// A message in a channel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageRef {
    pub channel_id: u64,
    pub message_id: u64,
}

/// A pending slash command invocation, needed to respond to it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandRef {
    pub interaction_id: u64,
    pub token: String,
}

/// A slash command offered to users
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
}

#[serenity::async_trait]
pub trait Chat: Sync + Send {
    /// Reply to `to`, returning the reply message
    async fn reply(&self, to: &MessageRef, content: &str) -> Result<MessageRef>;
    async fn react(&self, to: &MessageRef, emoji: char) -> Result<()>;
    /// Respond publicly to a slash command
    async fn respond(&self, command: &CommandRef, content: &str) -> Result<()>;
    /// Replace the bot's global slash commands with `commands`
    async fn register_commands(&self, commands: &[SlashCommand]) -> Result<()>;
}

/// [`Chat`] backed by a live serenity connection
pub struct SerenityChat<'a> {
    pub discord_ctx: &'a serenity::all::Context,
}

#[serenity::async_trait]
impl Chat for SerenityChat<'_> {
    async fn reply(&self, to: &MessageRef, content: &str) -> Result<MessageRef> {
        let channel_id = ChannelId::new(to.channel_id);
        let message_id = MessageId::new(to.message_id);
        let builder = CreateMessage::new()
            .content(content)
            .reference_message((channel_id, message_id));

        let reply = channel_id.send_message(self.discord_ctx, builder).await?;
        Ok(MessageRef {
            channel_id: reply.channel_id.get(),
            message_id: reply.id.get(),
        })
    }

    async fn react(&self, to: &MessageRef, emoji: char) -> Result<()> {
        ChannelId::new(to.channel_id)
            .create_reaction(
                self.discord_ctx,
                MessageId::new(to.message_id),
                ReactionType::from(emoji),
            )
            .await?;
        Ok(())
    }

    async fn respond(&self, command: &CommandRef, content: &str) -> Result<()> {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(content)
                .ephemeral(false),
        );

        self.discord_ctx
            .http
            .create_interaction_response(
                InteractionId::new(command.interaction_id),
                &command.token,
                &response,
                Vec::new(),
            )
            .await?;
        Ok(())
    }

    async fn register_commands(&self, commands: &[SlashCommand]) -> Result<()> {
        let commands: Vec<CreateCommand> = commands
            .iter()
            .map(|cmd| CreateCommand::new(cmd.name).description(cmd.description))
            .collect();

        Command::set_global_commands(&self.discord_ctx.http, commands).await?;
        Ok(())
    }
}
