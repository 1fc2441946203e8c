use crate::{
    chat::{Chat, SerenityChat},
    config::Config,
    context::Context,
    event::Event,
    persistent_state::PersistentState,
};
use serenity::all::{Interaction, Message, Ready};
use tokio::sync::RwLock;

/// Discord event handler
pub struct Handler {
    cfg: Config,
    pstate: RwLock<PersistentState>,
}

impl<'a> Handler {
    pub fn new(cfg: Config, pstate: PersistentState) -> Self {
        Self {
            cfg,
            pstate: RwLock::new(pstate),
        }
    }

    fn ctx(&'a self, chat: &'a dyn Chat) -> Context<'a> {
        Context {
            cfg: &self.cfg,
            pstate: &self.pstate,
            chat,
        }
    }
}

#[serenity::async_trait]
impl serenity::all::EventHandler for Handler {
    async fn ready(&self, discord_ctx: serenity::all::Context, ready: Ready) {
        let chat = SerenityChat {
            discord_ctx: &discord_ctx,
        };
        Event::from(&ready).handle(self.ctx(&chat)).await;
    }

    async fn message(&self, discord_ctx: serenity::all::Context, msg: Message) {
        let chat = SerenityChat {
            discord_ctx: &discord_ctx,
        };
        Event::Message((&msg).into()).handle(self.ctx(&chat)).await;
    }

    async fn interaction_create(
        &self,
        discord_ctx: serenity::all::Context,
        interaction: Interaction,
    ) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        let chat = SerenityChat {
            discord_ctx: &discord_ctx,
        };
        Event::Command((&command).into()).handle(self.ctx(&chat)).await;
    }
}
