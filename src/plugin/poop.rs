use crate::{
    event::*,
    log_internal,
    logging::PrintColor,
    plugin::*,
    responses::acknowledgement,
    trigger::{self, POOP_PHRASES},
};
use anyhow::Result;

const POOP_EMOJI: char = '💩';

/// Counts poop announcements in the trigger channel
pub struct Poop;

#[serenity::async_trait]
impl Plugin for Poop {
    fn name(&self) -> &'static str {
        "poop"
    }

    async fn handle(&self, ctx: &Context, event: &Event) -> Result<EventHandled> {
        let Event::Message(msg) = event else {
            return Ok(EventHandled::No);
        };

        if msg.id.channel_id != ctx.cfg.general.trigger_channel_id {
            return Ok(EventHandled::No);
        }

        if !trigger::matches(&msg.content, POOP_PHRASES) {
            return Ok(EventHandled::No);
        }

        // The write guard is released once the new count has been saved.
        let count = ctx
            .pstate
            .write()
            .await
            .record(&msg.author.id, &msg.author.name)
            .await?;
        log_internal!("{} has pooped {} times", msg.author.color(), count);

        let reply = ctx.chat.reply(&msg.id, &acknowledgement(count)).await?;
        ctx.chat.react(&msg.id, POOP_EMOJI).await?;
        ctx.chat.react(&reply, POOP_EMOJI).await?;
        Ok(EventHandled::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::POOP_EMOJI;
    use crate::chat::fake::{Call, RecordingChat, REPLY_MESSAGE_ID};
    use crate::chat::MessageRef;
    use crate::plugin::testing::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn counts_and_acknowledges() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config();
        let pstate = pstate(dir.path()).await;
        let chat = RecordingChat::default();

        let event = message(TRIGGER_CHANNEL, "1", "alice", "I POOPED today");
        dispatch(&cfg, &pstate, &chat, event).await;

        let counter = pstate.read().await.snapshot()["1"].clone();
        assert_eq!(counter.count, 1);
        assert_eq!(counter.username, "alice");

        let source = MessageRef {
            channel_id: TRIGGER_CHANNEL,
            message_id: 1,
        };
        let reply = MessageRef {
            channel_id: TRIGGER_CHANNEL,
            message_id: REPLY_MESSAGE_ID,
        };
        let calls = chat.calls();
        assert_eq!(calls.len(), 3);
        match &calls[0] {
            Call::Reply(to, content) => {
                assert_eq!(*to, source);
                assert!(content.ends_with("You've pooped 1 times!"));
            }
            other => panic!("expected reply, got {:?}", other),
        }
        assert_eq!(calls[1], Call::React(source, POOP_EMOJI));
        assert_eq!(calls[2], Call::React(reply, POOP_EMOJI));
    }

    #[tokio::test]
    async fn reply_reports_running_total() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config();
        let pstate = pstate(dir.path()).await;
        let chat = RecordingChat::default();

        for _ in 0..3 {
            let event = message(TRIGGER_CHANNEL, "1", "alice", "i shat");
            dispatch(&cfg, &pstate, &chat, event).await;
        }

        assert_eq!(pstate.read().await.snapshot()["1"].count, 3);
        assert!(chat.calls().iter().any(
            |call| matches!(call, Call::Reply(_, c) if c.ends_with("You've pooped 3 times!"))
        ));
    }

    #[tokio::test]
    async fn other_channel_is_never_counted() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config();
        let pstate = pstate(dir.path()).await;
        let chat = RecordingChat::default();

        let event = message(TRIGGER_CHANNEL + 1, "1", "alice", "i pooped");
        dispatch(&cfg, &pstate, &chat, event).await;

        assert!(pstate.read().await.snapshot().is_empty());
        assert!(chat.calls().is_empty());
    }

    #[tokio::test]
    async fn unrelated_message_is_not_counted() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config();
        let pstate = pstate(dir.path()).await;
        let chat = RecordingChat::default();

        let event = message(TRIGGER_CHANNEL, "1", "alice", "I am happy");
        dispatch(&cfg, &pstate, &chat, event).await;

        assert!(pstate.read().await.snapshot().is_empty());
        assert!(chat.calls().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_announcements_are_all_counted() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Arc::new(config());
        let pstate = Arc::new(pstate(dir.path()).await);
        let chat = Arc::new(RecordingChat::default());

        let mut tasks = tokio::task::JoinSet::new();
        for i in 0..20 {
            let (cfg, pstate, chat) = (cfg.clone(), pstate.clone(), chat.clone());
            let user = if i % 2 == 0 { "1" } else { "2" };
            tasks.spawn(async move {
                let event = message(TRIGGER_CHANNEL, user, user, "i dumped");
                dispatch(&cfg, &pstate, &chat, event).await;
            });
        }
        while let Some(result) = tasks.join_next().await {
            result.unwrap();
        }

        let pstate = pstate.read().await;
        assert_eq!(pstate.snapshot()["1"].count, 10);
        assert_eq!(pstate.snapshot()["2"].count, 10);

        let data = tokio::fs::read(dir.path().join("poop_data.json")).await.unwrap();
        let on_disk: crate::persistent_state::Counters = serde_json::from_slice(&data).unwrap();
        assert_eq!(on_disk, *pstate.snapshot());
    }
}
