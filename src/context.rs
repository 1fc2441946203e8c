use crate::{chat::Chat, config::Config, persistent_state::PersistentState};
use tokio::sync::RwLock;

/// Collection of data that is shared across events
pub struct Context<'a> {
    pub cfg: &'a Config,
    /// Writers hold the lock across the save, so counting is one critical section.
    pub pstate: &'a RwLock<PersistentState>,
    // Chat platform collaborator
    pub chat: &'a dyn Chat,
}
