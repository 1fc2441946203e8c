use crate::persistent_state::{Counters, UserCounter};

pub const DEFAULT_LIMIT: usize = 10;
pub const NO_POOPS: &str = "No poops recorded yet!";

/// Ranked listing of the top `limit` counters, one `"{rank}. {username}: {count} poops"` per line.
pub fn format(counters: &Counters, limit: usize) -> String {
    let mut ranked: Vec<(&String, &UserCounter)> = counters.iter().collect();
    ranked.sort_by(|(a_id, a), (b_id, b)| {
        b.count
            .cmp(&a.count)
            .then_with(|| user_id_key(a_id).cmp(&user_id_key(b_id)))
    });

    let lines: Vec<String> = ranked
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, (_, counter))| {
            format!("{}. {}: {} poops", index + 1, counter.username, counter.count)
        })
        .collect();

    if lines.is_empty() {
        return NO_POOPS.to_owned();
    }
    lines.join("\n")
}

/// Leaderboard message as sent in reply to the command
pub fn render(counters: &Counters, limit: usize) -> String {
    format!("🏆 **Poop Leaderboard** 💩\n\n{}", format(counters, limit))
}

// Discord ids are numeric snowflakes.  Numeric ids sort first by value, anything else after them
// by string.
fn user_id_key(id: &str) -> (bool, Option<u64>, &str) {
    let numeric = id.parse::<u64>().ok();
    (numeric.is_none(), numeric, id)
}
