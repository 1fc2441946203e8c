use rand::seq::IndexedRandom;

pub const RESPONSES: &[&str] = &[
    "🎉 Congratulations on your successful bowel movement!",
    "💩 Another one for the books!",
    "🚽 Way to go, champion!",
    "✨ Magnificent achievement unlocked!",
    "🌟 Your dedication to regularity is inspiring!",
];

/// Uniformly random entry of `responses`, `None` if it is empty
pub fn pick<'a>(responses: &[&'a str]) -> Option<&'a str> {
    responses.choose(&mut rand::rng()).copied()
}

/// Reply to someone who has now pooped `count` times
pub fn acknowledgement(count: u64) -> String {
    let response = pick(RESPONSES).unwrap_or_default();
    format!("{} You've pooped {} times!", response, count)
}
