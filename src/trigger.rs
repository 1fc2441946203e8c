//! Recognize messages announcing a bowel movement

/// Lowercase phrases which count as a poop announcement
pub const POOP_PHRASES: &[&str] = &[
    "i pooped",
    "i shat",
    "i shitted",
    "i took a dump",
    "i dumped",
    "i took a shit",
    "dropped a load",
    "dumped a load",
    "dropped the kids off",
    "dropped the kids at the pool",
];

/// Whether `text` contains any of `phrases`, ignoring case.
///
/// Substring match, not whole word: phrases embedded in a longer sentence still count.
pub fn matches(text: &str, phrases: &[&str]) -> bool {
    let text = text.to_lowercase();
    phrases.iter().any(|phrase| text.contains(phrase))
}
