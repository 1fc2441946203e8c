//! Logging to the terminal with colors

use crate::chat::MessageRef;
use crate::event::{Author, IncomingCommand};
use std::io::IsTerminal;
use std::sync::LazyLock;

const DEFAULT: &str = "\x1b[0m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GRAY: &str = "\x1b[90m";
const FG_GREEN: &str = "\x1b[32m";
const FG_MAGENTA: &str = "\x1b[35m";
const FG_YELLOW: &str = "\x1b[33m";

pub enum Color {
    Default,
    Event,
    Internal,
    User,
    Channel,
    Glue,
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        // Only print colors when printing to a terminal
        //
        // This won't change during the program's execution, so we can cache it.
        static STDOUT_IS_TERMINAL: LazyLock<bool> =
            LazyLock::new(|| std::io::stdout().is_terminal());

        if !*STDOUT_IS_TERMINAL {
            return Ok(());
        }

        write!(
            f,
            "{}",
            match self {
                Color::Default => DEFAULT,
                Color::Event => FG_YELLOW,
                Color::Internal => FG_MAGENTA,
                Color::User => FG_GREEN,
                Color::Channel => FG_CYAN,
                Color::Glue => FG_GRAY,
            }
        )
    }
}

#[macro_export]
macro_rules! log_event {
    // Case: Only format string, no arguments
    ($fmtstr:expr) => {{
        println!(
            concat!("{}*{} ", $fmtstr),
            $crate::logging::Color::Event,
            $crate::logging::Color::Default
        )
    }};

    // Case: Format string with arguments, with optional trailing comma
    ($fmtstr:expr, $($args:expr),* $(,)?) => {{
        println!(
            concat!("{}*{} ", $fmtstr),
            $crate::logging::Color::Event,
            $crate::logging::Color::Default,
            $($args),*
        )
    }};
}

#[macro_export]
macro_rules! log_internal {
    // Case: Only format string, no arguments
    ($fmtstr:expr) => {{
        println!(
            concat!("{}+{} ", $fmtstr),
            $crate::logging::Color::Internal,
            $crate::logging::Color::Default
        )
    }};

    // Case: Format string with arguments, with optional trailing comma
    ($fmtstr:expr, $($args:expr),* $(,)?) => {{
        println!(
            concat!("{}+{} ", $fmtstr),
            $crate::logging::Color::Internal,
            $crate::logging::Color::Default,
            $($args),*
        )
    }};
}

pub trait PrintColor {
    fn color(&self) -> String;
}

// Field separator
pub struct Glue;
impl PrintColor for Glue {
    fn color(&self) -> String {
        format!("{}{}{}", Color::Glue, ":", Color::Default)
    }
}

impl PrintColor for Author {
    fn color(&self) -> String {
        format!("{}{}{}", Color::User, self.name, Color::Default)
    }
}

impl PrintColor for IncomingCommand {
    fn color(&self) -> String {
        format!("{}{}{}", Color::User, self.user_name, Color::Default)
    }
}

/// Prints the channel a message is in
impl PrintColor for MessageRef {
    fn color(&self) -> String {
        format!("{}#{}{}", Color::Channel, self.channel_id, Color::Default)
    }
}
