//! Update classification: decides whether an inbound message is a bot command, plain text, or
//! something no handler understands.
//!
//! A command is text starting with `/name` where `name` is 1 to 32 ASCII alphanumerics or `_`,
//! optionally followed by `@botname`, then whitespace and arguments. Command names are compared
//! case-insensitively, so the parsed name is lowercased. Arguments are not kept.

use crate::types::{Message, MessageType};

const MAX_COMMAND_LEN: usize = 32;

/// A parsed bot command, e.g. `/start@sup_bot payload`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Lowercased command name without the leading slash.
    pub name: String,
    /// Bot username after `@`, if the command was addressed explicitly.
    pub mention: Option<String>,
}

impl Command {
    /// Parses `text` as a command. Returns `None` when it does not start with a command token.
    pub fn parse(text: &str) -> Option<Self> {
        let rest = text.strip_prefix('/')?;
        let token = rest.split(char::is_whitespace).next().unwrap_or(rest);
        let (name, mention) = match token.split_once('@') {
            Some((name, mention)) if !mention.is_empty() => (name, Some(mention)),
            Some(_) => return None,
            None => (token, None),
        };
        let valid_name = !name.is_empty()
            && name.len() <= MAX_COMMAND_LEN
            && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
        if !valid_name {
            return None;
        }
        Some(Self {
            name: name.to_ascii_lowercase(),
            mention: mention.map(str::to_string),
        })
    }

    /// True when this is `/name`, regardless of mention or arguments.
    pub fn is(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// False when the command names another bot after `@`. Usernames compare case-insensitively.
    /// With `bot_username` unknown, any mention is accepted.
    pub fn is_addressed_to(&self, bot_username: Option<&str>) -> bool {
        match (self.mention.as_deref(), bot_username) {
            (Some(mention), Some(username)) => {
                mention.eq_ignore_ascii_case(username.trim_start_matches('@'))
            }
            _ => true,
        }
    }
}

/// Shape of an inbound message as seen by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateKind {
    /// Text starting with a bot command.
    Command(Command),
    /// Any other text message.
    Text,
    /// No text (photo, sticker, service message, ...).
    Unsupported,
}

impl UpdateKind {
    /// Classifies a message by its shape.
    pub fn of(message: &Message) -> Self {
        if message.message_type != MessageType::Text {
            return Self::Unsupported;
        }
        match Command::parse(&message.content) {
            Some(command) => Self::Command(command),
            None => Self::Text,
        }
    }
}
