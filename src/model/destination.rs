use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A conversation a message can be sent to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Numeric chat id (private chats are positive, groups negative).
    Chat(i64),
    /// Public channel or supergroup username, stored without the leading `@`.
    Channel(String),
}

/// The text could not be read as a chat id or a `@channel` username.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid destination '{0}': expected a numeric chat id or @channel")]
pub struct InvalidDestination(pub String);

impl From<i64> for Destination {
    fn from(id: i64) -> Self {
        Destination::Chat(id)
    }
}

impl FromStr for Destination {
    type Err = InvalidDestination;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<i64>() {
            return Ok(Destination::Chat(id));
        }

        match trimmed.strip_prefix('@') {
            Some(name)
                if !name.is_empty()
                    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') =>
            {
                Ok(Destination::Channel(name.to_string()))
            }
            _ => Err(InvalidDestination(s.to_string())),
        }
    }
}

impl Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Chat(id) => write!(f, "{}", id),
            Destination::Channel(name) => write!(f, "@{}", name),
        }
    }
}
