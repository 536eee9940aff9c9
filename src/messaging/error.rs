//! Errors raised while delivering a message.

use thiserror::Error;

/// A single outbound message could not be delivered.
///
/// Every send is independent: a `SendError` says nothing about other messages sent while
/// handling the same event.
#[derive(Debug, Error)]
pub enum SendError {
    /// The Telegram Bot API rejected the request or could not be reached.
    #[error("Telegram request failed: {0}")]
    Request(#[from] teloxide::RequestError),

    /// The messenger could not accept the message at all.
    #[error("Messenger unavailable: {0}")]
    Unavailable(String),
}
