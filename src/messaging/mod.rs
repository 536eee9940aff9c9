//! Outbound messaging and the Telegram integration.
//!
//! Everything that talks to the chat platform goes through the [`Messenger`] trait, so the
//! handlers never see `teloxide` types.
//!
//! # Main Components
//!
//! - [`Messenger`] - Async seam for sending one message to one conversation
//! - [`TelegramMessenger`] - Production implementation over the Telegram Bot API
//! - [`SendError`] - Why a send failed
//!
//! # Testing
//!
//! See [`mock`] for an in-memory [`Messenger`] with an expectation queue.

pub mod error;
pub mod messenger;
pub mod mock;
pub mod telegram;

pub use error::*;
pub use messenger::*;
pub use telegram::*;
