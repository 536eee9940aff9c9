//! # Startup & Runtime
//!
//! Everything that happens before the first update is handled, and the loop that hands
//! updates to the [`Router`](crate::handlers::Router):
//!
//! 1. [`setup_tracing`] - logging
//! 2. [`BotConfig::from_env`] - token, Web App URL and optional admin destination
//! 3. [`BotSystem`] - builds the Telegram client and the router, registers the command
//!    menu, then long-polls until Ctrl-C
//!
//! The configuration is loaded once and passed down explicitly; there is no global state.

pub mod bot_system;
pub mod config;
pub mod tracing;

pub use bot_system::*;
pub use config::*;
pub use self::tracing::*;
