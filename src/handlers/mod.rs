//! # Event Handlers
//!
//! Every inbound event is one [`BotEvent`] variant, and [`Router::dispatch`] maps each
//! variant to exactly one handler:
//!
//! | Event | Handler |
//! |-------|---------|
//! | [`BotEvent::Start`] | [`greeting`] - welcome text with the Web App button |
//! | [`BotEvent::Help`] | [`help`] - fixed help text |
//! | [`BotEvent::WebAppData`] | [`OrderIntake`](crate::order_intake::OrderIntake) |
//!
//! Handlers never return errors to the caller.

pub mod greeting;
pub mod help;

use crate::lifecycle::BotConfig;
use crate::messaging::{Messenger, OutboundMessage};
use crate::model::{CustomerIdentity, Destination};
use crate::order_intake::{OrderIntake, WebAppSubmission};
use std::sync::Arc;
use tracing::{info_span, instrument, warn, Instrument};

/// An inbound event, already stripped of platform types.
#[derive(Debug, Clone, PartialEq)]
pub enum BotEvent {
    /// `/start`
    Start {
        chat: Destination,
        customer: Option<CustomerIdentity>,
    },
    /// `/help`
    Help { chat: Destination },
    /// Data submitted by the catalog Web App.
    WebAppData {
        chat: Destination,
        customer: Option<CustomerIdentity>,
        payload: String,
    },
}

impl BotEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            BotEvent::Start { .. } => "start",
            BotEvent::Help { .. } => "help",
            BotEvent::WebAppData { .. } => "web_app_data",
        }
    }
}

/// Dispatches [`BotEvent`]s to their handlers.
///
/// Built once at startup and shared; holds only read-only configuration.
pub struct Router {
    config: Arc<BotConfig>,
    messenger: Arc<dyn Messenger>,
    intake: OrderIntake,
}

impl Router {
    pub fn new(config: Arc<BotConfig>, messenger: Arc<dyn Messenger>) -> Self {
        let intake = OrderIntake::new(messenger.clone(), config.admin.clone());
        Self {
            config,
            messenger,
            intake,
        }
    }

    pub async fn dispatch(&self, event: BotEvent) {
        let span = info_span!("event", kind = event.kind());
        async {
            match event {
                BotEvent::Start { chat, customer } => {
                    let reply =
                        greeting::greeting_message(chat, customer.as_ref(), &self.config.webapp_url);
                    self.reply(reply).await;
                }
                BotEvent::Help { chat } => {
                    self.reply(help::help_message(chat)).await;
                }
                BotEvent::WebAppData {
                    chat,
                    customer,
                    payload,
                } => {
                    let submission = WebAppSubmission {
                        chat,
                        customer,
                        payload,
                    };
                    self.intake.handle(submission).await;
                }
            }
        }
        .instrument(span)
        .await
    }

    #[instrument(skip(self, message), fields(destination = %message.destination))]
    async fn reply(&self, message: OutboundMessage) {
        if let Err(e) = self.messenger.send(message).await {
            warn!(error = %e, "Failed to send reply");
        }
    }
}
