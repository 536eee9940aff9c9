//! Telegram Bot API integration built on `teloxide`.
//!
//! Inbound: [`schema`] turns each Telegram message into a [`BotEvent`] and hands it to the
//! shared [`Router`]. Outbound: [`TelegramMessenger`] implements [`Messenger`].

use crate::handlers::{BotEvent, Router};
use crate::messaging::{Messenger, OutboundMessage, SendError};
use crate::model::{CustomerIdentity, Destination};
use async_trait::async_trait;
use futures::future::BoxFuture;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::error_handlers::ErrorHandler;
use teloxide::prelude::*;
use teloxide::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, Me, ParseMode, Recipient, User, WebAppInfo,
};
use teloxide::utils::command::BotCommands;
use tracing::{debug, error, instrument};

/// Error type of the update handler tree.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Commands listed in the bot menu.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "start the bot and open the shop")]
    Start,
    #[command(description = "show help")]
    Help,
}

/// [`Messenger`] backed by a `teloxide` [`Bot`].
///
/// Every message is sent in HTML parse mode.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    #[instrument(skip(self, message), fields(destination = %message.destination))]
    async fn send(&self, message: OutboundMessage) -> Result<(), SendError> {
        let mut request = self
            .bot
            .send_message(recipient(&message.destination), message.text)
            .parse_mode(ParseMode::Html);

        if let Some(button) = message.web_app_button {
            let keyboard = InlineKeyboardMarkup::new([[InlineKeyboardButton::web_app(
                button.label,
                WebAppInfo { url: button.url },
            )]]);
            request = request.reply_markup(keyboard);
        }

        request.await?;
        debug!("Message delivered");
        Ok(())
    }
}

fn recipient(destination: &Destination) -> Recipient {
    match destination {
        Destination::Chat(id) => Recipient::Id(ChatId(*id)),
        Destination::Channel(name) => Recipient::ChannelUsername(format!("@{}", name)),
    }
}

/// Maps a Telegram user onto the identity the handlers work with.
pub fn customer_from_user(user: &User) -> CustomerIdentity {
    CustomerIdentity {
        id: user.id.0,
        first_name: user.first_name.clone(),
        last_name: user.last_name.clone(),
        username: user.username.clone(),
    }
}

impl BotEvent {
    /// Classifies a Telegram message.
    ///
    /// Web App data wins over text; text must parse as one of [`Command`]. Everything
    /// else yields `None` and is ignored.
    pub fn from_message(msg: &Message, bot_username: &str) -> Option<Self> {
        let chat = Destination::Chat(msg.chat.id.0);
        let customer = msg.from.as_ref().map(customer_from_user);

        if let Some(data) = msg.web_app_data() {
            return Some(BotEvent::WebAppData {
                chat,
                customer,
                payload: data.data.clone(),
            });
        }

        match Command::parse(msg.text()?, bot_username).ok()? {
            Command::Start => Some(BotEvent::Start { chat, customer }),
            Command::Help => Some(BotEvent::Help { chat }),
        }
    }
}

fn classify(msg: Message, me: Me) -> Option<BotEvent> {
    BotEvent::from_message(&msg, me.username())
}

async fn route(event: BotEvent, router: Arc<Router>) -> Result<(), HandlerError> {
    router.dispatch(event).await;
    Ok(())
}

/// The update handler tree: messages that classify as a [`BotEvent`] go to the router.
///
/// Expects an `Arc<Router>` among the dispatcher dependencies.
pub fn schema() -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter_map(classify)
        .endpoint(route)
}

/// Last-resort observer installed on the dispatcher. Only logs.
pub struct TracingErrorHandler;

impl ErrorHandler<HandlerError> for TracingErrorHandler {
    fn handle_error(self: Arc<Self>, error: HandlerError) -> BoxFuture<'static, ()> {
        Box::pin(async move {
            error!(error = %error, "Unhandled error while processing an update");
        })
    }
}
