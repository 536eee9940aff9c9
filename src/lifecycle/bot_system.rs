use crate::handlers::Router;
use crate::lifecycle::BotConfig;
use crate::messaging::telegram::{schema, Command, TelegramMessenger, TracingErrorHandler};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, trace, warn};

/// Wires the configuration, the Telegram client and the [`Router`] together and runs the
/// long-polling loop.
///
/// # Example
///
/// ```ignore
/// let config = BotConfig::from_env()?;
/// BotSystem::new(config).run().await;
/// ```
pub struct BotSystem {
    bot: Bot,
    router: Arc<Router>,
}

impl BotSystem {
    pub fn new(config: BotConfig) -> Self {
        let bot = Bot::new(config.token.clone());
        let messenger = Arc::new(TelegramMessenger::new(bot.clone()));
        let router = Arc::new(Router::new(Arc::new(config), messenger));
        Self { bot, router }
    }

    /// Registers the command menu and dispatches updates until Ctrl-C.
    pub async fn run(self) {
        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!(error = %e, "Failed to register bot commands");
        }

        info!("Bot started");

        Dispatcher::builder(self.bot, schema())
            .dependencies(dptree::deps![self.router])
            .default_handler(|update: Arc<Update>| async move {
                trace!(update_id = ?update.id, "Ignoring update");
            })
            .error_handler(Arc::new(TracingErrorHandler))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        info!("Bot stopped");
    }
}
