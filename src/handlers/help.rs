use crate::messaging::OutboundMessage;
use crate::model::Destination;

/// Reply to `/help`.
pub const HELP_TEXT: &str = "🆘 <b>Help</b>

Available commands:
• /start — start the bot and open the shop
• /help — show this message

❓ <b>How to place an order:</b>
1. Tap \"🛍 Open shop\"
2. Pick a piece you like
3. Tap \"🛒 Order\"
4. Wait for the confirmation

📞 <b>Contact us:</b>
Write to this chat with any questions.";

pub fn help_message(chat: Destination) -> OutboundMessage {
    OutboundMessage::text(chat, HELP_TEXT)
}
