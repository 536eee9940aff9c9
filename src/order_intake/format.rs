//! Message templates for an accepted order.
//!
//! Output is Telegram HTML. Every value that came from the customer or the Web App is
//! escaped before it is placed into a template.

use crate::model::{CustomerIdentity, OrderRecord};
use teloxide::utils::html::escape;

/// Shown for an order field the Web App did not send.
pub const NOT_SPECIFIED: &str = "not specified";

/// Shown for a customer without a public username.
pub const NOT_PROVIDED: &str = "not provided";

/// Sent to the customer when the payload could not be decoded.
pub const DECODE_ERROR_TEXT: &str = "❌ Order processing error. Please try again.";

/// Sent to the customer when anything else went wrong.
pub const GENERIC_ERROR_TEXT: &str =
    "❌ Something went wrong. Please try again later or contact an administrator.";

fn field_or_placeholder(value: Option<&str>) -> String {
    value.map(escape).unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Confirmation sent back to the customer.
pub fn format_customer_message(order: &OrderRecord) -> String {
    format!(
        "✅ <b>Order accepted!</b>\n\n\
         📦 Item: {name}\n\
         💰 Price: {price} ₽\n\n\
         🕐 We will contact you shortly to arrange delivery and payment.\n\n\
         Thank you for your order! 💎",
        name = field_or_placeholder(order.name.as_deref()),
        price = escape(&order.price_or_default().to_string()),
    )
}

/// Order summary sent to the shop administrator.
pub fn format_admin_message(order: &OrderRecord, customer: &CustomerIdentity) -> String {
    let username = match &customer.username {
        Some(username) => format!("@{}", escape(username)),
        None => NOT_PROVIDED.to_string(),
    };

    format!(
        "🛍 <b>NEW ORDER</b>\n\n\
         👤 <b>Customer:</b>\n\
         • Name: {full_name}\n\
         • Username: {username}\n\
         • ID: {id}\n\n\
         📦 <b>Item:</b>\n\
         • Name: {name}\n\
         • Price: {price} ₽\n\
         • Description: {description}\n\n\
         📞 <b>Contact:</b> {contact}",
        full_name = escape(&customer.full_name()),
        id = customer.id,
        name = field_or_placeholder(order.name.as_deref()),
        price = escape(&order.price_or_default().to_string()),
        description = field_or_placeholder(order.description.as_deref()),
        contact = escape(&customer.contact()),
    )
}
