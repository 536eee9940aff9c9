use crate::messaging::OutboundMessage;
use crate::model::{CustomerIdentity, Destination};
use teloxide::utils::html::escape;
use url::Url;

/// Label of the button that opens the catalog.
pub const OPEN_SHOP_LABEL: &str = "🛍 Open shop";

/// Welcome text for `/start`, addressed to the customer by first name when known.
pub fn greeting_text(customer: Option<&CustomerIdentity>) -> String {
    let salutation = match customer {
        Some(customer) => format!(
            "👋 Welcome to our handmade jewelry shop, {}!",
            escape(&customer.first_name)
        ),
        None => "👋 Welcome to our handmade jewelry shop!".to_string(),
    };

    format!(
        "{salutation}\n\n\
         ✨ Here you will find:\n\
         • Unique earrings\n\
         • Delicate bracelets\n\
         • Stylish rings\n\
         • Beautiful necklaces\n\n\
         Every piece is made by hand, with love, from quality materials.\n\n\
         Tap the button below to open the catalog:"
    )
}

/// The `/start` reply: greeting plus the button that opens the Web App.
pub fn greeting_message(
    chat: Destination,
    customer: Option<&CustomerIdentity>,
    webapp_url: &Url,
) -> OutboundMessage {
    OutboundMessage::text(chat, greeting_text(customer))
        .with_web_app_button(OPEN_SHOP_LABEL, webapp_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greets_by_first_name() {
        let anna = CustomerIdentity::new(1, "Anna");
        assert!(greeting_text(Some(&anna)).contains("shop, Anna!"));
        assert!(greeting_text(None).contains("shop!"));
    }

    #[test]
    fn carries_web_app_button() {
        let url = Url::parse("https://shop.example.com/catalog").unwrap();
        let message = greeting_message(Destination::Chat(5), None, &url);

        let button = message.web_app_button.expect("button attached");
        assert_eq!(button.label, OPEN_SHOP_LABEL);
        assert_eq!(button.url, url);
        assert_eq!(message.destination, Destination::Chat(5));
    }
}
