use crate::messaging::SendError;
use crate::model::Destination;
use async_trait::async_trait;
use url::Url;

/// An inline button that opens a Web App inside the chat client.
#[derive(Debug, Clone, PartialEq)]
pub struct WebAppButton {
    pub label: String,
    pub url: Url,
}

/// One message to deliver.
///
/// `text` is Telegram HTML: callers escape anything they did not write themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub destination: Destination,
    pub text: String,
    pub web_app_button: Option<WebAppButton>,
}

impl OutboundMessage {
    /// A text-only message.
    pub fn text(destination: Destination, text: impl Into<String>) -> Self {
        Self {
            destination,
            text: text.into(),
            web_app_button: None,
        }
    }

    /// Attaches a button that opens `url` as a Web App.
    pub fn with_web_app_button(mut self, label: impl Into<String>, url: Url) -> Self {
        self.web_app_button = Some(WebAppButton {
            label: label.into(),
            url,
        });
        self
    }
}

/// Sends messages to conversations on the chat platform.
///
/// Each call is a separate, independently fallible network operation. Implementations
/// do not retry.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<(), SendError>;
}
