//! Error types for order intake.

use crate::messaging::SendError;
use thiserror::Error;

/// The Web App payload is not a JSON object.
#[derive(Debug, Error)]
#[error("Order payload is not a JSON object: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

/// Why an order never reached the customer-confirmed state.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// The inbound event carried no sender.
    #[error("Web App data arrived without a sender")]
    MissingCustomer,

    /// The payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The confirmation could not be delivered to the customer.
    #[error("Failed to confirm order to customer: {0}")]
    CustomerSend(#[source] SendError),

    /// Something panicked while handling the order.
    #[error("Order intake panicked: {0}")]
    Panicked(String),
}
