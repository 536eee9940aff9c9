//! # Order Intake
//!
//! Turns a Web App submission into a confirmation for the customer and, when an admin
//! destination is configured, an order summary for the shop.
//!
//! ## Flow
//!
//! ```text
//! RECEIVED ──parse──▶ PARSED ──send──▶ NOTIFIED_CUSTOMER ──▶ NOTIFIED_ADMIN | ADMIN_SKIPPED ──▶ DONE
//!    │                  │
//!    └──────────────────┴──▶ ERROR (customer gets a fixed error reply, admin is never contacted)
//! ```
//!
//! The customer leg and the admin leg run behind separate recovery boundaries. Once the
//! customer has been told the order is accepted, nothing on the admin leg can change that:
//! an admin failure is logged and reported as [`AdminNotice::Failed`].
//!
//! ## Structure
//!
//! - [`parser`] - [`parse`] decodes the payload into an [`OrderRecord`]
//! - [`format`] - message templates
//! - [`error`] - [`DecodeError`] and [`IntakeError`]

pub mod error;
pub mod format;
pub mod parser;

pub use error::*;
pub use format::*;
pub use parser::*;

use crate::messaging::{Messenger, OutboundMessage};
use crate::model::{CustomerIdentity, Destination, OrderRecord};
use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Web App data as delivered by the chat platform.
#[derive(Debug, Clone, PartialEq)]
pub struct WebAppSubmission {
    /// Conversation the submission came from; replies go here.
    pub chat: Destination,
    /// Sender, when the platform provided one.
    pub customer: Option<CustomerIdentity>,
    /// Raw payload text.
    pub payload: String,
}

/// What happened to the admin summary of an accepted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminNotice {
    Sent,
    /// No admin destination is configured.
    Skipped,
    /// Delivery failed; the failure was logged and dropped.
    Failed,
}

/// Terminal state of one intake.
#[derive(Debug)]
pub enum IntakeOutcome {
    /// The customer was told the order is accepted.
    Done { admin: AdminNotice },
    /// The order was not accepted; the customer got an error reply (best-effort).
    Failed(IntakeError),
}

impl IntakeOutcome {
    pub fn is_done(&self) -> bool {
        matches!(self, IntakeOutcome::Done { .. })
    }
}

struct AcceptedOrder {
    order: OrderRecord,
    customer: CustomerIdentity,
}

/// Handles Web App order submissions.
///
/// Holds no per-order state: every call to [`handle`](Self::handle) is independent.
#[derive(Clone)]
pub struct OrderIntake {
    messenger: Arc<dyn Messenger>,
    admin: Option<Destination>,
}

impl OrderIntake {
    /// `admin` is `None` when no admin destination is configured.
    pub fn new(messenger: Arc<dyn Messenger>, admin: Option<Destination>) -> Self {
        Self { messenger, admin }
    }

    /// Processes one submission. Never fails and never panics past this boundary.
    #[instrument(skip(self, submission), fields(chat = %submission.chat))]
    pub async fn handle(&self, submission: WebAppSubmission) -> IntakeOutcome {
        let chat = submission.chat.clone();

        let accepted = match AssertUnwindSafe(self.confirm(submission))
            .catch_unwind()
            .await
        {
            Ok(Ok(accepted)) => accepted,
            Ok(Err(e)) => return self.reject(chat, e).await,
            Err(panic) => {
                return self
                    .reject(chat, IntakeError::Panicked(panic_message(&*panic)))
                    .await
            }
        };

        let admin = self.notify_admin(&accepted).await;
        info!(
            customer = %accepted.customer.contact(),
            order = ?accepted.order,
            ?admin,
            "New order accepted"
        );
        IntakeOutcome::Done { admin }
    }

    /// Customer leg: decode, then confirm to the customer.
    async fn confirm(&self, submission: WebAppSubmission) -> Result<AcceptedOrder, IntakeError> {
        let customer = submission.customer.ok_or(IntakeError::MissingCustomer)?;
        let order = parse(&submission.payload)?;
        debug!(?order, "Order payload decoded");

        let confirmation = OutboundMessage::text(submission.chat, format_customer_message(&order));
        self.messenger
            .send(confirmation)
            .await
            .map_err(IntakeError::CustomerSend)?;

        Ok(AcceptedOrder { order, customer })
    }

    /// Admin leg. Failures end here.
    async fn notify_admin(&self, accepted: &AcceptedOrder) -> AdminNotice {
        let Some(admin) = &self.admin else {
            return AdminNotice::Skipped;
        };

        let forward = async {
            let summary = OutboundMessage::text(
                admin.clone(),
                format_admin_message(&accepted.order, &accepted.customer),
            );
            self.messenger.send(summary).await
        };

        match AssertUnwindSafe(forward).catch_unwind().await {
            Ok(Ok(())) => {
                debug!(destination = %admin, "Order forwarded to admin");
                AdminNotice::Sent
            }
            Ok(Err(e)) => {
                error!(destination = %admin, error = %e, "Failed to forward order to admin");
                AdminNotice::Failed
            }
            Err(panic) => {
                error!(
                    destination = %admin,
                    panic = %panic_message(&*panic),
                    "Forwarding order to admin panicked"
                );
                AdminNotice::Failed
            }
        }
    }

    /// Error path: tell the customer, log, and report the failure.
    async fn reject(&self, chat: Destination, e: IntakeError) -> IntakeOutcome {
        let reply = match &e {
            IntakeError::Decode(_) => {
                warn!(error = %e, "Rejected order payload");
                DECODE_ERROR_TEXT
            }
            _ => {
                error!(error = %e, "Order intake failed");
                GENERIC_ERROR_TEXT
            }
        };

        if let Err(send_error) = self.messenger.send(OutboundMessage::text(chat, reply)).await {
            error!(error = %send_error, "Failed to deliver error reply to customer");
        }

        IntakeOutcome::Failed(e)
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
