//! # Mock Messenger
//!
//! [`MockMessenger`] implements [`Messenger`] entirely in memory. Tests queue the sends they
//! expect, in order, together with the result each send should produce, then hand the
//! mock to the code under test.
//!
//! ```rust
//! use std::sync::Arc;
//! use webapp_shop_bot::messaging::mock::MockMessenger;
//! use webapp_shop_bot::messaging::{Messenger, OutboundMessage, SendError};
//! use webapp_shop_bot::model::Destination;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockMessenger::new();
//!     mock.expect_send(Destination::Chat(1)).return_ok();
//!     mock.expect_send(Destination::Chat(-100))
//!         .return_err(SendError::Unavailable("chat not found".into()));
//!
//!     let messenger: Arc<dyn Messenger> = mock.messenger();
//!     assert!(messenger.send(OutboundMessage::text(Destination::Chat(1), "hi")).await.is_ok());
//!     assert!(messenger.send(OutboundMessage::text(Destination::Chat(-100), "hi")).await.is_err());
//!
//!     mock.verify();
//!     assert_eq!(mock.sent().len(), 2);
//! }
//! ```
//!
//! A send that arrives with no expectation left, or for a different destination than the
//! next expectation, panics.

use crate::messaging::{Messenger, OutboundMessage, SendError};
use crate::model::Destination;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

struct Expectation {
    destination: Destination,
    response: Result<(), SendError>,
}

/// An in-memory [`Messenger`] with an ordered expectation queue.
///
/// Clones share the same queue and the same record of sent messages.
#[derive(Clone, Default)]
pub struct MockMessenger {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl MockMessenger {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mock as a shareable trait object.
    pub fn messenger(&self) -> Arc<dyn Messenger> {
        Arc::new(self.clone())
    }

    /// Expects the next send to go to `destination`.
    pub fn expect_send(&self, destination: Destination) -> SendExpectationBuilder {
        SendExpectationBuilder {
            destination,
            expectations: self.expectations.clone(),
        }
    }

    /// Every message handed to [`Messenger::send`], in call order, including failed ones.
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }

    /// Messages sent to `destination`, in call order.
    pub fn sent_to(&self, destination: &Destination) -> Vec<OutboundMessage> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|message| &message.destination == destination)
            .cloned()
            .collect()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

#[async_trait]
impl Messenger for MockMessenger {
    async fn send(&self, message: OutboundMessage) -> Result<(), SendError> {
        let expectation = self.expectations.lock().unwrap().pop_front();
        let destination = message.destination.clone();
        self.sent.lock().unwrap().push(message);

        match expectation {
            Some(Expectation {
                destination: expected,
                response,
            }) if expected == destination => response,
            Some(Expectation {
                destination: expected,
                ..
            }) => panic!(
                "Unexpected send to {}: next expectation is for {}",
                destination, expected
            ),
            None => panic!("Unexpected send to {}: no expectations left", destination),
        }
    }
}

/// Builder for `send` expectations.
pub struct SendExpectationBuilder {
    destination: Destination,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl SendExpectationBuilder {
    /// The send succeeds.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            destination: self.destination,
            response: Ok(()),
        });
    }

    /// The send fails with `error`.
    pub fn return_err(self, error: SendError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation {
            destination: self.destination,
            response: Err(error),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_messages_and_returns_queued_results() {
        let mock = MockMessenger::new();
        mock.expect_send(Destination::Chat(1)).return_ok();
        mock.expect_send(Destination::Chat(2))
            .return_err(SendError::Unavailable("blocked".to_string()));

        let messenger = mock.messenger();
        let first = messenger
            .send(OutboundMessage::text(Destination::Chat(1), "one"))
            .await;
        let second = messenger
            .send(OutboundMessage::text(Destination::Chat(2), "two"))
            .await;

        assert!(first.is_ok());
        assert!(matches!(second, Err(SendError::Unavailable(_))));
        mock.verify();
        assert_eq!(mock.sent_to(&Destination::Chat(2))[0].text, "two");
    }

    #[tokio::test]
    #[should_panic(expected = "no expectations left")]
    async fn panics_on_unexpected_send() {
        let mock = MockMessenger::new();
        let _ = mock
            .send(OutboundMessage::text(Destination::Chat(1), "surprise"))
            .await;
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn verify_reports_unmet_expectations() {
        let mock = MockMessenger::new();
        mock.expect_send(Destination::Chat(1)).return_ok();
        mock.verify();
    }
}
