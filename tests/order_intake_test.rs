use std::io::Write;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use webapp_shop_bot::messaging::mock::MockMessenger;
use webapp_shop_bot::messaging::SendError;
use webapp_shop_bot::model::{CustomerIdentity, Destination};
use webapp_shop_bot::order_intake::{
    AdminNotice, IntakeError, IntakeOutcome, OrderIntake, WebAppSubmission, DECODE_ERROR_TEXT,
    GENERIC_ERROR_TEXT, NOT_SPECIFIED,
};

const CUSTOMER_CHAT: Destination = Destination::Chat(555);
const ADMIN_CHAT: Destination = Destination::Chat(-1009);

/// Collects formatted log lines written by a scoped `fmt` subscriber.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn submission(payload: &str) -> WebAppSubmission {
    WebAppSubmission {
        chat: CUSTOMER_CHAT,
        customer: Some(
            CustomerIdentity::new(555, "Anna")
                .with_last_name("Petrova")
                .with_username("anna_p"),
        ),
        payload: payload.to_string(),
    }
}

/// Payload without a description: both messages carry name and price, the admin summary
/// shows the placeholder for the description.
#[tokio::test]
async fn test_order_without_description() {
    let mock = MockMessenger::new();
    mock.expect_send(CUSTOMER_CHAT).return_ok();
    mock.expect_send(ADMIN_CHAT).return_ok();

    let intake = OrderIntake::new(mock.messenger(), Some(ADMIN_CHAT));
    let outcome = intake
        .handle(submission(r#"{"name": "Moon Earrings", "price": 1500}"#))
        .await;

    assert!(matches!(
        outcome,
        IntakeOutcome::Done {
            admin: AdminNotice::Sent
        }
    ));
    mock.verify();

    let customer = &mock.sent_to(&CUSTOMER_CHAT)[0];
    assert!(customer.text.contains("Moon Earrings"));
    assert!(customer.text.contains("1500"));

    let admin = &mock.sent_to(&ADMIN_CHAT)[0];
    assert!(admin.text.contains("Moon Earrings"));
    assert!(admin.text.contains("1500"));
    assert!(admin.text.contains(&format!("Description: {}", NOT_SPECIFIED)));
    assert!(admin.text.contains("555"));
}

/// Malformed payload: exactly one decode-error reply, nothing for the admin.
#[tokio::test]
async fn test_invalid_json_gets_decode_error_only() {
    let mock = MockMessenger::new();
    mock.expect_send(CUSTOMER_CHAT).return_ok();

    let intake = OrderIntake::new(mock.messenger(), Some(ADMIN_CHAT));
    let outcome = intake.handle(submission("not valid json")).await;

    assert!(matches!(outcome, IntakeOutcome::Failed(IntakeError::Decode(_))));
    mock.verify();

    let sent = mock.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].destination, CUSTOMER_CHAT);
    assert_eq!(sent[0].text, DECODE_ERROR_TEXT);
    assert!(mock.sent_to(&ADMIN_CHAT).is_empty());
}

/// Truncated and non-object payloads are decode errors too.
#[tokio::test]
async fn test_non_object_payloads_are_rejected() {
    for payload in [r#"{"name": "Moon"#, "[1, 2]", "42"] {
        let mock = MockMessenger::new();
        mock.expect_send(CUSTOMER_CHAT).return_ok();

        let intake = OrderIntake::new(mock.messenger(), Some(ADMIN_CHAT));
        let outcome = intake.handle(submission(payload)).await;

        assert!(!outcome.is_done(), "accepted {payload:?}");
        mock.verify();
        assert_eq!(mock.sent().len(), 1);
        assert_eq!(mock.sent()[0].text, DECODE_ERROR_TEXT);
    }
}

/// No admin destination: only the customer hears about the order.
#[tokio::test]
async fn test_unconfigured_admin_sends_once() {
    let mock = MockMessenger::new();
    mock.expect_send(CUSTOMER_CHAT).return_ok();

    let intake = OrderIntake::new(mock.messenger(), None);
    let outcome = intake
        .handle(submission(
            r#"{"name": "Bracelet", "price": 700, "description": "Beads"}"#,
        ))
        .await;

    assert!(matches!(
        outcome,
        IntakeOutcome::Done {
            admin: AdminNotice::Skipped
        }
    ));
    mock.verify();
    assert_eq!(mock.sent().len(), 1);
}

/// A failing admin send is dropped; the customer's confirmation stands and no error
/// reply follows it.
#[tokio::test]
async fn test_admin_failure_is_not_surfaced() {
    let mock = MockMessenger::new();
    mock.expect_send(CUSTOMER_CHAT).return_ok();
    mock.expect_send(ADMIN_CHAT)
        .return_err(SendError::Unavailable("chat not found".to_string()));

    let intake = OrderIntake::new(mock.messenger(), Some(ADMIN_CHAT));
    let outcome = intake
        .handle(submission(r#"{"name": "Ring", "price": 900}"#))
        .await;

    assert!(matches!(
        outcome,
        IntakeOutcome::Done {
            admin: AdminNotice::Failed
        }
    ));
    mock.verify();

    let to_customer = mock.sent_to(&CUSTOMER_CHAT);
    assert_eq!(to_customer.len(), 1);
    assert!(to_customer[0].text.contains("Order accepted"));
    assert!(!to_customer[0].text.contains(GENERIC_ERROR_TEXT));
}

/// A failing admin send leaves an error-level log line naming the failure.
#[tokio::test]
async fn test_admin_failure_is_logged() {
    let logs = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let mock = MockMessenger::new();
    mock.expect_send(CUSTOMER_CHAT).return_ok();
    mock.expect_send(ADMIN_CHAT)
        .return_err(SendError::Unavailable("chat not found".to_string()));

    let intake = OrderIntake::new(mock.messenger(), Some(ADMIN_CHAT));
    let outcome = intake
        .handle(submission(r#"{"name": "Ring", "price": 900}"#))
        .await;

    assert!(outcome.is_done());
    mock.verify();

    let output = logs.contents();
    let line = output
        .lines()
        .find(|line| line.contains("Failed to forward order to admin"))
        .expect("admin failure was not logged");
    assert!(line.contains("ERROR"));
    assert!(line.contains("chat not found"));
}

/// When the confirmation itself cannot be sent, the generic reply is attempted and the
/// admin is never contacted.
#[tokio::test]
async fn test_customer_send_failure_falls_back_to_generic_reply() {
    let mock = MockMessenger::new();
    mock.expect_send(CUSTOMER_CHAT)
        .return_err(SendError::Unavailable("timeout".to_string()));
    mock.expect_send(CUSTOMER_CHAT).return_ok();

    let intake = OrderIntake::new(mock.messenger(), Some(ADMIN_CHAT));
    let outcome = intake
        .handle(submission(r#"{"name": "Ring", "price": 900}"#))
        .await;

    assert!(matches!(
        outcome,
        IntakeOutcome::Failed(IntakeError::CustomerSend(_))
    ));
    mock.verify();

    let sent = mock.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].text, GENERIC_ERROR_TEXT);
    assert!(mock.sent_to(&ADMIN_CHAT).is_empty());
}

/// Every field missing: defaults everywhere, still accepted.
#[tokio::test]
async fn test_empty_object_uses_defaults() {
    let mock = MockMessenger::new();
    mock.expect_send(CUSTOMER_CHAT).return_ok();
    mock.expect_send(ADMIN_CHAT).return_ok();

    let intake = OrderIntake::new(mock.messenger(), Some(ADMIN_CHAT));
    let outcome = intake.handle(submission("{}")).await;

    assert!(outcome.is_done());
    mock.verify();

    let admin = &mock.sent_to(&ADMIN_CHAT)[0].text;
    assert!(admin.contains(&format!("• Name: {}", NOT_SPECIFIED)));
    assert!(admin.contains("Price: 0 ₽"));
    assert!(admin.contains(&format!("Description: {}", NOT_SPECIFIED)));
}
