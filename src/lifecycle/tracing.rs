//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG` (default `info`). Records that `teloxide` emits through the `log` crate are
//! picked up by the same subscriber.
//!
//! ## What Gets Traced
//!
//! - **Startup**: configuration summary (the token is never logged), command registration
//! - **Events**: one `event` span per inbound event, tagged with its kind
//! - **Orders**: accepted orders at `info`, rejected payloads at `warn`, failed
//!   admin deliveries and other intake failures at `error`
//! - **Sends**: each Telegram request runs in a span carrying its destination
//!
//! ## Usage Examples
//!
//! ```bash
//! # Accepted orders and failures
//! RUST_LOG=info cargo run
//!
//! # Decoded payloads and per-send spans
//! RUST_LOG=debug cargo run
//!
//! # Only this crate at debug, teloxide at warn
//! RUST_LOG=webapp_shop_bot=debug,teloxide=warn cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! ```text
//! INFO event: New order accepted customer="@anna_p" order=OrderRecord { name: Some("Moon Earrings"), .. } admin=Sent
//! WARN event:handle: Rejected order payload error=Order payload is not a JSON object: expected value at line 1 column 1
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
