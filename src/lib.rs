//! # Web App Shop Bot
//!
//! > **A Telegram storefront for a handmade-jewelry shop.**
//!
//! The bot greets customers, opens the catalog Web App from an inline button, and turns the
//! order the Web App submits into a confirmation for the customer and a summary for the
//! shop administrator.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Core ([`order_intake`])
//! Decodes a Web App payload, formats both notifications and sends them, each behind its
//! own recovery boundary.
//! - **Key items**: [`OrderIntake`](order_intake::OrderIntake), [`parse`](order_intake::parse),
//!   [`format_customer_message`](order_intake::format_customer_message),
//!   [`format_admin_message`](order_intake::format_admin_message).
//!
//! ### 2. The Router ([`handlers`])
//! Maps every inbound [`BotEvent`](handlers::BotEvent) to its handler.
//!
//! ### 3. The Adapter ([`messaging`])
//! The [`Messenger`](messaging::Messenger) seam, its Telegram implementation and the
//! [`MockMessenger`](messaging::mock::MockMessenger) used by tests.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! Configuration, tracing and the long-polling loop.
//!
//! ### 5. The Data ([`model`])
//! [`OrderRecord`](model::OrderRecord), [`CustomerIdentity`](model::CustomerIdentity),
//! [`Destination`](model::Destination).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! export BOT_TOKEN=123456:ABC...
//! export WEBAPP_URL=https://shop.example.com/
//! export ADMIN_CHAT_ID=-1001234567890   # optional
//! RUST_LOG=info cargo run
//! ```
//!
//! A `.env` file with the same keys works too.

pub mod handlers;
pub mod lifecycle;
pub mod messaging;
pub mod model;
pub mod order_intake;
