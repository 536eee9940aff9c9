use serde::de::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use std::collections::HashMap;
use std::fmt::Display;

/// A customer's order as submitted by the catalog Web App.
///
/// An `OrderRecord` only exists after the payload decoded successfully; see
/// [`order_intake::parse`](crate::order_intake::parse). It lives for the duration of one
/// inbound event and is never stored.
///
/// Decoding is lenient: the payload must be a JSON object, but `name`, `price` and
/// `description` may be missing, `null` or of any JSON type, and unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderRecord {
    /// Product name; `None` when the payload omitted it.
    pub name: Option<String>,
    /// Product price; `None` when the payload omitted it. Renders as `0` in that case.
    pub price: Option<Price>,
    /// Product description; `None` when the payload omitted it.
    pub description: Option<String>,
}

/// Price as the Web App sent it.
///
/// No validation happens: a JSON number keeps its literal text, so precision and range
/// are never lost, and anything else is kept as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Price {
    /// A JSON number literal, verbatim.
    Amount(String),
    Text(String),
}

impl Default for Price {
    fn default() -> Self {
        Price::Amount("0".to_string())
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Price::Amount(amount) => f.write_str(amount),
            Price::Text(text) => f.write_str(text),
        }
    }
}

impl OrderRecord {
    /// Creates a record with every field present.
    pub fn new(
        name: impl Into<String>,
        price: impl Into<serde_json::Number>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(Price::Amount(price.into().to_string())),
            description: Some(description.into()),
        }
    }

    /// The price to show, falling back to `0` when the payload had none.
    pub fn price_or_default(&self) -> Price {
        self.price.clone().unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for OrderRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut fields = HashMap::<String, Box<RawValue>>::deserialize(deserializer)?;

        Ok(OrderRecord {
            name: fields.remove("name").and_then(|raw| loose_text(&raw)),
            price: fields.remove("price").and_then(|raw| loose_price(&raw)),
            description: fields.remove("description").and_then(|raw| loose_text(&raw)),
        })
    }
}

fn is_string(raw: &str) -> bool {
    raw.starts_with('"')
}

fn is_number(raw: &str) -> bool {
    raw.starts_with(|c: char| c == '-' || c.is_ascii_digit())
}

/// Strings are unescaped, `null` is absent, any other value keeps its JSON text.
fn loose_text(raw: &RawValue) -> Option<String> {
    match raw.get() {
        "null" => None,
        text if is_string(text) => serde_json::from_str(text).ok(),
        text => Some(text.to_string()),
    }
}

fn loose_price(raw: &RawValue) -> Option<Price> {
    match raw.get() {
        "null" => None,
        text if is_string(text) => serde_json::from_str(text).ok().map(Price::Text),
        text if is_number(text) => Some(Price::Amount(text.to_string())),
        text => Some(Price::Text(text.to_string())),
    }
}
