use crate::model::OrderRecord;
use crate::order_intake::DecodeError;

/// Decodes a Web App payload into an [`OrderRecord`].
///
/// The payload must be a JSON object. `name`, `price` and `description` are all optional,
/// a `null` counts as missing and unknown keys are ignored. Values are not validated, and
/// a numeric price keeps the exact literal the Web App sent.
pub fn parse(raw: &str) -> Result<OrderRecord, DecodeError> {
    Ok(serde_json::from_str(raw)?)
}
