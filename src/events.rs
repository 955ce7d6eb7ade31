use serde_json::Value;

/// Errors raised while turning an invocation event into a record payload.
#[derive(thiserror::Error, Debug)]
pub enum EventError {
    #[error("invocation event is missing required key \"body\"")]
    MissingBody,
    #[error("failed to serialize event body - {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Look up the `body` key in the invocation event. The event is an arbitrary
/// JSON mapping supplied by the invoking platform; only `body` is contractual.
pub fn extract_body(event: &Value) -> Result<&Value, EventError> {
    event.get("body").ok_or(EventError::MissingBody)
}

/// Encode the body as the record payload (JSON text).
pub fn encode_payload(body: &Value) -> Result<String, EventError> {
    Ok(serde_json::to_string(body)?)
}
