use serde_json::Value;

use crate::Payload;
use crate::client::Response;
use crate::error::ValidationError;

/// Check that every payload field comes back unchanged.
///
/// Keys are checked in payload order and the first failure wins. Only top-level
/// keys are compared, by JSON value equality; a number `42` does not match the
/// string `"42"`. Extra keys in the response (such as a server-assigned `id`)
/// are ignored.
pub fn validate(sent: &Payload, response: &Response) -> Result<(), ValidationError> {
    for (key, expected) in sent.fields() {
        match response.get(key) {
            None => {
                return Err(ValidationError::MissingField {
                    key: key.to_string(),
                });
            }
            Some(Value::String(actual)) if actual == expected => {}
            Some(actual) => {
                return Err(ValidationError::Mismatch {
                    key: key.to_string(),
                    expected: expected.to_string(),
                    actual: actual.clone(),
                });
            }
        }
    }
    Ok(())
}
