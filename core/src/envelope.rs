//! Wire shape of every platform response.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ ok, result?, description?, error_code?, parameters? }`.
///
/// `ok` stays optional: the success path only accepts an explicit `true`,
/// while the error path only rejects on an explicit `false`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

/// Extra hints attached to some rejections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResponseParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_ok_is_none() {
        let env: Envelope = serde_json::from_str(r#"{"result": 1}"#).unwrap();
        assert_eq!(env.ok, None);
        assert_eq!(env.result, Some(Value::from(1)));
    }

    #[test]
    fn rejection_fields_decode() {
        let env: Envelope = serde_json::from_str(
            r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found","parameters":{"migrate_to_chat_id":-100}}"#,
        )
        .unwrap();
        assert_eq!(env.ok, Some(false));
        assert_eq!(env.error_code, Some(400));
        assert_eq!(env.description.as_deref(), Some("Bad Request: chat not found"));
        assert_eq!(env.parameters.unwrap().migrate_to_chat_id, Some(-100));
    }
}
