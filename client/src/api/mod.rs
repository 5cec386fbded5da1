//! Wire types for the push backend.
//!
//! | Endpoint                  | Request body      | Response body         |
//! |---------------------------|-------------------|-----------------------|
//! | `POST /api/push`          | [`PushBody`]      | [`PushResponse`]      |
//! | `POST /api/push/batch`    | [`BatchPushBody`] | [`BatchPushResponse`] |
//! | `GET /api/push/history`   | none              | [`HistoryResponse`]   |

use crate::model::{BatchItemOutcome, ItemStatus, PushRequest};
use serde::{Deserialize, Deserializer, Serialize};

pub const PUSH_PATH: &str = "/api/push";
pub const BATCH_PUSH_PATH: &str = "/api/push/batch";
pub const HISTORY_PATH: &str = "/api/push/history";

/// String the backend puts in a batch item's `error` field to mean "no error".
const NULL_ERROR_SENTINEL: &str = "null";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushBody {
    pub url: String,
    pub content: String,
}

impl From<PushRequest> for PushBody {
    fn from(request: PushRequest) -> Self {
        let (url, content) = request.into_parts();
        Self { url, content }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchPushBody {
    pub pushes: Vec<PushBody>,
}

impl FromIterator<PushRequest> for BatchPushBody {
    fn from_iter<I: IntoIterator<Item = PushRequest>>(iter: I) -> Self {
        Self {
            pushes: iter.into_iter().map(PushBody::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PushResponse {
    pub success: bool,
    /// Any JSON value; usually a string
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl PushResponse {
    /// `data` as display text, or `None` when it carries nothing.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) count as absent, strings are
    /// used verbatim and any other JSON value is rendered compactly.
    pub fn data_text(&self) -> Option<String> {
        self.data.as_ref().and_then(json_text)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchPushResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub results: Option<Vec<BatchResultItem>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BatchResultItem {
    pub index: u32,
    pub url: String,
    /// `"success"`; anything else is treated as a failure
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_item_error")]
    pub error: Option<String>,
}

impl From<BatchResultItem> for BatchItemOutcome {
    fn from(item: BatchResultItem) -> Self {
        let status = if item.status == "success" {
            ItemStatus::Success
        } else {
            ItemStatus::Failure
        };

        Self {
            index: item.index,
            destination: item.url,
            status,
            error: item.error,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryResponse {
    pub success: bool,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Backend compatibility shim for batch item errors.
///
/// The backend serialises "no error" as the string `"null"`. That string, an
/// empty string and a real JSON `null` all become `None` here so nothing
/// downstream has to know about the sentinel. Non-string errors are kept as
/// compact JSON rather than failing the whole response.
fn deserialize_item_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(json_text)
        .filter(|error| error != NULL_ERROR_SENTINEL))
}

/// Display text of a JSON value, `None` for values a browser treats as falsy.
fn json_text(value: &serde_json::Value) -> Option<String> {
    use serde_json::Value;

    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_body_shape() {
        let requests = crate::validation::filter_batch([("u1", "a"), ("u2", "b")]);
        let body: BatchPushBody = requests.into_iter().collect();
        assert_eq!(
            serde_json::to_value(&body).expect("serializable"),
            json!({ "pushes": [
                { "url": "u1", "content": "a" },
                { "url": "u2", "content": "b" }
            ]})
        );
    }

    #[test]
    fn test_null_sentinel_is_normalized() {
        let response: BatchPushResponse = serde_json::from_value(json!({
            "success": true,
            "results": [
                { "index": 1, "url": "a", "status": "success" },
                { "index": 2, "url": "b", "status": "failure", "error": "null" },
                { "index": 3, "url": "c", "status": "failure", "error": null },
                { "index": 4, "url": "d", "status": "failure", "error": "" },
                { "index": 5, "url": "e", "status": "failure", "error": "timeout" }
            ]
        }))
        .expect("valid batch response");

        let errors: Vec<Option<String>> = response
            .results
            .expect("results present")
            .into_iter()
            .map(|item| item.error)
            .collect();
        assert_eq!(
            errors,
            [None, None, None, None, Some("timeout".to_string())]
        );
    }

    #[test]
    fn test_unknown_status_maps_to_failure() {
        let item = BatchResultItem {
            index: 1,
            url: "a".to_string(),
            status: "queued".to_string(),
            error: None,
        };
        assert_eq!(BatchItemOutcome::from(item).status, ItemStatus::Failure);
    }

    #[test]
    fn test_data_text_variants() {
        let parse = |value: serde_json::Value| -> PushResponse {
            serde_json::from_value(value).expect("valid push response")
        };

        assert_eq!(
            parse(json!({ "success": true, "data": "OK" })).data_text(),
            Some("OK".to_string())
        );
        assert_eq!(parse(json!({ "success": true })).data_text(), None);
        assert_eq!(parse(json!({ "success": true, "data": null })).data_text(), None);
        assert_eq!(parse(json!({ "success": true, "data": "" })).data_text(), None);
        assert_eq!(
            parse(json!({ "success": true, "data": { "id": 7 } })).data_text(),
            Some(r#"{"id":7}"#.to_string())
        );
        assert_eq!(
            parse(json!({ "success": true, "data": true })).data_text(),
            Some("true".to_string())
        );
        assert_eq!(
            parse(json!({ "success": true, "data": 42 })).data_text(),
            Some("42".to_string())
        );
    }

    #[test]
    fn test_falsy_data_counts_as_absent() {
        for data in [json!(false), json!(0), json!(0.0)] {
            let response: PushResponse =
                serde_json::from_value(json!({ "success": true, "data": data }))
                    .expect("valid push response");
            assert_eq!(response.data_text(), None, "data {data} should count as absent");
        }
    }

    #[test]
    fn test_non_string_item_error_keeps_the_batch() {
        let response: BatchPushResponse = serde_json::from_value(json!({
            "success": true,
            "results": [
                { "index": 1, "url": "a", "status": "failure", "error": 500 },
                { "index": 2, "url": "b", "status": "failure", "error": { "code": "E42" } },
                { "index": 3, "url": "c", "status": "success", "error": false }
            ]
        }))
        .expect("non-string errors should not reject the batch");

        let errors: Vec<Option<String>> = response
            .results
            .expect("results present")
            .into_iter()
            .map(|item| item.error)
            .collect();
        assert_eq!(
            errors,
            [
                Some("500".to_string()),
                Some(r#"{"code":"E42"}"#.to_string()),
                None
            ]
        );
    }
}
