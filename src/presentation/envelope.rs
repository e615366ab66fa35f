use crate::model::responses::OrderAck;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;

/// Response shape the dashboard expects from pass-through routes
///
/// `status_code` is the remote service's status, not the status of the facade
/// response, which is always 200 for this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Remote (or local) status code
    pub status_code: i32,
    /// Response body
    pub response: Value,
    /// Response headers
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Envelope {
    /// A locally produced 200 with no headers
    #[must_use]
    pub fn ok(response: Value) -> Self {
        Self {
            status_code: 200,
            response,
            headers: BTreeMap::new(),
        }
    }

    /// The `{"ok": true}` acknowledgement of a successful save
    #[must_use]
    pub fn saved() -> Self {
        Self::ok(json!({ "ok": true }))
    }
}

impl From<OrderAck> for Envelope {
    fn from(ack: OrderAck) -> Self {
        Self {
            status_code: ack.status,
            response: ack.body.into_value(),
            headers: ack.headers,
        }
    }
}
