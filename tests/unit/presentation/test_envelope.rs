use serde_json::json;
use std::collections::BTreeMap;
use suyatrade::model::responses::{OrderAck, ResponseBody};
use suyatrade::presentation::envelope::Envelope;

#[test]
fn test_order_ack_passes_through_untouched() {
    let mut headers = BTreeMap::new();
    headers.insert("x-request-id".to_string(), "r-1".to_string());
    let ack = OrderAck {
        status: 400,
        body: ResponseBody::new(json!({ "return_code": 20 })),
        headers,
    };

    let envelope = Envelope::from(ack);

    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "status_code": 400,
            "response": { "return_code": 20 },
            "headers": { "x-request-id": "r-1" }
        })
    );
}

#[test]
fn test_saved_acknowledgement() {
    assert_eq!(
        serde_json::to_value(Envelope::saved()).unwrap(),
        json!({ "status_code": 200, "response": { "ok": true }, "headers": {} })
    );
}
