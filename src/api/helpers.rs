//! Common helper functions for API handlers.
//!
//! This module provides the Lambda-proxy response builders shared by the
//! handler and its tests.

use serde_json::{Value, json};

/// Returns a 200 OK response wrapping the given JSON body.
#[must_use]
pub fn ok_response(body: &Value) -> Value {
    json!({ "statusCode": 200, "body": body.to_string() })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}
