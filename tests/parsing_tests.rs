use cost_advisor::api::parsing::{extract_body, parse_request, split_tag};
use serde_json::json;

#[test]
fn test_extract_body_returns_string_body() {
    let payload = json!({ "body": "{\"region\": \"eu-west-1\"}" });
    assert_eq!(extract_body(&payload).unwrap(), "{\"region\": \"eu-west-1\"}");
}

#[test]
fn test_extract_body_rejects_missing_body() {
    let payload = json!({ "headers": {} });
    let err = extract_body(&payload).unwrap_err();
    assert!(err.to_string().contains("missing body"));
}

#[test]
fn test_extract_body_rejects_non_string_body() {
    // API Gateway always delivers the body as a JSON string; an object here
    // means the event did not come through the proxy integration
    let payload = json!({ "body": { "region": "eu-west-1" } });
    let err = extract_body(&payload).unwrap_err();
    assert!(err.to_string().contains("not a string"));
}

#[test]
fn test_parse_request_empty_object_is_valid() {
    let request = parse_request("{}").unwrap();
    assert!(request.region.is_none());
    assert!(request.tag.is_none());
}

#[test]
fn test_parse_request_full_body() {
    let request = parse_request("{\"region\": \"eu-west-1\", \"tag\": \"env:prod\"}").unwrap();
    assert_eq!(request.region.as_deref(), Some("eu-west-1"));
    assert_eq!(request.tag.as_deref(), Some("env:prod"));
}

#[test]
fn test_parse_request_ignores_unknown_fields() {
    let request = parse_request("{\"region\": \"us-west-2\", \"verbose\": true}").unwrap();
    assert_eq!(request.region.as_deref(), Some("us-west-2"));
}

#[test]
fn test_parse_request_rejects_invalid_json() {
    let err = parse_request("not json at all").unwrap_err();
    assert!(err.to_string().contains("Invalid request JSON"));
}

#[test]
fn test_split_tag_on_first_colon() {
    assert_eq!(split_tag("env:prod").unwrap(), ("env", "prod"));

    // Only the first colon separates key from value
    assert_eq!(split_tag("team:platform:core").unwrap(), ("team", "platform:core"));
}

#[test]
fn test_split_tag_allows_empty_key_or_value() {
    assert_eq!(split_tag(":prod").unwrap(), ("", "prod"));
    assert_eq!(split_tag("env:").unwrap(), ("env", ""));
}

#[test]
fn test_split_tag_rejects_tag_without_colon() {
    let err = split_tag("noColon").unwrap_err();
    assert!(!err.to_string().is_empty());
    assert!(err.to_string().contains("expected key:value"));
}
