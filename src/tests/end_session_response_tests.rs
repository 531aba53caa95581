use assert_json_diff::assert_json_eq;
use serde_json::{json, Value};
use url::Url;

use crate::end_session::EndSessionResponseBuilder;

use super::helpers::{get_request, get_response, Response};

#[test]
fn builds_a_response_for_the_request() {
    let response = EndSessionResponseBuilder::new(get_request()).build();

    assert_eq!(&get_request(), response.request());
}

#[test]
fn from_uri_leaves_the_builder_unchanged() {
    let callback = Url::parse("app://callback?state=abc&foo=bar").unwrap();

    let response = EndSessionResponseBuilder::new(get_request())
        .from_uri(&callback)
        .build();

    assert_eq!(get_response(), response);
}

#[test]
fn serializes_only_the_request() {
    let response = get_response();

    assert_json_eq!(
        json!({ "request": get_request().serialize() }),
        response.serialize()
    );
}

#[test]
fn deserializes_what_was_serialized() {
    let response = get_response();

    let parsed = Response::deserialize(&response.serialize()).unwrap();

    assert_eq!(response, parsed);
    assert_eq!(
        "app://callback",
        parsed.request().redirect_uri().as_str()
    );
}

#[test]
fn deserializes_from_text() {
    let response = get_response();

    let parsed = Response::deserialize_from_text(&response.serialize_to_text()).unwrap();

    assert_eq!(response, parsed);
}

#[test]
fn returns_malformed_document_if_request_is_missing() {
    let error = Response::deserialize(&json!({})).unwrap_err();

    assert!(error.is_malformed_document());
    assert_eq!(
        "end session request not provided and not found in json",
        error.malformed_document().message
    );
}

#[test]
fn returns_malformed_document_if_the_nested_request_is_invalid() {
    let error = Response::deserialize(&json!({
        "request": { "redirectUri": "app://callback" }
    }))
    .unwrap_err();

    assert!(error.is_malformed_document());
    assert_eq!(
        "configuration is missing",
        error.malformed_document().message
    );
}

#[test]
fn returns_malformed_document_for_null() {
    let error = Response::deserialize(&Value::Null).unwrap_err();

    assert!(error.is_malformed_document());
}

#[test]
fn returns_malformed_document_for_invalid_text() {
    let error = Response::deserialize_from_text("request").unwrap_err();

    assert!(error.is_malformed_document());
    assert_eq!(
        "text is not a valid json document",
        error.malformed_document().message
    );
}
