use std::collections::HashMap;

use crate::end_session::EXTRA_RESPONSE;
use crate::types::{Envelope, TransportEnvelope};

use super::helpers::{get_response, Response};

#[test]
fn stores_the_response_under_a_single_key() {
    let envelope = get_response().to_envelope();

    assert_eq!(1, envelope.len());
    assert_eq!(
        Some(get_response().serialize_to_text().as_str()),
        envelope.get_extra(EXTRA_RESPONSE)
    );
}

#[test]
fn reads_back_the_response_from_the_envelope() {
    let envelope = get_response().to_envelope();

    let response = Response::from_envelope(&envelope).unwrap();

    assert_eq!(Some(get_response()), response);
}

#[test]
fn returns_none_if_the_envelope_has_no_response() {
    let mut envelope = Envelope::new();
    envelope.put_extra("some.other.key", "value".to_string());

    let response = Response::from_envelope(&envelope).unwrap();

    assert!(response.is_none());
}

#[test]
fn returns_malformed_envelope_if_the_value_is_not_json() {
    let mut envelope = Envelope::new();
    envelope.put_extra(EXTRA_RESPONSE, "not json".to_string());

    let error = Response::from_envelope(&envelope).unwrap_err();

    assert!(error.is_malformed_envelope());
    assert_eq!(
        "envelope contains malformed end session response",
        error.malformed_envelope().message
    );
}

#[test]
fn returns_malformed_envelope_if_the_value_is_not_a_response() {
    let mut envelope = Envelope::new();
    envelope.put_extra(EXTRA_RESPONSE, "{}".to_string());

    let error = Response::from_envelope(&envelope).unwrap_err();

    assert!(error.is_malformed_envelope());
    assert!(error
        .malformed_envelope()
        .source
        .as_deref()
        .is_some_and(|s| s.contains("end session request not provided")));
}

#[test]
fn writes_into_a_caller_owned_map_without_touching_other_keys() {
    let mut extras: HashMap<String, String> = HashMap::new();
    extras.insert("unrelated".to_string(), "kept".to_string());

    get_response().write_to_envelope(&mut extras);

    assert_eq!(Some("kept"), extras.get_extra("unrelated"));
    assert!(extras.has_extra(EXTRA_RESPONSE));

    let response = Response::from_envelope(&extras).unwrap();

    assert_eq!(Some(get_response()), response);
}

#[test]
fn envelope_converts_from_and_into_a_map() {
    let envelope = Envelope::from(get_response().to_envelope().into_inner());

    assert!(!envelope.is_empty());
    assert!(Response::from_envelope(&envelope).unwrap().is_some());
}
