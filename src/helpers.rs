use serde_json::{Map, Value};
use url::Url;

use crate::types::{OidcClientError, OidcReturnType};

/// Parses `text` into a JSON document, failing before any field is looked at.
pub(crate) fn parse_json_text(text: &str) -> OidcReturnType<Value> {
    serde_json::from_str::<Value>(text).map_err(|e| {
        OidcClientError::new_malformed_document(
            "text is not a valid json document",
            Some(e.to_string()),
        )
    })
}

/// Views `document` as a JSON object. `what` names the document in the error.
pub(crate) fn as_json_object<'a>(
    document: &'a Value,
    what: &str,
) -> OidcReturnType<&'a Map<String, Value>> {
    match document {
        Value::Object(map) => Ok(map),
        Value::Null => Err(OidcClientError::new_malformed_document(
            &format!("{what} document is null"),
            None,
        )),
        _ => Err(OidcClientError::new_malformed_document(
            &format!("{what} document is not a json object"),
            None,
        )),
    }
}

/// Gets the nested JSON document under `key`. It must be an object.
pub(crate) fn get_json_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> OidcReturnType<&'a Value> {
    match obj.get(key) {
        Some(v @ Value::Object(_)) => Ok(v),
        Some(_) => Err(OidcClientError::new_malformed_document(
            &format!("{key} is not a json object"),
            None,
        )),
        None => Err(OidcClientError::new_malformed_document(
            &format!("{key} is missing"),
            None,
        )),
    }
}

/// Gets the string under `key` and parses it as a [Url].
pub(crate) fn get_json_url(obj: &Map<String, Value>, key: &str) -> OidcReturnType<Url> {
    match obj.get(key) {
        Some(Value::String(s)) => parse_url_field(key, s),
        Some(_) => Err(OidcClientError::new_malformed_document(
            &format!("{key} is not a string"),
            None,
        )),
        None => Err(OidcClientError::new_malformed_document(
            &format!("{key} is missing"),
            None,
        )),
    }
}

/// Same as [get_json_url] but a missing or `null` value yields [None].
pub(crate) fn get_optional_json_url(
    obj: &Map<String, Value>,
    key: &str,
) -> OidcReturnType<Option<Url>> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => get_json_url(obj, key).map(Some),
    }
}

/// Inserts the string form of `url` under `key` when present.
pub(crate) fn put_optional_url(obj: &mut Map<String, Value>, key: &str, url: Option<&Url>) {
    if let Some(u) = url {
        obj.insert(key.to_string(), Value::String(u.to_string()));
    }
}

fn parse_url_field(key: &str, raw: &str) -> OidcReturnType<Url> {
    Url::parse(raw).map_err(|e| {
        OidcClientError::new_malformed_document(
            &format!("{key} is not a valid url"),
            Some(e.to_string()),
        )
    })
}

/// Validates a url given directly by the caller
pub(crate) fn validate_url(name: &str, url: &str) -> OidcReturnType<Url> {
    if url.is_empty() {
        return Err(OidcClientError::new_invalid_argument(&format!(
            "{name} cannot be empty"
        )));
    }

    Url::parse(url).map_err(|_| {
        OidcClientError::new_invalid_argument(&format!("{name} must be a valid absolute url"))
    })
}
