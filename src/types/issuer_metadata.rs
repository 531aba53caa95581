use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// # IssuerMetadata
/// Metadata about the OIDC Authorization Server. [OIDC Discovery](https://openid.net/specs/openid-connect-discovery-1_0.html#ProviderConfigurationResponse).
///
/// Only the endpoints needed to drive an end session are typed, everything else lands in `other_fields`
/// and is written back unchanged.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct IssuerMetadata {
    /// Issuer url. [RFC8414 - Obtaining Authorization Server Metadata](https://www.rfc-editor.org/rfc/rfc8414.html#section-3).
    pub issuer: String,
    /// Authorization Endpoint. [RFC6749 - Authorization Endpoint](https://www.rfc-editor.org/rfc/rfc6749#section-3.1).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_endpoint: Option<String>,
    /// Endpoint to obtain the access/refresh/id tokens. [RFC6749 - Token Endpoint](https://www.rfc-editor.org/rfc/rfc6749#section-3.2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_endpoint: Option<String>,
    /// Dynamic client registration endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_endpoint: Option<String>,
    /// [End session endpoint](https://openid.net/specs/openid-connect-rpinitiated-1_0.html#OPMetadata)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_session_endpoint: Option<String>,
    /// Any extra data that was read from the discovery document
    #[serde(flatten)]
    pub other_fields: HashMap<String, Value>,
}

impl IssuerMetadata {
    /// Json document of the metadata, same shape as its [Serialize] output
    pub fn to_json(&self) -> Value {
        let mut json: Map<String, Value> = self
            .other_fields
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        json.insert("issuer".to_string(), Value::String(self.issuer.clone()));

        let endpoints = [
            ("authorization_endpoint", &self.authorization_endpoint),
            ("token_endpoint", &self.token_endpoint),
            ("registration_endpoint", &self.registration_endpoint),
            ("end_session_endpoint", &self.end_session_endpoint),
        ];

        for (key, endpoint) in endpoints {
            if let Some(e) = endpoint {
                json.insert(key.to_string(), Value::String(e.clone()));
            }
        }

        Value::Object(json)
    }
}
