//! # Provider Configuration
//! Describes how to reach an OpenID Provider.
//! [EndSessionRequest](crate::end_session::EndSessionRequest) only needs the end session endpoint
//! and a way to persist the configuration next to itself.

use serde_json::{Map, Value};
use url::Url;

use crate::helpers::{
    as_json_object, get_json_url, get_optional_json_url, put_optional_url, validate_url,
};
use crate::types::{IssuerMetadata, OidcClientError, OidcReturnType};

const KEY_AUTHORIZATION_ENDPOINT: &str = "authorizationEndpoint";
const KEY_TOKEN_ENDPOINT: &str = "tokenEndpoint";
const KEY_REGISTRATION_ENDPOINT: &str = "registrationEndpoint";
const KEY_END_SESSION_ENDPOINT: &str = "endSessionEndpoint";
const KEY_DISCOVERY_DOC: &str = "discoveryDoc";

/// # ProviderConfiguration
/// What an end session request needs from the provider configuration it refers to.
pub trait ProviderConfiguration: Sized {
    /// Endpoint the user agent is sent to in order to end the session at the provider
    fn end_session_endpoint(&self) -> Option<&Url>;

    /// Json document of the configuration
    fn to_json(&self) -> Value;

    /// Reads a configuration back from a document produced by [ProviderConfiguration::to_json]
    fn from_json(document: &Value) -> OidcReturnType<Self>;
}

/// # AuthorizationServiceConfiguration
/// Endpoints of an OAuth 2.0 / OpenID Connect provider, either configured manually
/// or taken from a discovery document.
///
/// The endpoint fields are authoritative. `discovery_doc` is kept alongside as metadata,
/// so endpoints overridden after [AuthorizationServiceConfiguration::from_discovery] survive
/// a json round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorizationServiceConfiguration {
    /// [Authorization Endpoint](https://www.rfc-editor.org/rfc/rfc6749#section-3.1)
    pub authorization_endpoint: Url,
    /// [Token Endpoint](https://www.rfc-editor.org/rfc/rfc6749#section-3.2)
    pub token_endpoint: Url,
    /// Dynamic client registration endpoint
    pub registration_endpoint: Option<Url>,
    /// [End session endpoint](https://openid.net/specs/openid-connect-rpinitiated-1_0.html#OPMetadata)
    pub end_session_endpoint: Option<Url>,
    /// Discovery document this configuration was built from, if any
    pub discovery_doc: Option<IssuerMetadata>,
}

impl AuthorizationServiceConfiguration {
    /// # Create a manual configuration
    pub fn new(
        authorization_endpoint: Url,
        token_endpoint: Url,
        registration_endpoint: Option<Url>,
        end_session_endpoint: Option<Url>,
    ) -> Self {
        Self {
            authorization_endpoint,
            token_endpoint,
            registration_endpoint,
            end_session_endpoint,
            discovery_doc: None,
        }
    }

    /// # Create a configuration from discovery metadata
    /// `authorization_endpoint` and `token_endpoint` must be present in `metadata`.
    pub fn from_discovery(metadata: IssuerMetadata) -> OidcReturnType<Self> {
        let authorization_endpoint = match &metadata.authorization_endpoint {
            Some(ae) => validate_url("authorization_endpoint", ae)?,
            None => {
                return Err(OidcClientError::new_invalid_argument(
                    "authorization_endpoint must be present in the discovery document",
                ))
            }
        };

        let token_endpoint = match &metadata.token_endpoint {
            Some(te) => validate_url("token_endpoint", te)?,
            None => {
                return Err(OidcClientError::new_invalid_argument(
                    "token_endpoint must be present in the discovery document",
                ))
            }
        };

        let registration_endpoint = metadata
            .registration_endpoint
            .as_deref()
            .map(|re| validate_url("registration_endpoint", re))
            .transpose()?;

        let end_session_endpoint = metadata
            .end_session_endpoint
            .as_deref()
            .map(|ee| validate_url("end_session_endpoint", ee))
            .transpose()?;

        Ok(Self {
            authorization_endpoint,
            token_endpoint,
            registration_endpoint,
            end_session_endpoint,
            discovery_doc: Some(metadata),
        })
    }
}

impl ProviderConfiguration for AuthorizationServiceConfiguration {
    fn end_session_endpoint(&self) -> Option<&Url> {
        self.end_session_endpoint.as_ref()
    }

    fn to_json(&self) -> Value {
        let mut json = Map::new();

        json.insert(
            KEY_AUTHORIZATION_ENDPOINT.to_string(),
            Value::String(self.authorization_endpoint.to_string()),
        );
        json.insert(
            KEY_TOKEN_ENDPOINT.to_string(),
            Value::String(self.token_endpoint.to_string()),
        );
        put_optional_url(
            &mut json,
            KEY_REGISTRATION_ENDPOINT,
            self.registration_endpoint.as_ref(),
        );
        put_optional_url(
            &mut json,
            KEY_END_SESSION_ENDPOINT,
            self.end_session_endpoint.as_ref(),
        );

        if let Some(doc) = &self.discovery_doc {
            json.insert(KEY_DISCOVERY_DOC.to_string(), doc.to_json());
        }

        Value::Object(json)
    }

    fn from_json(document: &Value) -> OidcReturnType<Self> {
        let obj = as_json_object(document, "configuration")?;

        let discovery_doc = match obj.get(KEY_DISCOVERY_DOC) {
            None | Some(Value::Null) => None,
            Some(doc) => {
                let metadata = serde_json::from_value::<IssuerMetadata>(doc.clone())
                    .map_err(|e| {
                        OidcClientError::new_malformed_document(
                            "discoveryDoc is not a valid discovery document",
                            Some(e.to_string()),
                        )
                    })?;
                Some(metadata)
            }
        };

        Ok(Self {
            authorization_endpoint: get_json_url(obj, KEY_AUTHORIZATION_ENDPOINT)?,
            token_endpoint: get_json_url(obj, KEY_TOKEN_ENDPOINT)?,
            registration_endpoint: get_optional_json_url(obj, KEY_REGISTRATION_ENDPOINT)?,
            end_session_endpoint: get_optional_json_url(obj, KEY_END_SESSION_ENDPOINT)?,
            discovery_doc,
        })
    }
}
