use serde_json::{Map, Value};
use url::Url;

use crate::configuration::{AuthorizationServiceConfiguration, ProviderConfiguration};
use crate::helpers::{as_json_object, parse_json_text};
use crate::types::{Envelope, OidcClientError, OidcReturnType, TransportEnvelope};

use super::EndSessionRequest;

const KEY_REQUEST: &str = "request";

/// Envelope key an [EndSessionResponse] is stored under
pub const EXTRA_RESPONSE: &str = "net.openid.appauth.EndSessionResponse";

/// # EndSessionResponseBuilder
/// Collects the fields of an [EndSessionResponse]. The request is mandatory and given up front.
#[derive(Debug, Clone)]
pub struct EndSessionResponseBuilder<C = AuthorizationServiceConfiguration> {
    request: EndSessionRequest<C>,
}

impl<C: ProviderConfiguration> EndSessionResponseBuilder<C> {
    /// Creates a builder for the response to `request`
    pub fn new(request: EndSessionRequest<C>) -> Self {
        Self { request }
    }

    /// # From Uri
    /// Extracts end session response parameters from the query of the redirect `uri`.
    /// RP-Initiated Logout defines none yet, so the builder is returned as is.
    pub fn from_uri(self, _uri: &Url) -> Self {
        self
    }

    /// Builds the [EndSessionResponse]
    pub fn build(self) -> EndSessionResponse<C> {
        EndSessionResponse {
            request: self.request,
        }
    }
}

/// # EndSessionResponse
/// The response to an [EndSessionRequest]. Create it with [EndSessionResponseBuilder].
#[derive(Debug, Clone)]
pub struct EndSessionResponse<C = AuthorizationServiceConfiguration> {
    request: EndSessionRequest<C>,
}

impl<C: PartialEq> PartialEq for EndSessionResponse<C> {
    fn eq(&self, other: &Self) -> bool {
        self.request == other.request
    }
}

impl<C: ProviderConfiguration> EndSessionResponse<C> {
    /// Key the serialized response is stored under by [EndSessionResponse::to_envelope]
    pub const EXTRA_RESPONSE: &'static str = EXTRA_RESPONSE;

    /// The end session request this response belongs to
    pub fn request(&self) -> &EndSessionRequest<C> {
        &self.request
    }

    /// # Serialize
    /// Json document for persisting the response or handing it to another component
    pub fn serialize(&self) -> Value {
        let mut json = Map::new();
        json.insert(KEY_REQUEST.to_string(), self.request.serialize());
        Value::Object(json)
    }

    /// Text form of [EndSessionResponse::serialize]
    pub fn serialize_to_text(&self) -> String {
        self.serialize().to_string()
    }

    /// # Deserialize
    /// Reads a response from a document produced by [EndSessionResponse::serialize]
    pub fn deserialize(document: &Value) -> OidcReturnType<Self> {
        let obj = as_json_object(document, "end session response")?;

        let request = match obj.get(KEY_REQUEST) {
            Some(r) => EndSessionRequest::deserialize(r)?,
            None => {
                return Err(OidcClientError::new_malformed_document(
                    "end session request not provided and not found in json",
                    None,
                ))
            }
        };

        Ok(EndSessionResponseBuilder::new(request).build())
    }

    /// Reads a response from the text produced by [EndSessionResponse::serialize_to_text]
    pub fn deserialize_from_text(text: &str) -> OidcReturnType<Self> {
        Self::deserialize(&parse_json_text(text)?)
    }

    /// # To Envelope
    /// A fresh [Envelope] holding this response under [EndSessionResponse::EXTRA_RESPONSE]
    pub fn to_envelope(&self) -> Envelope {
        let mut envelope = Envelope::new();
        self.write_to_envelope(&mut envelope);
        envelope
    }

    /// Stores this response in a caller owned `envelope` under [EndSessionResponse::EXTRA_RESPONSE]
    pub fn write_to_envelope<E: TransportEnvelope + ?Sized>(&self, envelope: &mut E) {
        envelope.put_extra(Self::EXTRA_RESPONSE, self.serialize_to_text());
    }

    /// # From Envelope
    /// Reads the response stored by [EndSessionResponse::to_envelope].
    ///
    /// - `Ok(None)` when the envelope has no end session response at all
    /// - [OidcClientError::MalformedEnvelope] when it has one that cannot be decoded
    pub fn from_envelope<E: TransportEnvelope + ?Sized>(
        envelope: &E,
    ) -> OidcReturnType<Option<Self>> {
        let text = match envelope.get_extra(Self::EXTRA_RESPONSE) {
            Some(t) => t,
            None => {
                log::debug!("envelope does not carry an end session response");
                return Ok(None);
            }
        };

        match Self::deserialize_from_text(text) {
            Ok(response) => Ok(Some(response)),
            Err(e) => {
                log::debug!("end session response in envelope is malformed: {e}");
                Err(OidcClientError::new_malformed_envelope(
                    "envelope contains malformed end session response",
                    Some(e.to_string()),
                ))
            }
        }
    }
}
