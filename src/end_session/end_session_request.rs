use std::sync::Arc;

use serde_json::{Map, Value};
use url::{form_urlencoded, Url};

use crate::configuration::{AuthorizationServiceConfiguration, ProviderConfiguration};
use crate::helpers::{
    as_json_object, get_json_object, get_json_url, parse_json_text, validate_url,
};
use crate::types::{OidcClientError, OidcReturnType};

pub(crate) const PARAM_REDIRECT_URI: &str = "redirect_uri";

const KEY_CONFIGURATION: &str = "configuration";
const KEY_REDIRECT_URI: &str = "redirectUri";

/// # EndSessionRequest
/// An immutable end session request. The provider configuration is shared with the caller,
/// the redirect uri is where the provider sends the user agent back to after logout.
#[derive(Debug)]
pub struct EndSessionRequest<C = AuthorizationServiceConfiguration> {
    configuration: Arc<C>,
    redirect_uri: Url,
}

impl<C> Clone for EndSessionRequest<C> {
    fn clone(&self) -> Self {
        Self {
            configuration: Arc::clone(&self.configuration),
            redirect_uri: self.redirect_uri.clone(),
        }
    }
}

impl<C: PartialEq> PartialEq for EndSessionRequest<C> {
    fn eq(&self, other: &Self) -> bool {
        self.configuration == other.configuration && self.redirect_uri == other.redirect_uri
    }
}

impl<C: ProviderConfiguration> EndSessionRequest<C> {
    /// # Create an [EndSessionRequest]
    ///
    /// - `configuration` - The provider configuration, either owned or already shared through an [Arc]
    /// - `redirect_uri` - Where the provider should send the user agent after the session ended
    pub fn new(configuration: impl Into<Arc<C>>, redirect_uri: Url) -> Self {
        Self {
            configuration: configuration.into(),
            redirect_uri,
        }
    }

    /// # Create an [EndSessionRequest] from a redirect uri string
    /// Fails with [OidcClientError::InvalidArgument] when `redirect_uri` is empty or not an absolute url.
    pub fn from_redirect_str(
        configuration: impl Into<Arc<C>>,
        redirect_uri: &str,
    ) -> OidcReturnType<Self> {
        let redirect_uri = validate_url("redirect_uri", redirect_uri)?;
        Ok(Self::new(configuration, redirect_uri))
    }

    /// The provider configuration
    pub fn configuration(&self) -> &C {
        &self.configuration
    }

    /// The shared handle to the provider configuration
    pub fn configuration_arc(&self) -> Arc<C> {
        Arc::clone(&self.configuration)
    }

    /// The client's redirect uri
    pub fn redirect_uri(&self) -> &Url {
        &self.redirect_uri
    }

    /// # Dispatch Uri
    /// Builds the url the user agent is navigated to. Query params already present on the
    /// end session endpoint are kept, `redirect_uri` is appended last and only once.
    pub fn to_dispatch_uri(&self) -> OidcReturnType<Url> {
        let mut end_session_endpoint = match self.configuration.end_session_endpoint() {
            Some(ee) => ee.clone(),
            None => {
                return Err(OidcClientError::new_invalid_argument(
                    "end_session_endpoint must be configured on the provider",
                ))
            }
        };

        // the existing query text is kept verbatim, only stale redirect_uri pairs go
        let kept = end_session_endpoint.query().map(|query| {
            query
                .split('&')
                .filter(|pair| !is_redirect_uri_pair(pair))
                .collect::<Vec<&str>>()
                .join("&")
        });

        end_session_endpoint.set_query(kept.as_deref().filter(|q| !q.is_empty()));
        end_session_endpoint
            .query_pairs_mut()
            .append_pair(PARAM_REDIRECT_URI, self.redirect_uri.as_str());

        Ok(end_session_endpoint)
    }

    /// # Serialize
    /// Json document for persisting the request, e.g. across a browser redirect
    pub fn serialize(&self) -> Value {
        let mut json = Map::new();
        json.insert(KEY_CONFIGURATION.to_string(), self.configuration.to_json());
        json.insert(
            KEY_REDIRECT_URI.to_string(),
            Value::String(self.redirect_uri.to_string()),
        );
        Value::Object(json)
    }

    /// Text form of [EndSessionRequest::serialize]
    pub fn serialize_to_text(&self) -> String {
        self.serialize().to_string()
    }

    /// # Deserialize
    /// Reads a request from a document produced by [EndSessionRequest::serialize].
    /// Errors from the configuration codec are returned as is.
    pub fn deserialize(document: &Value) -> OidcReturnType<Self> {
        let obj = as_json_object(document, "end session request")?;

        let configuration = C::from_json(get_json_object(obj, KEY_CONFIGURATION)?)?;
        let redirect_uri = get_json_url(obj, KEY_REDIRECT_URI)?;

        Ok(Self::new(configuration, redirect_uri))
    }

    /// Reads a request from the text produced by [EndSessionRequest::serialize_to_text]
    pub fn deserialize_from_text(text: &str) -> OidcReturnType<Self> {
        Self::deserialize(&parse_json_text(text)?)
    }
}

fn is_redirect_uri_pair(pair: &str) -> bool {
    form_urlencoded::parse(pair.as_bytes()).any(|(k, _)| k == PARAM_REDIRECT_URI)
}
