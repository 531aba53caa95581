use url::Url;

use crate::configuration::AuthorizationServiceConfiguration;
use crate::end_session::{EndSessionRequest, EndSessionResponse, EndSessionResponseBuilder};

pub(crate) type Request = EndSessionRequest<AuthorizationServiceConfiguration>;
pub(crate) type Response = EndSessionResponse<AuthorizationServiceConfiguration>;

pub(crate) fn get_query(url: &Url, name: &str) -> Option<String> {
    let mut query = url.query_pairs();
    query
        .find(|(q_name, _)| q_name == name)
        .map(|(_, q_value)| q_value.to_string())
}

pub(crate) fn get_configuration(
    end_session_endpoint: Option<&str>,
) -> AuthorizationServiceConfiguration {
    AuthorizationServiceConfiguration::new(
        Url::parse("https://idp.example/authorize").unwrap(),
        Url::parse("https://idp.example/token").unwrap(),
        None,
        end_session_endpoint.map(|e| Url::parse(e).unwrap()),
    )
}

pub(crate) fn get_request() -> Request {
    EndSessionRequest::new(
        get_configuration(Some("https://idp.example/logout?foo=1")),
        Url::parse("app://callback").unwrap(),
    )
}

pub(crate) fn get_response() -> Response {
    EndSessionResponseBuilder::new(get_request()).build()
}
