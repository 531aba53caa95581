#![warn(missing_docs)]
//! # OpenID End Session
//!
//! Values for the OpenID Connect [RP-Initiated Logout](https://openid.net/specs/openid-connect-rpinitiated-1_0.html)
//! exchange. Nothing here performs network io: requests and responses are built, turned into
//! the url the user agent is sent to, and persisted as json.
//!
//! ## Provider Configuration
//! - [configuration::ProviderConfiguration]
//! - [configuration::AuthorizationServiceConfiguration::new]
//! - [configuration::AuthorizationServiceConfiguration::from_discovery]
//!
//! ## End Session Request
//! - [end_session::EndSessionRequest::new]
//! - [end_session::EndSessionRequest::to_dispatch_uri]
//! - [end_session::EndSessionRequest::serialize]
//! - [end_session::EndSessionRequest::deserialize]
//!
//! ## End Session Response
//! - [end_session::EndSessionResponseBuilder]
//! - [end_session::EndSessionResponse::serialize]
//! - [end_session::EndSessionResponse::deserialize]
//! - [end_session::EndSessionResponse::to_envelope]
//! - [end_session::EndSessionResponse::from_envelope]

pub mod configuration;
pub mod end_session;
mod helpers;
mod tests;
pub mod types;

/// Re exports from the crate
pub mod re_exports {
    pub use serde_json::{self, json, Value};
    pub use url;
}
