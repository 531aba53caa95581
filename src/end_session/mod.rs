//! # End Session Module
//! [RP-Initiated Logout](https://openid.net/specs/openid-connect-rpinitiated-1_0.html)
//! request and response values

mod end_session_request;
mod end_session_response;

pub use end_session_request::EndSessionRequest;
pub use end_session_response::{EndSessionResponse, EndSessionResponseBuilder, EXTRA_RESPONSE};
