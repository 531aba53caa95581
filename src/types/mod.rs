//! # Types Module
//! Errors, discovery metadata and the transport envelope

mod envelope;
mod errors;
mod issuer_metadata;

pub use envelope::{Envelope, TransportEnvelope};
pub use errors::{ErrorWithMessage, OidcClientError, OidcReturnType};
pub use issuer_metadata::IssuerMetadata;
