

#[cfg(test)]
mod end_session_response_tests;

#[cfg(test)]
mod envelope_tests;

#[cfg(test)]
pub(crate) mod helpers;
