use std::collections::HashMap;
use std::fmt;

use libs::serde_json::Value;
use libs::strum::Display;
use maybe_async::maybe_async;

pub type Headers = HashMap<String, String>;
pub type Query<'a> = HashMap<&'a str, &'a str>;
pub type Form<'a> = HashMap<&'a str, &'a str>;

/// Rough category of a non-2xx response returned by the LinkedIn API.
///
/// The binding never retries on its own; this only helps callers decide what
/// to do with a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    BadRequest,
    NotAuthorized,
    OperationNotPermitted,
    ResourceNotFound,
    Conflict,
    RateLimitExceeded,
    ServerError,
    Other,
}

impl ErrorKind {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::NotAuthorized,
            403 => Self::OperationNotPermitted,
            404 => Self::ResourceNotFound,
            409 => Self::Conflict,
            429 => Self::RateLimitExceeded,
            500..=599 => Self::ServerError,
            _ => Self::Other,
        }
    }
}

/// `url` without its query string and fragment, which may carry credentials.
/// Safe to write to logs.
#[must_use]
pub fn without_query(url: &str) -> &str {
    url.split(&['?', '#'][..]).next().unwrap_or_default()
}

/// This trait represents the interface to be implemented for an HTTP client,
/// which is kept separate from the LinkedIn client for cleaner code. Thus, it
/// also requires other basic traits that are needed for the LinkedIn client.
///
/// Every URL handed to these methods is final: the query string, including
/// the access token, has already been built by the caller.
#[maybe_async]
pub trait BaseHttpClient: Send + Default + Clone + fmt::Debug {
    type Error;

    async fn get(&self, url: &str, headers: Option<&Headers>) -> Result<String, Self::Error>;

    async fn post(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error>;

    async fn post_form(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Form<'_>,
    ) -> Result<String, Self::Error>;

    async fn put(
        &self,
        url: &str,
        headers: Option<&Headers>,
        payload: &Value,
    ) -> Result<String, Self::Error>;

    async fn delete(&self, url: &str, headers: Option<&Headers>) -> Result<String, Self::Error>;
}
