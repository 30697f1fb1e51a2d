//! Client binding for the LinkedIn REST API.
//!
//! [`LinkedIn`] is the API client: it holds an access token and implements
//! one facade trait per resource family ([`clients::ProfileOperations`],
//! [`clients::NetworkUpdateOperations`], ...). Every request it sends goes
//! through the [`RequestPipeline`], which carries the token as the
//! `oauth2_access_token` query parameter.
//!
//! Tokens are obtained with [`AuthCodeLinkedIn`], usually through
//! [`LinkedInServiceProvider`]:
//!
//! ```no_run
//! # #[cfg(feature = "client-reqwest")]
//! # async fn run() -> linkedin::ClientResult<()> {
//! use linkedin::{prelude::*, scopes, Credentials, LinkedInServiceProvider, OAuth};
//!
//! let creds = Credentials::new("client-id", "client-secret");
//! let oauth = OAuth {
//!     redirect_uri: "http://localhost:8888/callback".to_owned(),
//!     scopes: scopes!("r_liteprofile", "r_emailaddress"),
//!     ..Default::default()
//! };
//! let provider = LinkedInServiceProvider::new(creds, oauth);
//! let token = provider.oauth().request_token("code-from-redirect").await?;
//!
//! let linkedin = provider.get_api(&token.access_token)?;
//! let me = linkedin.get_user_profile().await?;
//! println!("{}", me.first_name.preferred().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

mod api;
mod auth_code;
pub mod clients;
pub mod pipeline;
mod provider;
mod util;

pub use linkedin_http as http;
pub use linkedin_macros as macros;
pub use linkedin_model as model;

pub use api::LinkedIn;
pub use auth_code::AuthCodeLinkedIn;
pub use pipeline::{ApiRequest, Method, RequestPipeline};
pub use provider::LinkedInServiceProvider;

use crate::{http::HttpError, model::Id};
pub use macros::scopes;
pub use model::Token;

use std::{collections::HashSet, env};

use getrandom::getrandom;
use libs::log;
use thiserror::Error;

pub mod prelude {
    pub use crate::clients::{
        BaseClient, CommunicationOperations, CompanyOperations, ConnectionOperations,
        GroupOperations, JobOperations, NetworkUpdateOperations, ProfileOperations,
    };
    pub use crate::model::idtypes::Id;
}

/// Common parameters as constants.
pub(crate) mod params {
    pub const CLIENT_ID: &str = "client_id";
    pub const CLIENT_SECRET: &str = "client_secret";
    pub const CODE: &str = "code";
    pub const COUNT: &str = "count";
    pub const GRANT_TYPE: &str = "grant_type";
    pub const GRANT_TYPE_AUTH_CODE: &str = "authorization_code";
    pub const GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";
    pub const REDIRECT_URI: &str = "redirect_uri";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const RESPONSE_TYPE_CODE: &str = "code";
    pub const RESPONSE_TYPE: &str = "response_type";
    pub const SCOPE: &str = "scope";
    pub const START: &str = "start";
    pub const STATE: &str = "state";
}

/// Common alphabets for random number generation and similars
pub(crate) mod alphabets {
    pub const ALPHANUM: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
}

pub(crate) mod auth_urls {
    pub const AUTHORIZE: &str = "authorization";
    pub const TOKEN: &str = "accessToken";
}

/// Possible errors returned from the `linkedin` client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("json parse error: {0}")]
    ParseJson(#[from] libs::serde_json::Error),

    #[error("url parse error: {0}")]
    ParseUrl(#[from] libs::url::ParseError),

    // Note that this type is boxed because its size might be very large in
    // comparison to the rest. For more information visit:
    // https://rust-lang.github.io/rust-clippy/master/index.html#large_enum_variant
    #[error("http error: {0}")]
    Http(Box<HttpError>),

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("cli error: {0}")]
    Cli(String),

    /// Raised when building an API client, before any request is sent.
    #[error("access token cannot be empty")]
    InvalidAccessToken,

    /// The OAuth `state` could not be generated or is missing.
    #[error("invalid oauth state: {0}")]
    InvalidState(String),

    #[error("model error: {0}")]
    Model(#[from] model::ModelError),
}

// The conversion has to be done manually because it's in a `Box<T>`
impl From<HttpError> for ClientError {
    fn from(err: HttpError) -> Self {
        Self::Http(Box::new(err))
    }
}

impl ClientError {
    /// Category of the error response, if the API answered with one.
    #[must_use]
    pub fn kind(&self) -> Option<http::ErrorKind> {
        match self {
            Self::Http(err) => err.kind(),
            _ => None,
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

pub const DEFAULT_API_BASE_URL: &str = "https://api.linkedin.com/v2/";
pub const DEFAULT_AUTH_BASE_URL: &str = "https://www.linkedin.com/oauth/v2";

/// Struct to configure the LinkedIn client.
#[derive(Debug, Clone)]
pub struct Config {
    /// The LinkedIn API prefix, [`DEFAULT_API_BASE_URL`] by default. Endpoint
    /// paths are appended to it as is, so it must end with a slash.
    pub api_base_url: String,

    /// The LinkedIn Authentication prefix, [`DEFAULT_AUTH_BASE_URL`] by default.
    pub auth_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::from(DEFAULT_API_BASE_URL),
            auth_base_url: String::from(DEFAULT_AUTH_BASE_URL),
        }
    }
}

/// Generate `length` random chars from the Operating System.
///
/// It is assumed that system always provides high-quality cryptographically
/// secure random data, ideally backed by hardware entropy sources.
pub(crate) fn generate_random_string(length: usize, alphabet: &[u8]) -> ClientResult<String> {
    let mut buf = vec![0u8; length];
    getrandom(&mut buf).map_err(|err| ClientError::InvalidState(err.to_string()))?;
    let range = alphabet.len();

    Ok(buf
        .iter()
        .map(|byte| alphabet[*byte as usize % range] as char)
        .collect())
}

#[inline]
pub(crate) fn join_ids<'a, T: Id + 'a>(ids: impl IntoIterator<Item = &'a T>) -> String {
    ids.into_iter().map(Id::id).collect::<Vec<_>>().join(",")
}

/// Scopes are sorted so that the authorization URL is stable.
#[inline]
pub(crate) fn join_scopes(scopes: &HashSet<String>) -> String {
    let mut scopes = scopes.iter().map(String::as_str).collect::<Vec<_>>();
    scopes.sort_unstable();
    scopes.join(" ")
}

/// Simple client credentials object for LinkedIn.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub id: String,
    pub secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            id: id.to_owned(),
            secret: secret.to_owned(),
        }
    }

    /// Parses the credentials from the environment variables
    /// `LINKEDIN_CLIENT_ID` and `LINKEDIN_CLIENT_SECRET`. You can optionally
    /// activate the `env-file` feature in order to read these variables from
    /// a `.env` file.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        Some(Self {
            id: env::var("LINKEDIN_CLIENT_ID").ok()?,
            secret: env::var("LINKEDIN_CLIENT_SECRET").ok()?,
        })
    }
}

/// Structure that holds the required information for requests with OAuth.
#[derive(Debug, Clone)]
pub struct OAuth {
    pub redirect_uri: String,
    /// The state is generated by default, as suggested by the OAuth2 spec:
    /// [Cross-Site Request Forgery](https://tools.ietf.org/html/rfc6749#section-10.12)
    pub state: String,
    /// You could use macro [scopes!](crate::scopes) to build it at compile time easily
    pub scopes: HashSet<String>,
}

impl Default for OAuth {
    /// An empty state is left behind if the OS can't provide randomness;
    /// [`AuthCodeLinkedIn::get_authorize_url`] refuses to use it.
    fn default() -> Self {
        let state = generate_random_string(16, alphabets::ALPHANUM).unwrap_or_else(|err| {
            log::error!("Unable to generate the OAuth state: {err}");
            String::new()
        });

        Self {
            redirect_uri: String::new(),
            state,
            scopes: HashSet::new(),
        }
    }
}

impl OAuth {
    /// Parses the credentials from the environment variable
    /// `LINKEDIN_REDIRECT_URI`. You can optionally activate the `env-file`
    /// feature in order to read these variables from a `.env` file.
    #[must_use]
    pub fn from_env(scopes: HashSet<String>) -> Option<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        Some(Self {
            scopes,
            redirect_uri: env::var("LINKEDIN_REDIRECT_URI").ok()?,
            ..Default::default()
        })
    }
}
