use crate::{
    clients::{
        BaseClient, CommunicationOperations, CompanyOperations, ConnectionOperations,
        GroupOperations, JobOperations, NetworkUpdateOperations, ProfileOperations,
    },
    http::HttpClient,
    pipeline::RequestPipeline,
    ClientError, ClientResult, Config, Token,
};

use std::env;

/// The LinkedIn API client, bound to one access token.
///
/// The token can't be changed afterwards; build a new client once it
/// expires. Every resource family is a trait implemented by this type, so
/// bring them into scope with [`prelude`](crate::prelude).
#[derive(Clone, Debug)]
pub struct LinkedIn {
    pub config: Config,
    pipeline: RequestPipeline,
    pub(crate) http: HttpClient,
}

impl LinkedIn {
    /// # Errors
    ///
    /// [`ClientError::InvalidAccessToken`] if `access_token` is empty.
    pub fn new(access_token: &str) -> ClientResult<Self> {
        Self::with_config(access_token, Config::default())
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// client.
    pub fn with_config(access_token: &str, config: Config) -> ClientResult<Self> {
        Ok(Self {
            config,
            pipeline: RequestPipeline::new(access_token)?,
            http: HttpClient::default(),
        })
    }

    pub fn from_token(token: &Token) -> ClientResult<Self> {
        Self::new(&token.access_token)
    }

    /// Reads the token from `LINKEDIN_ACCESS_TOKEN`. You can optionally
    /// activate the `env-file` feature in order to read it from a `.env`
    /// file.
    pub fn from_env() -> ClientResult<Self> {
        #[cfg(feature = "env-file")]
        {
            dotenv::dotenv().ok();
        }

        let access_token =
            env::var("LINKEDIN_ACCESS_TOKEN").map_err(|_| ClientError::InvalidAccessToken)?;
        Self::new(&access_token)
    }
}

impl BaseClient for LinkedIn {
    fn get_config(&self) -> &Config {
        &self.config
    }

    fn get_http(&self) -> &HttpClient {
        &self.http
    }

    fn get_pipeline(&self) -> &RequestPipeline {
        &self.pipeline
    }
}

impl ProfileOperations for LinkedIn {}
impl ConnectionOperations for LinkedIn {}
impl CompanyOperations for LinkedIn {}
impl JobOperations for LinkedIn {}
impl GroupOperations for LinkedIn {}
impl CommunicationOperations for LinkedIn {}
impl NetworkUpdateOperations for LinkedIn {}
