use crate::{AuthCodeLinkedIn, ClientResult, Config, Credentials, LinkedIn, OAuth};

/// Entry point of an application: pairs the OAuth2 helper, bound to
/// LinkedIn's authorization and token endpoints, with a factory of API
/// clients.
#[derive(Clone, Debug)]
pub struct LinkedInServiceProvider {
    oauth: AuthCodeLinkedIn,
}

impl LinkedInServiceProvider {
    #[must_use]
    pub fn new(creds: Credentials, oauth: OAuth) -> Self {
        Self::with_config(creds, oauth, Config::default())
    }

    /// Same as [`Self::new`] but with an extra parameter to configure the
    /// OAuth helper and the clients it builds.
    #[must_use]
    pub fn with_config(creds: Credentials, oauth: OAuth, config: Config) -> Self {
        Self {
            oauth: AuthCodeLinkedIn::with_config(creds, oauth, config),
        }
    }

    /// The helper that runs the authorization code flow.
    #[must_use]
    pub fn oauth(&self) -> &AuthCodeLinkedIn {
        &self.oauth
    }

    /// An API client for `access_token`, sharing this provider's
    /// configuration. Fails before any request if the token is empty.
    pub fn get_api(&self, access_token: &str) -> ClientResult<LinkedIn> {
        LinkedIn::with_config(access_token, self.oauth.config.clone())
    }
}
