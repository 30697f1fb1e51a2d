//! All objects related to the auth flows defined by LinkedIn API

use crate::custom_serde::{duration_second, scope_list};

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// LinkedIn access token information
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/shared/authentication/authorization-code-flow)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// An access token that can be provided in subsequent calls
    pub access_token: String,
    /// The time period for which the access token is valid.
    #[serde(with = "duration_second")]
    pub expires_in: Duration,
    /// The valid time for which the access token is available represented
    /// in ISO 8601 combined date and time.
    pub expires_at: Option<DateTime<Utc>>,
    /// Only issued to partners with programmatic refresh tokens enabled.
    pub refresh_token: Option<String>,
    /// A list of [scopes](https://learn.microsoft.com/en-us/linkedin/shared/authentication/getting-access)
    /// which have been granted for this `access_token`
    #[serde(default, with = "scope_list", rename = "scope")]
    pub scopes: HashSet<String>,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            expires_in: Duration::seconds(0),
            expires_at: Some(Utc::now()),
            refresh_token: None,
            scopes: HashSet::new(),
        }
    }
}

impl Token {
    /// Check if the token is expired. It includes a margin of 10 seconds (which
    /// is how much a request would take in the worst case scenario).
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expires_at.map_or(true, |expiration| {
            Utc::now() + Duration::seconds(10) >= expiration
        })
    }

    /// Fills `expires_at` from `expires_in`, relative to now. The token
    /// endpoint only sends the latter.
    pub fn stamp_expiration(&mut self) {
        self.expires_at = Utc::now().checked_add_signed(self.expires_in);
    }
}
