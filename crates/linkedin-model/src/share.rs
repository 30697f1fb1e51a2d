use crate::custom_serde::{flexible_id, lenient, millisecond_timestamp};
use crate::Person;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Who can see a share.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Visibility {
    #[default]
    Anyone,
    ConnectionsOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShareVisibility {
    pub code: Visibility,
}

/// The content a share links to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareContent {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub submitted_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub shortened_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub resolved_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub submitted_image_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub thumbnail_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub eyebrow_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct NamedEntity {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
}

/// Where a share was posted from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareSource {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub service_provider: Option<NamedEntity>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub application: Option<NamedEntity>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub service_provider_share_id: Option<String>,
}

/// A share posted by a member or a company, as returned by
/// `people/~/current-share` and carried by share network updates.
///
/// Every field is read leniently: a share nested in an update must never make
/// the update fail.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Share {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub visibility: Option<ShareVisibility>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub content: Option<ShareContent>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub source: Option<ShareSource>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub author: Option<Person>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShareContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_image_url: Option<String>,
}

/// Body of a new share. LinkedIn wants at least a comment or a content.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NewShare {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<NewShareContent>,
    pub visibility: ShareVisibility,
}

impl NewShare {
    #[must_use]
    pub fn with_comment(comment: impl Into<String>, visibility: Visibility) -> Self {
        Self {
            comment: Some(comment.into()),
            content: None,
            visibility: ShareVisibility { code: visibility },
        }
    }
}

/// `people/~:(current-share)` nests the share in a `currentShare` field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CurrentShare {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub current_share: Option<Share>,
}

/// Answer to posting a share.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShareReceipt {
    pub update_key: Option<String>,
    pub update_url: Option<String>,
}
