//! Network updates
//!
//! An update carries at most one content field inside `updateContent`, and
//! which one is present is the only reliable hint of what kind of update it
//! is (`updateType` is informational). [`UpdateContent::decode`] walks
//! [`PRECEDENCE`] in order and maps the first field it finds.
//!
//! Decoding is forgiving below the envelope: a content field with an
//! unexpected shape still yields its variant, with whatever attributes could
//! be read. Only an envelope that isn't an object or has no `updateKey` is
//! rejected, and only that item: a page keeps one slot per raw item.

use crate::custom_serde::{flexible_id, lenient, millisecond_timestamp, values};
use crate::{
    CodeAndName, CompanyId, CompanySummary, EntityId, GroupId, JobId, Like, PagedList, Person,
    ProfileId, Recommendation, Share, UpdateDecodeError,
};

use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use strum::{Display, IntoStaticStr};

/// `connection`: the member connected to one or more people.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ConnectionUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "values::deserialize")]
    pub connections: Vec<Person>,
}

/// `job-position`: a job was posted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub company: Option<CompanySummary>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub job_poster: Option<Person>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub location_description: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub site_job_url: Option<String>,
}

/// `status-update`: the member changed their status line.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub current_status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberGroup {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub site_group_url: Option<String>,
}

/// `group-membership`: the member joined one or more groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "values::deserialize")]
    pub member_groups: Vec<MemberGroup>,
}

/// `recommendation`: the member gave or received recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecommendationUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "values::deserialize")]
    pub recommendations_given: Vec<Recommendation>,
    #[serde(deserialize_with = "values::deserialize")]
    pub recommendations_received: Vec<Recommendation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PersonActivity {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub app_id: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub body: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub locale: Option<String>,
}

/// `person-activity`: an application posted on the member's behalf.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct PersonActivityUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "values::deserialize")]
    pub activities: Vec<PersonActivity>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FollowTarget {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::deserialize")]
    pub target_type: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
}

impl FollowTarget {
    /// The typed id of what is being followed, when both the id and a known
    /// type are present.
    #[must_use]
    pub fn entity_id(&self) -> Option<EntityId> {
        let id = self.id.clone()?;
        let entity: EntityId = match self.target_type.as_deref()? {
            "company" => CompanyId::from_id(id).ok()?.into(),
            "person" | "member" => ProfileId::from_id(id).ok()?.into(),
            "group" => GroupId::from_id(id).ok()?.into(),
            "job" => JobId::from_id(id).ok()?.into(),
            _ => return None,
        };
        Some(entity)
    }
}

/// `follow`: the member started following something.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FollowUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub action: Option<CodeAndName>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub following: Option<FollowTarget>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OriginalUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub update_key: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub update_type: Option<String>,
}

/// `viral-update`: someone in the network liked or commented on an update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViralUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub action: Option<CodeAndName>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub original_update: Option<OriginalUpdate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CompanyJobUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub action: Option<CodeAndName>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub job: Option<JobPosting>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CompanyStatusUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub share: Option<Share>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyProfileUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub editor: Option<Person>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub action: Option<CodeAndName>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub profile_field: Option<CodeAndName>,
}

/// `company`: activity on a company page the member follows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyUpdate {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub company: Option<CompanySummary>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub company_job_update: Option<CompanyJobUpdate>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub company_status_update: Option<CompanyStatusUpdate>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub company_profile_update: Option<CompanyProfileUpdate>,
}

/// The kinds of content an update can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum UpdateKind {
    Connection,
    JobPosition,
    Status,
    Group,
    Recommendation,
    PersonActivity,
    Follow,
    Viral,
    Share,
    Company,
    Unknown,
}

/// Builds the content of one variant from the value of its field.
pub type ContentBuilder = fn(&str, &Value) -> UpdateContent;

/// Content fields, most specific first. Broad fields such as `company` also
/// show up nested inside narrower payloads, so this order must not change.
pub const PRECEDENCE: &[(&str, ContentBuilder)] = &[
    ("person-activity", person_activity),
    ("job-position", job_position),
    ("connection", connection),
    ("recommendation", recommendation),
    ("group-membership", group),
    ("group", group),
    ("follow", follow),
    ("viral-update", viral),
    ("viral", viral),
    ("share", share),
    ("status-update", status),
    ("status", status),
    ("company", company),
];

fn person_activity(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::PersonActivity(read(field, value))
}

fn job_position(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::JobPosition(read(field, value))
}

fn connection(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Connection(read(field, value))
}

fn recommendation(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Recommendation(read(field, value))
}

fn group(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Group(read(field, value))
}

fn follow(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Follow(read(field, value))
}

fn viral(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Viral(read(field, value))
}

fn share(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Share(read(field, value))
}

fn status(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Status(read(field, value))
}

fn company(field: &str, value: &Value) -> UpdateContent {
    UpdateContent::Company(read(field, value))
}

/// Reads `value` as `T`, keeping the defaults when it isn't even an object.
fn read<T: DeserializeOwned + Default>(field: &str, value: &Value) -> T {
    T::deserialize(value).unwrap_or_else(|err| {
        log::debug!("Content field `{field}` has an unexpected shape: {err}");
        T::default()
    })
}

/// What an update is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateContent {
    Connection(ConnectionUpdate),
    JobPosition(JobPosting),
    Status(StatusUpdate),
    Group(GroupUpdate),
    Recommendation(RecommendationUpdate),
    PersonActivity(PersonActivityUpdate),
    Follow(FollowUpdate),
    Viral(ViralUpdate),
    Share(Share),
    Company(CompanyUpdate),
    /// None of the known content fields was present. Keeps `updateType` so
    /// the caller can at least tell what it was.
    Unknown { update_type: String },
}

impl UpdateContent {
    /// Picks the variant from the first field of [`PRECEDENCE`] present (and
    /// not `null`) in `content`. Sibling fields are ignored.
    #[must_use]
    pub fn decode(content: Option<&Map<String, Value>>, update_type: &str) -> Self {
        let found = content.and_then(|content| {
            PRECEDENCE.iter().find_map(|(field, build)| {
                content
                    .get(*field)
                    .filter(|value| !value.is_null())
                    .map(|value| build(*field, value))
            })
        });

        found.unwrap_or_else(|| Self::Unknown {
            update_type: update_type.to_owned(),
        })
    }

    #[must_use]
    pub fn kind(&self) -> UpdateKind {
        match self {
            Self::Connection(_) => UpdateKind::Connection,
            Self::JobPosition(_) => UpdateKind::JobPosition,
            Self::Status(_) => UpdateKind::Status,
            Self::Group(_) => UpdateKind::Group,
            Self::Recommendation(_) => UpdateKind::Recommendation,
            Self::PersonActivity(_) => UpdateKind::PersonActivity,
            Self::Follow(_) => UpdateKind::Follow,
            Self::Viral(_) => UpdateKind::Viral,
            Self::Share(_) => UpdateKind::Share,
            Self::Company(_) => UpdateKind::Company,
            Self::Unknown { .. } => UpdateKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateComment {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub comment: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub sequence_number: Option<u32>,
}

pub type UpdateComments = PagedList<UpdateComment>;
pub type Likes = PagedList<Like>;

#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEnvelope {
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient::deserialize")]
    update_type: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    update_content: Option<Map<String, Value>>,
    #[serde(deserialize_with = "lenient::deserialize")]
    is_commentable: Option<bool>,
    #[serde(deserialize_with = "lenient::deserialize")]
    is_likable: Option<bool>,
    #[serde(deserialize_with = "lenient::deserialize")]
    is_liked: Option<bool>,
    #[serde(deserialize_with = "lenient::deserialize")]
    num_likes: Option<u32>,
    #[serde(deserialize_with = "values::deserialize")]
    update_comments: Vec<UpdateComment>,
    #[serde(deserialize_with = "values::deserialize")]
    likes: Vec<Like>,
}

/// One item of the network updates feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkUpdate {
    pub update_key: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub update_type: String,
    pub content: UpdateContent,
    pub is_commentable: bool,
    pub is_likable: bool,
    pub is_liked: bool,
    pub num_likes: u32,
    pub comments: Vec<UpdateComment>,
    pub likes: Vec<Like>,
}

impl NetworkUpdate {
    /// Decodes one raw update item.
    ///
    /// # Errors
    ///
    /// Fails only when `value` isn't an object or its `updateKey` is missing,
    /// empty or not a string.
    pub fn from_value(value: &Value) -> Result<Self, UpdateDecodeError> {
        let object = value.as_object().ok_or(UpdateDecodeError::NotAnObject)?;
        let update_key = match object.get("updateKey") {
            Some(Value::String(key)) if !key.is_empty() => key.clone(),
            Some(Value::String(_) | Value::Null) | None => {
                return Err(UpdateDecodeError::MissingUpdateKey)
            }
            Some(_) => return Err(UpdateDecodeError::InvalidUpdateKey),
        };

        let raw = RawEnvelope::deserialize(value).unwrap_or_default();
        let update_type = raw.update_type.unwrap_or_default();
        let content = UpdateContent::decode(raw.update_content.as_ref(), &update_type);
        if let UpdateContent::Unknown { .. } = content {
            log::debug!("Update {update_key} of type `{update_type}` has no known content");
        }

        Ok(Self {
            update_key,
            timestamp: raw.timestamp,
            update_type,
            content,
            is_commentable: raw.is_commentable.unwrap_or_default(),
            is_likable: raw.is_likable.unwrap_or_default(),
            is_liked: raw.is_liked.unwrap_or_default(),
            num_likes: raw.num_likes.unwrap_or_default(),
            comments: raw.update_comments,
            likes: raw.likes,
        })
    }
}

impl<'de> Deserialize<'de> for NetworkUpdate {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(d)?;
        Self::from_value(&value).map_err(de::Error::custom)
    }
}

/// A page of the network updates feed.
///
/// `updates` has exactly one entry per item the server sent, in order; items
/// whose envelope could not be decoded stay in place as an `Err`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NetworkUpdates {
    pub total: usize,
    pub start: usize,
    pub count: usize,
    pub updates: Vec<Result<NetworkUpdate, UpdateDecodeError>>,
}

impl NetworkUpdates {
    /// The successfully decoded updates, skipping the rejected ones.
    pub fn decoded(&self) -> impl Iterator<Item = &NetworkUpdate> {
        self.updates.iter().filter_map(|update| update.as_ref().ok())
    }

    /// Position and reason of every rejected item.
    pub fn failures(&self) -> impl Iterator<Item = (usize, UpdateDecodeError)> + '_ {
        self.updates
            .iter()
            .enumerate()
            .filter_map(|(position, update)| update.as_ref().err().map(|err| (position, *err)))
    }
}

impl<'de> Deserialize<'de> for NetworkUpdates {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let page = PagedList::<Value>::deserialize(d)?;
        let page = page.map(|item| {
            NetworkUpdate::from_value(&item).map_err(|err| {
                log::warn!("Skipping malformed network update: {err}");
                err
            })
        });

        Ok(Self {
            total: page.total,
            start: page.start,
            count: page.count,
            updates: page.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Id, Visibility};
    use serde_json::json;

    fn decode(content: Value) -> UpdateContent {
        UpdateContent::decode(content.as_object(), "TEST")
    }

    #[test]
    fn test_precedence_table_order() {
        let fields = PRECEDENCE.iter().map(|(field, _)| *field).collect::<Vec<_>>();
        assert_eq!(
            fields,
            vec![
                "person-activity",
                "job-position",
                "connection",
                "recommendation",
                "group-membership",
                "group",
                "follow",
                "viral-update",
                "viral",
                "share",
                "status-update",
                "status",
                "company",
            ]
        );
    }

    #[test]
    fn test_precedence_never_builds_unknown() {
        for (field, build) in PRECEDENCE {
            let content = build(field, &json!({}));
            assert_ne!(content.kind(), UpdateKind::Unknown, "{field}");
            assert_eq!(decode(json!({ *field: {} })), content, "{field}");
        }
    }

    #[test]
    fn test_share_variant_keeps_known_fields() {
        let content = decode(json!({
            "share": {
                "id": "s-99",
                "timestamp": 1_400_000_000_000_i64,
                "comment": "Worth a read",
                "visibility": { "code": "connections-only" },
                "content": {
                    "submittedUrl": "https://example.com/post",
                    "shortenedUrl": "https://lnkd.in/abc",
                    "title": "A post",
                    "submittedImageUrl": "https://example.com/img.png"
                },
                "source": { "serviceProvider": { "name": "LINKEDIN" } },
                "author": { "id": "a1", "firstName": "Ada", "lastName": "Lovelace" },
                "somethingNew": { "ignored": true }
            }
        }));

        let UpdateContent::Share(share) = content else {
            panic!("expected a share, got {content:?}");
        };
        assert_eq!(share.id.as_deref(), Some("s-99"));
        assert_eq!(share.comment.as_deref(), Some("Worth a read"));
        assert_eq!(share.visibility.unwrap().code, Visibility::ConnectionsOnly);
        let attachment = share.content.unwrap();
        assert_eq!(attachment.submitted_url.as_deref(), Some("https://example.com/post"));
        assert_eq!(attachment.shortened_url.as_deref(), Some("https://lnkd.in/abc"));
        assert_eq!(attachment.title.as_deref(), Some("A post"));
        assert_eq!(
            attachment.submitted_image_url.as_deref(),
            Some("https://example.com/img.png")
        );
        assert_eq!(
            share.source.unwrap().service_provider.unwrap().name.as_deref(),
            Some("LINKEDIN")
        );
        assert_eq!(share.author.unwrap().display_name(), "Ada Lovelace");
        assert_eq!(
            share.timestamp.unwrap().timestamp_millis(),
            1_400_000_000_000
        );
    }

    #[test]
    fn test_every_field_name_selects_its_variant() {
        let cases = [
            ("person-activity", UpdateKind::PersonActivity),
            ("job-position", UpdateKind::JobPosition),
            ("connection", UpdateKind::Connection),
            ("recommendation", UpdateKind::Recommendation),
            ("group-membership", UpdateKind::Group),
            ("group", UpdateKind::Group),
            ("follow", UpdateKind::Follow),
            ("viral-update", UpdateKind::Viral),
            ("viral", UpdateKind::Viral),
            ("share", UpdateKind::Share),
            ("status-update", UpdateKind::Status),
            ("status", UpdateKind::Status),
            ("company", UpdateKind::Company),
        ];
        for (field, kind) in cases {
            let content = decode(json!({ field: {} }));
            assert_eq!(content.kind(), kind, "field `{field}`");
        }
    }

    #[test]
    fn test_connection_variant() {
        let content = decode(json!({
            "connection": {
                "person": { "id": "p1", "firstName": "Grace" },
                "connections": {
                    "_total": 2,
                    "values": [
                        { "id": "c1", "firstName": "Alan", "headline": "Mathematician" },
                        { "id": "c2", "firstName": "Edsger" }
                    ]
                }
            }
        }));
        let UpdateContent::Connection(update) = content else {
            panic!("expected a connection update");
        };
        assert_eq!(update.person.unwrap().first_name.as_deref(), Some("Grace"));
        let ids = update
            .connections
            .iter()
            .map(|person| person.id.as_deref().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["c1", "c2"]);
        assert_eq!(update.connections[0].headline.as_deref(), Some("Mathematician"));
    }

    #[test]
    fn test_job_position_variant() {
        let content = decode(json!({
            "job-position": {
                "id": 3_345_221,
                "title": "Backend Engineer",
                "company": { "id": 1337, "name": "LinkedIn" },
                "jobPoster": { "id": "jp", "firstName": "Reid" },
                "siteJobUrl": "https://www.linkedin.com/jobs/view/3345221"
            }
        }));
        let UpdateContent::JobPosition(job) = content else {
            panic!("expected a job update");
        };
        assert_eq!(job.id.as_deref(), Some("3345221"));
        assert_eq!(job.title.as_deref(), Some("Backend Engineer"));
        assert_eq!(job.company.unwrap().name.as_deref(), Some("LinkedIn"));
        assert_eq!(job.job_poster.unwrap().first_name.as_deref(), Some("Reid"));
    }

    #[test]
    fn test_status_variant() {
        let content = decode(json!({
            "status-update": {
                "person": { "id": "p1" },
                "currentStatus": "Shipping the release"
            }
        }));
        let UpdateContent::Status(status) = content else {
            panic!("expected a status update");
        };
        assert_eq!(status.current_status.as_deref(), Some("Shipping the release"));
    }

    #[test]
    fn test_group_and_recommendation_variants() {
        let content = decode(json!({
            "group-membership": {
                "person": { "id": "p1" },
                "memberGroups": { "_total": 1, "values": [{ "id": 42, "name": "Rustaceans" }] }
            }
        }));
        let UpdateContent::Group(group) = content else {
            panic!("expected a group update");
        };
        assert_eq!(group.member_groups[0].id.as_deref(), Some("42"));
        assert_eq!(group.member_groups[0].name.as_deref(), Some("Rustaceans"));

        let content = decode(json!({
            "recommendation": {
                "recommendationsGiven": {
                    "_total": 1,
                    "values": [{
                        "id": 11,
                        "recommendationType": { "code": "colleague" },
                        "recommendationSnippet": "Great engineer",
                        "recommendee": { "firstName": "Linus" }
                    }]
                }
            }
        }));
        let UpdateContent::Recommendation(recommendation) = content else {
            panic!("expected a recommendation update");
        };
        let given = &recommendation.recommendations_given[0];
        assert_eq!(given.recommendation_snippet.as_deref(), Some("Great engineer"));
        assert_eq!(
            given.recommendee.as_ref().unwrap().first_name.as_deref(),
            Some("Linus")
        );
        assert!(recommendation.recommendations_received.is_empty());
    }

    #[test]
    fn test_follow_viral_activity_and_company_variants() {
        let content = decode(json!({
            "follow": {
                "action": { "code": "follow" },
                "following": { "id": 1337, "type": "company" }
            }
        }));
        let UpdateContent::Follow(follow) = content else {
            panic!("expected a follow update");
        };
        let target = follow.following.unwrap().entity_id().unwrap();
        assert!(matches!(target, EntityId::CompanyId(_)));
        assert_eq!(target.id(), "1337");

        let content = decode(json!({
            "viral-update": {
                "action": { "code": "LIKE" },
                "originalUpdate": { "updateKey": "UPDATE-1", "updateType": "SHAR" }
            }
        }));
        let UpdateContent::Viral(viral) = content else {
            panic!("expected a viral update");
        };
        assert_eq!(
            viral.original_update.unwrap().update_key.as_deref(),
            Some("UPDATE-1")
        );

        let content = decode(json!({
            "person-activity": {
                "activities": { "_total": 1, "values": [{ "appId": 5, "body": "Read a book" }] }
            }
        }));
        let UpdateContent::PersonActivity(activity) = content else {
            panic!("expected a person activity");
        };
        assert_eq!(activity.activities[0].body.as_deref(), Some("Read a book"));

        let content = decode(json!({
            "company": {
                "company": { "id": 9, "name": "Acme" },
                "companyStatusUpdate": { "share": { "comment": "We are hiring" } }
            }
        }));
        let UpdateContent::Company(company) = content else {
            panic!("expected a company update");
        };
        assert_eq!(company.company.unwrap().name.as_deref(), Some("Acme"));
        assert_eq!(
            company
                .company_status_update
                .unwrap()
                .share
                .unwrap()
                .comment
                .as_deref(),
            Some("We are hiring")
        );
    }

    #[test]
    fn test_unknown_keeps_update_type() {
        let content = UpdateContent::decode(
            json!({ "somethingElse": { "x": 1 } }).as_object(),
            "PICU",
        );
        assert_eq!(
            content,
            UpdateContent::Unknown {
                update_type: "PICU".to_owned()
            }
        );
        assert_eq!(UpdateContent::decode(None, "").kind(), UpdateKind::Unknown);
    }

    #[test]
    fn test_null_field_is_absent() {
        let content = decode(json!({ "share": null, "status": { "currentStatus": "hi" } }));
        assert_eq!(content.kind(), UpdateKind::Status);
    }

    #[test]
    fn test_precedence_picks_the_narrower_field() {
        let content = decode(json!({
            "company": { "company": { "id": 1 } },
            "person-activity": { "activities": [] }
        }));
        assert_eq!(content.kind(), UpdateKind::PersonActivity);

        let content = decode(json!({
            "share": { "comment": "x" },
            "job-position": { "company": { "id": 1 } }
        }));
        assert_eq!(content.kind(), UpdateKind::JobPosition);

        let content = decode(json!({ "group": {}, "group-membership": {} }));
        assert_eq!(content.kind(), UpdateKind::Group);
    }

    #[test]
    fn test_malformed_sub_object_keeps_what_it_can() {
        let content = decode(json!({
            "job-position": {
                "title": "Engineer",
                "company": "not an object",
                "jobPoster": { "firstName": ["nope"], "lastName": "Kay" }
            }
        }));
        let UpdateContent::JobPosition(job) = content else {
            panic!("expected a job update");
        };
        assert_eq!(job.title.as_deref(), Some("Engineer"));
        assert_eq!(job.company, None);
        let poster = job.job_poster.unwrap();
        assert_eq!(poster.first_name, None);
        assert_eq!(poster.last_name.as_deref(), Some("Kay"));

        let content = decode(json!({ "status": "just a string" }));
        assert_eq!(content, UpdateContent::Status(StatusUpdate::default()));
    }

    #[test]
    fn test_envelope() {
        let update = NetworkUpdate::from_value(&json!({
            "updateKey": "UPDATE-a1-5",
            "updateType": "STAT",
            "timestamp": 1_285_000_000_000_i64,
            "isCommentable": true,
            "isLikable": true,
            "numLikes": "three",
            "updateContent": { "status": { "currentStatus": "Hello" } },
            "updateComments": {
                "_total": 1,
                "values": [{ "id": 1, "comment": "Hi!", "sequenceNumber": 0 }]
            }
        }))
        .unwrap();

        assert_eq!(update.update_key, "UPDATE-a1-5");
        assert_eq!(update.update_type, "STAT");
        assert!(update.is_commentable);
        assert!(!update.is_liked);
        assert_eq!(update.num_likes, 0);
        assert_eq!(update.comments[0].comment.as_deref(), Some("Hi!"));
        assert_eq!(update.content.kind(), UpdateKind::Status);
    }

    #[test]
    fn test_envelope_rejections() {
        assert_eq!(
            NetworkUpdate::from_value(&json!([1, 2])),
            Err(UpdateDecodeError::NotAnObject)
        );
        assert_eq!(
            NetworkUpdate::from_value(&json!({ "updateType": "SHAR" })),
            Err(UpdateDecodeError::MissingUpdateKey)
        );
        assert_eq!(
            NetworkUpdate::from_value(&json!({ "updateKey": "" })),
            Err(UpdateDecodeError::MissingUpdateKey)
        );
        assert_eq!(
            NetworkUpdate::from_value(&json!({ "updateKey": 12 })),
            Err(UpdateDecodeError::InvalidUpdateKey)
        );
    }

    #[test]
    fn test_page_keeps_one_slot_per_item() {
        let page: NetworkUpdates = serde_json::from_value(json!({
            "_total": 3,
            "_start": 0,
            "_count": 3,
            "values": [
                {
                    "updateKey": "UPDATE-1",
                    "updateType": "SHAR",
                    "updateContent": { "share": { "comment": "first" } }
                },
                { "updateType": "CONN", "updateContent": { "connection": {} } },
                {
                    "updateKey": "UPDATE-3",
                    "updateType": "NEWKIND",
                    "updateContent": { "hologram": {} }
                }
            ]
        }))
        .unwrap();

        assert_eq!(page.updates.len(), 3);
        assert_eq!(page.total, 3);

        let first = page.updates[0].as_ref().unwrap();
        assert_eq!(first.content.kind(), UpdateKind::Share);
        assert_eq!(page.updates[1], Err(UpdateDecodeError::MissingUpdateKey));
        let third = page.updates[2].as_ref().unwrap();
        assert_eq!(
            third.content,
            UpdateContent::Unknown {
                update_type: "NEWKIND".to_owned()
            }
        );

        assert_eq!(page.decoded().count(), 2);
        assert_eq!(
            page.failures().collect::<Vec<_>>(),
            vec![(1, UpdateDecodeError::MissingUpdateKey)]
        );
    }

    #[test]
    fn test_update_kind_names() {
        assert_eq!(UpdateKind::JobPosition.to_string(), "job-position");
        let name: &'static str = UpdateKind::PersonActivity.into();
        assert_eq!(name, "person-activity");
    }
}
