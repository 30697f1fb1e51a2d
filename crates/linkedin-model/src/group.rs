//! Group, post and comment objects

use crate::custom_serde::{flexible_id, millisecond_timestamp, values};
use crate::{CodeAndName, Like, PagedList, Person};

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct GroupCount {
    pub category: Option<CodeAndName>,
    pub count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupRelation {
    pub membership_state: Option<CodeAndName>,
    #[serde(deserialize_with = "values::deserialize")]
    pub available_actions: Vec<CodeAndName>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attachment {
    pub content_domain: Option<String>,
    pub content_url: Option<String>,
    pub image_url: Option<String>,
    pub summary: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostRelation {
    pub is_following: Option<bool>,
    pub is_liked: Option<bool>,
    #[serde(deserialize_with = "values::deserialize")]
    pub available_actions: Vec<CodeAndName>,
}

/// A discussion or promotion posted in a group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Post {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub post_type: Option<CodeAndName>,
    pub category: Option<CodeAndName>,
    pub creator: Option<Person>,
    pub title: Option<String>,
    pub summary: Option<String>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "values::deserialize")]
    pub likes: Vec<Like>,
    pub relation_to_viewer: Option<PostRelation>,
    pub attachment: Option<Attachment>,
    pub site_group_post_url: Option<String>,
}

pub type Posts = PagedList<Post>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PostComment {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    pub text: Option<String>,
    pub creator: Option<Person>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub creation_timestamp: Option<DateTime<Utc>>,
}

pub type PostComments = PagedList<PostComment>;

/// A group with the details the `groups/{id}` projection asks for.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub description: Option<String>,
    pub category: Option<CodeAndName>,
    #[serde(deserialize_with = "values::deserialize")]
    pub counts_by_category: Vec<GroupCount>,
    pub is_open_to_non_members: Option<bool>,
    pub large_logo_url: Option<String>,
    pub small_logo_url: Option<String>,
    pub locale: Option<String>,
    pub num_members: Option<u64>,
    pub posts: Option<Posts>,
    pub relation_to_viewer: Option<GroupRelation>,
    pub site_group_url: Option<String>,
    pub website_url: Option<String>,
}

pub type GroupSuggestions = PagedList<Group>;

/// The authenticated member's membership of a group.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupMembership {
    pub group: Option<Group>,
    pub membership_state: Option<CodeAndName>,
    pub allow_messages_from_members: Option<bool>,
    pub email_digest_frequency: Option<CodeAndName>,
    pub show_group_logo_in_profile: Option<bool>,
}

pub type GroupMemberships = PagedList<GroupMembership>;
