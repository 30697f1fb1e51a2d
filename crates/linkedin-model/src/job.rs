//! Job posting objects

use crate::custom_serde::{flexible_id, millisecond_timestamp, values};
use crate::{CodeAndName, CompanySummary, LinkedInDate, Location, PagedList, Person};

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPositionDetails {
    pub title: Option<String>,
    #[serde(deserialize_with = "values::deserialize")]
    pub job_functions: Vec<CodeAndName>,
    #[serde(deserialize_with = "values::deserialize")]
    pub industries: Vec<CodeAndName>,
    pub job_type: Option<CodeAndName>,
    pub experience_level: Option<CodeAndName>,
    pub location: Option<Location>,
}

/// A job posting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Job {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    pub active: Option<bool>,
    pub company: Option<CompanySummary>,
    pub position: Option<JobPositionDetails>,
    pub description: Option<String>,
    pub description_snippet: Option<String>,
    pub skills_and_experience: Option<String>,
    pub posting_date: Option<LinkedInDate>,
    pub expiration_date: Option<LinkedInDate>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub posting_timestamp: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub expiration_timestamp: Option<DateTime<Utc>>,
    pub job_poster: Option<Person>,
    pub location_description: Option<String>,
    pub salary: Option<String>,
    pub site_job_url: Option<String>,
    pub referral_bonus: Option<String>,
    pub customer_job_code: Option<String>,
}

impl Job {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.position.as_ref()?.title.as_deref()
    }
}

/// A job the member saved or applied to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobBookmark {
    pub is_applied: Option<bool>,
    pub is_saved: Option<bool>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub saved_timestamp: Option<DateTime<Utc>>,
    pub job: Option<Job>,
}

pub type Jobs = PagedList<Job>;
pub type JobBookmarks = PagedList<JobBookmark>;

/// `people/~/suggestions/job-suggestions` wraps its page in a `jobs` field.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct JobSuggestions {
    #[serde(default)]
    pub jobs: Jobs,
}
