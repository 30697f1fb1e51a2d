use super::{convert_result, BaseClient, ME};
use crate::{
    http::Query,
    model::{Id, Job, JobBookmarks, JobId, JobSuggestions, Jobs},
    ClientResult,
};

use libs::serde_json::json;
use maybe_async::maybe_async;

const JOB_FIELDS: &str = "(id,customer-job-code,active,posting-date,expiration-date,\
    posting-timestamp,expiration-timestamp,company:(id,name),position:(title,location,\
    job-functions,industries,job-type,experience-level),skills-and-experience,\
    description-snippet,description,salary,job-poster:(id,first-name,last-name,headline),\
    referral-bonus,site-job-url,location-description)";

/// Operations on job postings.
#[maybe_async]
pub trait JobOperations: BaseClient {
    async fn get_job(&self, id: JobId) -> ClientResult<Job> {
        let url = format!("jobs/{}:{JOB_FIELDS}", id.id());
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// Jobs LinkedIn suggests to the authenticated member.
    async fn get_suggestions(&self) -> ClientResult<Jobs> {
        let url = format!("{ME}/suggestions/job-suggestions:(jobs:{JOB_FIELDS})");
        let result = self.api_get(&url, &Query::new()).await?;
        let suggestions: JobSuggestions = convert_result(&result)?;
        Ok(suggestions.jobs)
    }

    async fn get_bookmarks(&self) -> ClientResult<JobBookmarks> {
        let url = format!("{ME}/job-bookmarks");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn bookmark_job(&self, id: JobId) -> ClientResult<()> {
        let url = format!("{ME}/job-bookmarks");
        self.api_post(&url, &json!({ "job": { "id": id.id() } }))
            .await?;
        Ok(())
    }

    async fn unbookmark_job(&self, id: JobId) -> ClientResult<()> {
        let url = format!("{ME}/job-bookmarks/{}", id.id());
        self.api_delete(&url).await?;
        Ok(())
    }
}
