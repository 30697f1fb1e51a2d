use super::{convert_result, BaseClient, ME};
use crate::{
    http::Query,
    join_ids,
    model::{Companies, Company, CompanyId, Id},
    util::build_map,
    ClientResult,
};

use libs::serde_json::json;
use libs::url::form_urlencoded;
use maybe_async::maybe_async;

const COMPANY_FIELDS: &str = "(id,name,universal-name,description,industry,company-type,\
    status,employee-count-range,stock-exchange,ticker,founded-year,end-year,website-url,\
    logo-url,square-logo-url,twitter-id,blog-rss-url,num-followers,industries,locations,\
    specialties,email-domains)";

fn universal_name_path(name: &str) -> String {
    let name = form_urlencoded::byte_serialize(name.as_bytes()).collect::<String>();
    format!("companies/universal-name={name}:{COMPANY_FIELDS}")
}

/// Operations on company pages.
#[maybe_async]
pub trait CompanyOperations: BaseClient {
    async fn get_company(&self, id: CompanyId) -> ClientResult<Company> {
        let url = format!("companies/{}:{COMPANY_FIELDS}", id.id());
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// Several companies in a single request.
    async fn get_companies<'a>(
        &self,
        ids: impl IntoIterator<Item = &'a CompanyId> + Send + 'a,
    ) -> ClientResult<Companies> {
        let url = format!("companies::({}):{COMPANY_FIELDS}", join_ids(ids));
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// Looks a company up by the name used in its page URL, such as
    /// `linkedin` for `https://www.linkedin.com/company/linkedin`.
    async fn get_company_by_universal_name(&self, name: &str) -> ClientResult<Company> {
        let result = self
            .api_get(&universal_name_path(name), &Query::new())
            .await?;
        convert_result(&result)
    }

    async fn get_companies_by_email_domain(&self, domain: &str) -> ClientResult<Companies> {
        let params = build_map([("email-domain", Some(domain))]);
        let url = format!("companies:{COMPANY_FIELDS}");
        let result = self.api_get(&url, &params).await?;
        convert_result(&result)
    }

    /// Companies the authenticated member follows.
    async fn get_followed_companies(&self) -> ClientResult<Companies> {
        let url = format!("{ME}/following/companies:{COMPANY_FIELDS}");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn get_suggestions_to_follow(&self) -> ClientResult<Companies> {
        let url = format!("{ME}/suggestions/to-follow/companies:{COMPANY_FIELDS}");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn follow_company(&self, id: CompanyId) -> ClientResult<()> {
        let url = format!("{ME}/following/companies");
        self.api_post(&url, &json!({ "id": id.id() })).await?;
        Ok(())
    }

    async fn unfollow_company(&self, id: CompanyId) -> ClientResult<()> {
        let url = format!("{ME}/following/companies/id={}", id.id());
        self.api_delete(&url).await?;
        Ok(())
    }
}
