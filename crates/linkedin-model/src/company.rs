//! Company page objects

use crate::custom_serde::{flexible_id, lenient, values};
use crate::{CodeAndName, PagedList};

use serde::Deserialize;

/// The short company reference embedded in positions, jobs and updates.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CompanySummary {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub size: Option<String>,
    #[serde(rename = "type", deserialize_with = "lenient::deserialize")]
    pub company_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyAddress {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country_code: Option<String>,
    pub region_code: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CompanyContactInfo {
    pub phone1: Option<String>,
    pub phone2: Option<String>,
    pub fax: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompanyLocation {
    pub address: Option<CompanyAddress>,
    pub contact_info: Option<CompanyContactInfo>,
    pub is_headquarters: Option<bool>,
    pub is_active: Option<bool>,
}

/// A company page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub universal_name: Option<String>,
    pub description: Option<String>,
    pub industry: Option<String>,
    pub company_type: Option<CodeAndName>,
    pub status: Option<CodeAndName>,
    pub employee_count_range: Option<CodeAndName>,
    pub stock_exchange: Option<CodeAndName>,
    pub ticker: Option<String>,
    pub founded_year: Option<i32>,
    pub end_year: Option<i32>,
    pub website_url: Option<String>,
    pub logo_url: Option<String>,
    pub square_logo_url: Option<String>,
    pub twitter_id: Option<String>,
    pub blog_rss_url: Option<String>,
    pub num_followers: Option<u64>,
    #[serde(deserialize_with = "values::deserialize")]
    pub industries: Vec<CodeAndName>,
    #[serde(deserialize_with = "values::deserialize")]
    pub locations: Vec<CompanyLocation>,
    #[serde(deserialize_with = "values::deserialize")]
    pub specialties: Vec<String>,
    #[serde(deserialize_with = "values::deserialize")]
    pub email_domains: Vec<String>,
}

impl Company {
    /// The location flagged as headquarters, if any.
    #[must_use]
    pub fn headquarters(&self) -> Option<&CompanyLocation> {
        self.locations
            .iter()
            .find(|location| location.is_headquarters == Some(true))
    }
}

pub type Companies = PagedList<Company>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company() {
        let company: Company = serde_json::from_value(json!({
            "id": 1337,
            "name": "LinkedIn",
            "universalName": "linkedin",
            "companyType": { "code": "P", "name": "Public Company" },
            "employeeCountRange": { "code": "I", "name": "10001+" },
            "foundedYear": 2003,
            "numFollowers": 1_500_000,
            "specialties": { "_total": 2, "values": ["Online Professional Network", "Jobs"] },
            "emailDomains": { "_total": 1, "values": ["linkedin.com"] },
            "locations": {
                "_total": 2,
                "values": [
                    { "isHeadquarters": false, "address": { "city": "Omaha" } },
                    {
                        "isHeadquarters": true,
                        "address": { "city": "Sunnyvale", "postalCode": "94085" },
                        "contactInfo": { "phone1": "(650) 687-3600" }
                    }
                ]
            }
        }))
        .unwrap();

        assert_eq!(company.id.as_deref(), Some("1337"));
        assert_eq!(company.universal_name.as_deref(), Some("linkedin"));
        assert_eq!(
            company.company_type.as_ref().unwrap().code.as_deref(),
            Some("P")
        );
        assert_eq!(company.specialties, vec!["Online Professional Network", "Jobs"]);
        assert_eq!(company.email_domains, vec!["linkedin.com"]);

        let hq = company.headquarters().unwrap();
        assert_eq!(
            hq.address.as_ref().unwrap().city.as_deref(),
            Some("Sunnyvale")
        );
        assert_eq!(
            hq.contact_info.as_ref().unwrap().phone1.as_deref(),
            Some("(650) 687-3600")
        );
    }
}
