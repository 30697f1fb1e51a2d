//! Small objects shared by several endpoints.

use crate::custom_serde::{flexible_id, lenient, millisecond_timestamp};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// The `{code, name}` pair LinkedIn uses for most enumerations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeAndName {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub code: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub name: Option<String>,
}

/// A partial date; LinkedIn often only knows the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LinkedInDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl LinkedInDate {
    /// The full date, if every component is known and valid.
    #[must_use]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Country {
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Location {
    pub name: Option<String>,
    pub country: Option<Country>,
}

/// A `{url}` object, as found in `siteStandardProfileRequest` and similar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UrlRequest {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub url: Option<String>,
}

/// The member summary embedded in updates, posts, comments and likes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub headline: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub picture_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub public_profile_url: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub site_standard_profile_request: Option<UrlRequest>,
}

impl Person {
    /// First and last name joined by a space, skipping the missing parts.
    #[must_use]
    pub fn display_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Like {
    #[serde(deserialize_with = "lenient::deserialize")]
    pub person: Option<Person>,
    #[serde(deserialize_with = "millisecond_timestamp::deserialize")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// A page of results.
///
/// Understands both envelopes the API uses: `{_total, _start, _count,
/// values}` and `{elements, paging: {start, count, total}}`. Values keep the
/// order the server sent them in.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    pub total: usize,
    pub start: usize,
    pub count: usize,
    pub values: Vec<T>,
}

impl<T> Default for PagedList<T> {
    fn default() -> Self {
        Self {
            total: 0,
            start: 0,
            count: 0,
            values: Vec::new(),
        }
    }
}

impl<T> PagedList<T> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Applies `f` to every value, keeping the paging information.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PagedList<U> {
        PagedList {
            total: self.total,
            start: self.start,
            count: self.count,
            values: self.values.into_iter().map(f).collect(),
        }
    }
}

impl<T> IntoIterator for PagedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Paging {
    start: Option<usize>,
    count: Option<usize>,
    total: Option<usize>,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct RawPagedList<T> {
    #[serde(rename = "_total")]
    total: Option<usize>,
    #[serde(rename = "_start")]
    start: Option<usize>,
    #[serde(rename = "_count")]
    count: Option<usize>,
    #[serde(default, alias = "elements")]
    values: Vec<T>,
    #[serde(default)]
    paging: Paging,
}

impl<'de, T> Deserialize<'de> for PagedList<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPagedList::<T>::deserialize(d)?;
        let len = raw.values.len();
        Ok(Self {
            total: raw.total.or(raw.paging.total).unwrap_or(len),
            start: raw.start.or(raw.paging.start).unwrap_or(0),
            count: raw.count.or(raw.paging.count).unwrap_or(len),
            values: raw.values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paged_list_v1_envelope() {
        let page: PagedList<CodeAndName> = serde_json::from_value(json!({
            "_total": 12,
            "_start": 10,
            "_count": 2,
            "values": [{ "code": "b" }, { "code": "a" }]
        }))
        .unwrap();
        assert_eq!((page.total, page.start, page.count), (12, 10, 2));
        let codes = page
            .iter()
            .map(|v| v.code.as_deref().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(codes, vec!["b", "a"]);
    }

    #[test]
    fn test_paged_list_v2_envelope() {
        let page: PagedList<CodeAndName> = serde_json::from_value(json!({
            "elements": [{ "name": "x" }],
            "paging": { "start": 0, "count": 10 }
        }))
        .unwrap();
        assert_eq!((page.total, page.start, page.count), (1, 0, 10));
        assert_eq!(page.values[0].name.as_deref(), Some("x"));
    }

    #[test]
    fn test_empty_page() {
        let page: PagedList<CodeAndName> = serde_json::from_value(json!({ "_total": 0 })).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total, 0);
    }

    #[test]
    fn test_person_display_name() {
        let person: Person = serde_json::from_value(json!({
            "id": "a1",
            "firstName": "Ada",
            "lastName": 42
        }))
        .unwrap();
        assert_eq!(person.last_name, None);
        assert_eq!(person.display_name(), "Ada");
    }

    #[test]
    fn test_linkedin_date() {
        let date: LinkedInDate = serde_json::from_value(json!({ "year": 2012, "month": 4 })).unwrap();
        assert_eq!(date.to_naive_date(), None);
        let date: LinkedInDate =
            serde_json::from_value(json!({ "year": 2012, "month": 4, "day": 1 })).unwrap();
        assert_eq!(date.to_naive_date(), NaiveDate::from_ymd_opt(2012, 4, 1));
    }
}
