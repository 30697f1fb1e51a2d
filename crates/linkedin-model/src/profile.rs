//! Member profile objects

use crate::custom_serde::{flexible_id, lenient, values};
use crate::{CodeAndName, LinkedInDate, Location, PagedList, Person};

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The locales a [`LocalizedField`] can hold.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
pub enum Locale {
    #[strum(serialize = "en_US")]
    EnUs,
    #[strum(serialize = "fr_FR")]
    FrFr,
    #[strum(serialize = "tr_TR")]
    TrTr,
    #[strum(serialize = "de_DE")]
    DeDe,
    #[strum(serialize = "es_ES")]
    EsEs,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PreferredLocale {
    pub country: String,
    pub language: String,
}

impl PreferredLocale {
    #[must_use]
    pub fn locale(&self) -> Option<Locale> {
        format!("{}_{}", self.language, self.country).parse().ok()
    }
}

/// A human readable value in several languages, such as a member's name.
///
/// Keys outside of [`Locale`] are dropped while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalizedField {
    localized: BTreeMap<Locale, String>,
    preferred_locale: Option<PreferredLocale>,
}

impl LocalizedField {
    #[must_use]
    pub fn new(
        localized: impl IntoIterator<Item = (Locale, String)>,
        preferred_locale: Option<PreferredLocale>,
    ) -> Self {
        Self {
            localized: localized.into_iter().collect(),
            preferred_locale,
        }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> Option<&str> {
        self.localized.get(&locale).map(String::as_str)
    }

    /// The value in the member's preferred locale, or the first one available.
    #[must_use]
    pub fn preferred(&self) -> Option<&str> {
        self.preferred_locale
            .as_ref()
            .and_then(PreferredLocale::locale)
            .and_then(|locale| self.get(locale))
            .or_else(|| self.localized.values().next().map(String::as_str))
    }

    #[must_use]
    pub fn preferred_locale(&self) -> Option<&PreferredLocale> {
        self.preferred_locale.as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Locale, &str)> {
        self.localized
            .iter()
            .map(|(locale, value)| (*locale, value.as_str()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.localized.is_empty()
    }
}

impl<'de> Deserialize<'de> for LocalizedField {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Raw {
            #[serde(default)]
            localized: BTreeMap<String, String>,
            preferred_locale: Option<PreferredLocale>,
        }

        let raw = Raw::deserialize(d)?;
        let localized = raw
            .localized
            .into_iter()
            .filter_map(|(key, value)| Some((key.parse::<Locale>().ok()?, value)));
        Ok(Self::new(localized, raw.preferred_locale))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureIdentifier {
    pub identifier: String,
    pub identifier_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PictureElement {
    #[serde(default)]
    pub identifiers: Vec<PictureIdentifier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PictureElements {
    #[serde(default)]
    pub elements: Vec<PictureElement>,
}

/// The `profilePicture(displayImage~:playableStreams)` projection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProfilePicture {
    #[serde(rename = "displayImage")]
    pub display_image: Option<String>,
    #[serde(rename = "displayImage~")]
    pub display_image_elements: Option<PictureElements>,
}

impl ProfilePicture {
    /// Every rendition of the picture, smallest first as sent by the API.
    #[must_use]
    pub fn urls(&self) -> Vec<&str> {
        self.display_image_elements
            .iter()
            .flat_map(|elements| &elements.elements)
            .flat_map(|element| &element.identifiers)
            .map(|identifier| identifier.identifier.as_str())
            .collect()
    }
}

/// Token needed to send a connection invitation to the member it came with.
///
/// LinkedIn hands it out as the `x-li-auth-token` header of
/// `apiStandardProfileRequest`, formatted as `name:value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionAuthorization {
    pub name: String,
    pub value: String,
}

impl ConnectionAuthorization {
    pub const HEADER: &'static str = "x-li-auth-token";

    #[must_use]
    pub fn parse(header_value: &str) -> Option<Self> {
        let (name, value) = header_value.split_once(':')?;
        if name.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }
}

fn deserialize_connection_authorization<'de, D>(
    d: D,
) -> Result<Option<ConnectionAuthorization>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Header {
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        value: Option<String>,
    }

    #[derive(Deserialize)]
    struct StandardProfileRequest {
        #[serde(default, deserialize_with = "values::deserialize")]
        headers: Vec<Header>,
    }

    let request: Option<StandardProfileRequest> = lenient::deserialize(d)?;
    Ok(request.and_then(|request| {
        request
            .headers
            .iter()
            .find(|header| {
                header
                    .name
                    .as_deref()
                    .map_or(false, |name| name.eq_ignore_ascii_case(ConnectionAuthorization::HEADER))
            })
            .and_then(|header| ConnectionAuthorization::parse(header.value.as_deref()?))
    }))
}

/// The lite profile of a member.
///
/// [Reference](https://learn.microsoft.com/en-us/linkedin/shared/integrations/people/profile-api)
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub first_name: LocalizedField,
    #[serde(default)]
    pub last_name: LocalizedField,
    pub maiden_name: Option<LocalizedField>,
    pub profile_picture: Option<ProfilePicture>,
    #[serde(
        default,
        rename = "apiStandardProfileRequest",
        deserialize_with = "deserialize_connection_authorization"
    )]
    pub connection_authorization: Option<ConnectionAuthorization>,
}

pub type Connections = PagedList<Profile>;

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailHandle {
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EmailElement {
    pub handle: Option<String>,
    #[serde(rename = "handle~")]
    pub handle_details: Option<EmailHandle>,
}

/// Result of `emailAddress?q=members&projection=(elements*(handle~))`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ProfileEmail {
    #[serde(default)]
    pub elements: Vec<EmailElement>,
}

impl ProfileEmail {
    /// The first address returned, which is the primary one.
    #[must_use]
    pub fn email_address(&self) -> Option<&str> {
        self.elements
            .iter()
            .filter_map(|element| element.handle_details.as_ref()?.email_address.as_deref())
            .next()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Position {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub start_date: Option<LinkedInDate>,
    pub end_date: Option<LinkedInDate>,
    pub is_current: Option<bool>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub company: Option<crate::CompanySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    pub school_name: Option<String>,
    pub field_of_study: Option<String>,
    pub degree: Option<String>,
    pub activities: Option<String>,
    pub notes: Option<String>,
    pub start_date: Option<LinkedInDate>,
    pub end_date: Option<LinkedInDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneNumber {
    pub phone_type: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImAccount {
    pub im_account_type: Option<String>,
    pub im_account_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwitterAccount {
    pub provider_account_id: Option<String>,
    pub provider_account_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct UrlResource {
    pub name: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SkillName {
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Skill {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    pub skill: Option<SkillName>,
}

impl Skill {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.skill.as_ref()?.name.as_deref()
    }
}

/// A recommendation between two members. Also carried by recommendation
/// network updates, hence every field is read leniently.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(deserialize_with = "flexible_id::deserialize")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub recommendation_type: Option<CodeAndName>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub recommendation_text: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub recommendation_snippet: Option<String>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub recommender: Option<Person>,
    #[serde(deserialize_with = "lenient::deserialize")]
    pub recommendee: Option<Person>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Relation {
    /// Degrees of separation from the viewer, `-1` when out of network.
    pub distance: Option<i32>,
}

/// The full profile projection of the authenticated member.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileFull {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub maiden_name: Option<String>,
    pub headline: Option<String>,
    pub industry: Option<String>,
    pub summary: Option<String>,
    pub location: Option<Location>,
    pub public_profile_url: Option<String>,
    pub email_address: Option<String>,
    pub picture_url: Option<String>,
    pub num_connections: Option<u32>,
    pub num_connections_capped: Option<bool>,
    pub num_recommenders: Option<u32>,
    pub associations: Option<String>,
    pub honors: Option<String>,
    pub interests: Option<String>,
    pub specialties: Option<String>,
    pub main_address: Option<String>,
    pub date_of_birth: Option<LinkedInDate>,
    pub relation_to_viewer: Option<Relation>,
    #[serde(deserialize_with = "values::deserialize")]
    pub positions: Vec<Position>,
    #[serde(deserialize_with = "values::deserialize")]
    pub educations: Vec<Education>,
    #[serde(deserialize_with = "values::deserialize")]
    pub phone_numbers: Vec<PhoneNumber>,
    #[serde(deserialize_with = "values::deserialize")]
    pub im_accounts: Vec<ImAccount>,
    #[serde(deserialize_with = "values::deserialize")]
    pub twitter_accounts: Vec<TwitterAccount>,
    #[serde(deserialize_with = "values::deserialize")]
    pub member_url_resources: Vec<UrlResource>,
    #[serde(deserialize_with = "values::deserialize")]
    pub recommendations_received: Vec<Recommendation>,
    #[serde(deserialize_with = "values::deserialize")]
    pub skills: Vec<Skill>,
}

/// Size of the member's network. The API answers with a bare
/// `{"_total": 2, "values": [first, second]}` list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NetworkStatistics {
    pub first_degree_count: u64,
    pub second_degree_count: u64,
}

impl<'de> Deserialize<'de> for NetworkStatistics {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let counts: PagedList<u64> = Deserialize::deserialize(d)?;
        let mut counts = counts.into_iter();
        Ok(Self {
            first_degree_count: counts.next().unwrap_or_default(),
            second_degree_count: counts.next().unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_with_localized_names() {
        let profile: Profile = serde_json::from_value(json!({
            "id": "yrZCpj2Z12",
            "firstName": {
                "localized": { "en_US": "Bob", "fr_FR": "Robert", "xx_YY": "?" },
                "preferredLocale": { "country": "FR", "language": "fr" }
            },
            "lastName": {
                "localized": { "en_US": "Smith" },
                "preferredLocale": { "country": "US", "language": "en" }
            },
            "profilePicture": {
                "displayImage": "urn:li:digitalmediaAsset:C4D00AAAAbBCDEFGhiJ",
                "displayImage~": {
                    "elements": [
                        { "identifiers": [{ "identifier": "https://media.example/100", "identifierType": "EXTERNAL_URL" }] },
                        { "identifiers": [{ "identifier": "https://media.example/200", "identifierType": "EXTERNAL_URL" }] }
                    ]
                }
            }
        }))
        .unwrap();

        assert_eq!(profile.id, "yrZCpj2Z12");
        assert_eq!(profile.first_name.get(Locale::EnUs), Some("Bob"));
        assert_eq!(profile.first_name.preferred(), Some("Robert"));
        assert_eq!(profile.first_name.iter().count(), 2);
        assert_eq!(profile.last_name.preferred(), Some("Smith"));
        assert!(profile.maiden_name.is_none());
        assert!(profile.connection_authorization.is_none());

        let picture = profile.profile_picture.unwrap();
        assert_eq!(
            picture.urls(),
            vec!["https://media.example/100", "https://media.example/200"]
        );
    }

    #[test]
    fn test_connection_authorization() {
        let profile: Profile = serde_json::from_value(json!({
            "id": "abc",
            "apiStandardProfileRequest": {
                "url": "https://api.linkedin.com/v1/people/abc",
                "headers": {
                    "_total": 1,
                    "values": [{ "name": "x-li-auth-token", "value": "NAME_SEARCH:R8Y4" }]
                }
            }
        }))
        .unwrap();

        let auth = profile.connection_authorization.unwrap();
        assert_eq!(auth.name, "NAME_SEARCH");
        assert_eq!(auth.value, "R8Y4");
        assert_eq!(ConnectionAuthorization::parse("novalue"), None);
    }

    #[test]
    fn test_connection_authorization_among_incomplete_headers() {
        let profile: Profile = serde_json::from_value(json!({
            "id": "abc",
            "apiStandardProfileRequest": {
                "headers": {
                    "_total": 3,
                    "values": [
                        { "name": "x-li-format" },
                        { "value": "orphan" },
                        { "name": "X-LI-AUTH-TOKEN", "value": "NAME_SEARCH:R8Y4" }
                    ]
                }
            }
        }))
        .unwrap();

        let auth = profile.connection_authorization.unwrap();
        assert_eq!(auth.value, "R8Y4");
    }

    #[test]
    fn test_profile_email() {
        let email: ProfileEmail = serde_json::from_value(json!({
            "elements": [{
                "handle": "urn:li:emailAddress:3775708763",
                "handle~": { "emailAddress": "hsimpson@example.com" }
            }]
        }))
        .unwrap();
        assert_eq!(email.email_address(), Some("hsimpson@example.com"));
    }

    #[test]
    fn test_profile_full_collections() {
        let profile: ProfileFull = serde_json::from_value(json!({
            "id": "abc",
            "headline": "Engineer",
            "numConnections": 500,
            "positions": {
                "_total": 2,
                "values": [
                    { "id": 1, "title": "Lead", "isCurrent": true, "company": { "id": 9, "name": "Acme" } },
                    { "id": 2, "title": "Intern", "isCurrent": false }
                ]
            },
            "skills": { "_total": 1, "values": [{ "id": 7, "skill": { "name": "Rust" } }] },
            "relationToViewer": { "distance": 0 }
        }))
        .unwrap();

        assert_eq!(profile.positions.len(), 2);
        assert_eq!(profile.positions[0].title.as_deref(), Some("Lead"));
        assert_eq!(
            profile.positions[0].company.as_ref().unwrap().name.as_deref(),
            Some("Acme")
        );
        assert_eq!(profile.skills[0].name(), Some("Rust"));
        assert!(profile.educations.is_empty());
        assert_eq!(profile.relation_to_viewer.unwrap().distance, Some(0));
    }

    #[test]
    fn test_network_statistics() {
        let stats: NetworkStatistics =
            serde_json::from_value(json!({ "_total": 2, "values": [329, 17084] })).unwrap();
        assert_eq!(stats.first_degree_count, 329);
        assert_eq!(stats.second_degree_count, 17084);
    }
}
