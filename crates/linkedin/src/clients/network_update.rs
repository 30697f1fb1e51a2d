use super::{convert_result, BaseClient, ME};
use crate::{
    http::Query,
    model::{
        CurrentShare, Id, Likes, NetworkUpdates, NewShare, ProfileId, Share, ShareReceipt,
        UpdateComments,
    },
    params,
    pipeline::{ApiRequest, Method},
    ClientResult,
};

use libs::chrono::{DateTime, Utc};
use libs::serde_json::{json, Value};
use libs::strum::{Display, EnumString, IntoStaticStr};
use libs::url::{form_urlencoded, Url};
use maybe_async::maybe_async;

/// The update types the feed can be filtered on, as LinkedIn's codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(crate = "libs::strum")]
pub enum NetworkUpdateType {
    /// Application activity.
    #[strum(serialize = "APPS")]
    Applications,
    /// Company follows and company page activity.
    #[strum(serialize = "CMPY")]
    Company,
    #[strum(serialize = "CONN")]
    Connection,
    #[strum(serialize = "JOBS")]
    Job,
    #[strum(serialize = "JGRP")]
    Group,
    #[strum(serialize = "PICT")]
    Picture,
    #[strum(serialize = "PFOL")]
    PersonFollow,
    #[strum(serialize = "PRFX")]
    ExtendedProfile,
    #[strum(serialize = "RECU")]
    Recommendation,
    #[strum(serialize = "PRFU")]
    ProfileUpdate,
    #[strum(serialize = "SHAR")]
    Share,
    #[strum(serialize = "STAT")]
    Status,
    #[strum(serialize = "VIRL")]
    Viral,
}

/// Filters and paging for [`NetworkUpdateOperations::get_network_updates_page`].
///
/// The default asks for the first page of the authenticated member's network
/// feed, all types included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkUpdateParameters {
    /// Whose feed to read; the authenticated member when `None`.
    pub profile: Option<ProfileId>,
    /// Only the member's own updates instead of their network's.
    pub self_only: bool,
    pub show_hidden_members: bool,
    pub start: Option<u32>,
    pub count: Option<u32>,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub update_types: Vec<NetworkUpdateType>,
}

impl NetworkUpdateParameters {
    fn path(&self) -> String {
        match &self.profile {
            Some(profile) => format!("people/id={}/network/updates", profile.id()),
            None => format!("{ME}/network/updates"),
        }
    }

    /// Adds the filters to `url`. `type` may repeat, so this can't go through
    /// a [`Query`] map.
    fn append_to(&self, url: &mut Url) {
        let mut query = url.query_pairs_mut();
        if self.self_only {
            query.append_pair("scope", "self");
        }
        if let Some(start) = self.start {
            query.append_pair(params::START, &start.to_string());
        }
        if let Some(count) = self.count {
            query.append_pair(params::COUNT, &count.to_string());
        }
        if let Some(before) = self.before {
            query.append_pair("before", &before.timestamp_millis().to_string());
        }
        if let Some(after) = self.after {
            query.append_pair("after", &after.timestamp_millis().to_string());
        }
        for update_type in &self.update_types {
            query.append_pair("type", &update_type.to_string());
        }
        if self.show_hidden_members {
            query.append_pair("show-hidden-members", "true");
        }
    }
}

fn update_path(update_key: &str, resource: &str) -> String {
    let key = form_urlencoded::byte_serialize(update_key.as_bytes()).collect::<String>();
    format!("{ME}/network/updates/key={key}/{resource}")
}

/// The network updates feed and the authenticated member's shares.
#[maybe_async]
pub trait NetworkUpdateOperations: BaseClient {
    /// The first page of the authenticated member's network feed.
    async fn get_network_updates(&self) -> ClientResult<NetworkUpdates> {
        self.get_network_updates_page(&NetworkUpdateParameters::default())
            .await
    }

    /// A page of updates. Items that can't be decoded are kept in place as
    /// errors, see [`NetworkUpdates`].
    async fn get_network_updates_page(
        &self,
        parameters: &NetworkUpdateParameters,
    ) -> ClientResult<NetworkUpdates> {
        let mut url = self.api_url(&parameters.path(), &Query::new())?;
        parameters.append_to(&mut url);

        let result = self.send(ApiRequest::new(Method::Get, url)).await?;
        convert_result(&result)
    }

    /// The member's latest share, `None` if they never shared anything.
    async fn get_current_share(&self) -> ClientResult<Option<Share>> {
        let url = format!("{ME}:(current-share)");
        let result = self.api_get(&url, &Query::new()).await?;
        let current: CurrentShare = convert_result(&result)?;
        Ok(current.current_share)
    }

    async fn share(&self, share: &NewShare) -> ClientResult<ShareReceipt> {
        let url = format!("{ME}/shares");
        let result = self.api_post(&url, &libs::serde_json::to_value(share)?).await?;
        if result.trim().is_empty() {
            return Ok(ShareReceipt::default());
        }
        convert_result(&result)
    }

    async fn get_update_comments(&self, update_key: &str) -> ClientResult<UpdateComments> {
        let result = self
            .api_get(&update_path(update_key, "update-comments"), &Query::new())
            .await?;
        convert_result(&result)
    }

    async fn comment_on_update(&self, update_key: &str, comment: &str) -> ClientResult<()> {
        self.api_post(
            &update_path(update_key, "update-comments"),
            &json!({ "comment": comment }),
        )
        .await?;
        Ok(())
    }

    async fn get_update_likes(&self, update_key: &str) -> ClientResult<Likes> {
        let result = self
            .api_get(&update_path(update_key, "likes"), &Query::new())
            .await?;
        convert_result(&result)
    }

    async fn like_update(&self, update_key: &str) -> ClientResult<()> {
        self.api_put(&update_path(update_key, "is-liked"), &Value::Bool(true))
            .await?;
        Ok(())
    }

    async fn unlike_update(&self, update_key: &str) -> ClientResult<()> {
        self.api_put(&update_path(update_key, "is-liked"), &Value::Bool(false))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use libs::chrono::TimeZone;

    fn query(parameters: &NetworkUpdateParameters) -> Vec<(String, String)> {
        let mut url = Url::parse("https://api.linkedin.com/v2/").unwrap();
        parameters.append_to(&mut url);
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn test_default_parameters() {
        let parameters = NetworkUpdateParameters::default();
        assert_eq!(parameters.path(), "people/~/network/updates");
        assert!(query(&parameters).is_empty());
    }

    #[test]
    fn test_parameters_query() {
        let parameters = NetworkUpdateParameters {
            profile: Some(ProfileId::from_id("UrQd").unwrap()),
            self_only: true,
            count: Some(25),
            after: Utc.timestamp_millis_opt(1_400_000_000_000).single(),
            update_types: vec![NetworkUpdateType::Share, NetworkUpdateType::Connection],
            ..Default::default()
        };

        assert_eq!(parameters.path(), "people/id=UrQd/network/updates");
        let pairs = query(&parameters);
        let pairs = pairs
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            pairs,
            vec![
                ("scope", "self"),
                ("count", "25"),
                ("after", "1400000000000"),
                ("type", "SHAR"),
                ("type", "CONN"),
            ]
        );
    }

    #[test]
    fn test_update_type_codes() {
        assert_eq!("SHAR".parse::<NetworkUpdateType>(), Ok(NetworkUpdateType::Share));
        assert_eq!("VIRL".parse::<NetworkUpdateType>(), Ok(NetworkUpdateType::Viral));
        assert!("share".parse::<NetworkUpdateType>().is_err());
        let code: &'static str = NetworkUpdateType::Group.into();
        assert_eq!(code, "JGRP");
    }

    #[test]
    fn test_update_path_encodes_key() {
        assert_eq!(
            update_path("UPDATE-a1/b", "likes"),
            "people/~/network/updates/key=UPDATE-a1%2Fb/likes"
        );
    }
}
