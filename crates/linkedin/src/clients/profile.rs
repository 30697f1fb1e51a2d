use super::{convert_result, BaseClient, ME};
use crate::{
    http::Query,
    model::{Id, Profile, ProfileEmail, ProfileFull, ProfileId},
    ClientResult,
};

use libs::url::form_urlencoded;
use maybe_async::maybe_async;

const ME_LITE: &str = "me?projection=(id,firstName,maidenName,lastName,\
    profilePicture(displayImage~:playableStreams),apiStandardProfileRequest)";
const EMAIL: &str = "emailAddress?q=members&projection=(elements*(handle~))";

const PROFILE_FIELDS: &str = "(id,firstName,maidenName,lastName,\
    profilePicture(displayImage~:playableStreams),apiStandardProfileRequest)";
const FULL_PROFILE_FIELDS: &str = "(id,first-name,last-name,maiden-name,headline,industry,\
    summary,location,public-profile-url,email-address,picture-url,num-connections,\
    num-connections-capped,num-recommenders,associations,honors,interests,specialties,\
    main-address,date-of-birth,relation-to-viewer,positions,educations,phone-numbers,\
    im-accounts,twitter-accounts,member-url-resources,recommendations-received,skills)";

/// Operations on member profiles.
#[maybe_async]
pub trait ProfileOperations: BaseClient {
    /// The authenticated member's lite profile.
    async fn get_user_profile(&self) -> ClientResult<Profile> {
        let result = self.api_get(ME_LITE, &Query::new()).await?;
        convert_result(&result)
    }

    /// The authenticated member's profile with every field the API exposes.
    async fn get_user_profile_full(&self) -> ClientResult<ProfileFull> {
        let url = format!("{ME}:{FULL_PROFILE_FIELDS}");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn get_profile_by_id(&self, id: ProfileId) -> ClientResult<Profile> {
        let url = format!("people/id={}:{PROFILE_FIELDS}", id.id());
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// Looks a member up by the URL of their public profile.
    async fn get_profile_by_public_url(&self, public_url: &str) -> ClientResult<Profile> {
        let encoded = form_urlencoded::byte_serialize(public_url.as_bytes()).collect::<String>();
        let url = format!("people/url={encoded}:{PROFILE_FIELDS}");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// The authenticated member's id.
    async fn get_profile_id(&self) -> ClientResult<String> {
        Ok(self.get_user_profile().await?.id)
    }

    /// The authenticated member's public profile URL, if they have one.
    async fn get_profile_url(&self) -> ClientResult<Option<String>> {
        let url = format!("{ME}:(id,public-profile-url)");
        let result = self.api_get(&url, &Query::new()).await?;
        let profile: ProfileFull = convert_result(&result)?;
        Ok(profile.public_profile_url)
    }

    async fn get_user_email(&self) -> ClientResult<ProfileEmail> {
        let result = self.api_get(EMAIL, &Query::new()).await?;
        convert_result(&result)
    }
}
