use super::{convert_result, BaseClient, ME};
use crate::{
    http::Query,
    model::{
        Group, GroupId, GroupMemberships, GroupSuggestions, Id, PostComments, PostId, Posts,
    },
    util::JsonBuilder,
    ClientResult,
};

use libs::serde_json::{json, Value};
use maybe_async::maybe_async;

const GROUP_FIELDS: &str = "(id,name,short-description,description,category,\
    counts-by-category,is-open-to-non-members,large-logo-url,small-logo-url,locale,\
    num-members,relation-to-viewer:(membership-state,available-actions),site-group-url,\
    website-url,posts)";
const POST_FIELDS: &str = "(id,type,category,creator,title,summary,creation-timestamp,\
    likes,relation-to-viewer:(is-following,is-liked,available-actions),attachment,\
    site-group-post-url)";
const COMMENT_FIELDS: &str = "(id,text,creator,creation-timestamp)";

/// Operations on groups and their discussions.
#[maybe_async]
pub trait GroupOperations: BaseClient {
    async fn get_group_details(&self, id: GroupId) -> ClientResult<Group> {
        let url = format!("groups/{}:{GROUP_FIELDS}", id.id());
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    /// Groups the authenticated member belongs to.
    async fn get_group_memberships(&self) -> ClientResult<GroupMemberships> {
        let url = format!(
            "{ME}/group-memberships:(group:{GROUP_FIELDS},membership-state,\
             allow-messages-from-members,email-digest-frequency,show-group-logo-in-profile)"
        );
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn get_group_suggestions(&self) -> ClientResult<GroupSuggestions> {
        let url = format!("{ME}/suggestions/groups:{GROUP_FIELDS}");
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn get_posts(&self, id: GroupId) -> ClientResult<Posts> {
        let url = format!("groups/{}/posts:{POST_FIELDS}", id.id());
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn get_post_comments(&self, id: PostId) -> ClientResult<PostComments> {
        let url = format!("posts/{}/comments:{COMMENT_FIELDS}", id.id());
        let result = self.api_get(&url, &Query::new()).await?;
        convert_result(&result)
    }

    async fn join_group(&self, id: GroupId) -> ClientResult<()> {
        let url = format!("{ME}/group-memberships/{}", id.id());
        self.api_put(&url, &json!({ "membership-state": { "code": "member" } }))
            .await?;
        Ok(())
    }

    async fn leave_group(&self, id: GroupId) -> ClientResult<()> {
        let url = format!("{ME}/group-memberships/{}", id.id());
        self.api_delete(&url).await?;
        Ok(())
    }

    /// Starts a discussion in a group.
    async fn create_post(
        &self,
        id: GroupId,
        title: &str,
        summary: Option<&str>,
    ) -> ClientResult<()> {
        let url = format!("groups/{}/posts", id.id());
        let body = JsonBuilder::new()
            .required("title", title)
            .optional("summary", summary)
            .build();
        self.api_post(&url, &body).await?;
        Ok(())
    }

    async fn like_post(&self, id: PostId) -> ClientResult<()> {
        let url = format!("posts/{}/relation-to-viewer/is-liked", id.id());
        self.api_put(&url, &Value::Bool(true)).await?;
        Ok(())
    }

    async fn unlike_post(&self, id: PostId) -> ClientResult<()> {
        let url = format!("posts/{}/relation-to-viewer/is-liked", id.id());
        self.api_put(&url, &Value::Bool(false)).await?;
        Ok(())
    }

    async fn follow_post(&self, id: PostId) -> ClientResult<()> {
        let url = format!("posts/{}/relation-to-viewer/is-following", id.id());
        self.api_put(&url, &Value::Bool(true)).await?;
        Ok(())
    }

    async fn unfollow_post(&self, id: PostId) -> ClientResult<()> {
        let url = format!("posts/{}/relation-to-viewer/is-following", id.id());
        self.api_put(&url, &Value::Bool(false)).await?;
        Ok(())
    }

    async fn add_comment_to_post(&self, id: PostId, text: &str) -> ClientResult<()> {
        let url = format!("posts/{}/comments", id.id());
        self.api_post(&url, &json!({ "text": text })).await?;
        Ok(())
    }

    /// Deletes a post, or flags it as inappropriate when the member isn't
    /// allowed to delete it.
    async fn delete_post(&self, id: PostId) -> ClientResult<()> {
        let url = format!("posts/{}", id.id());
        self.api_delete(&url).await?;
        Ok(())
    }
}
