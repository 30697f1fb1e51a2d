use super::{BaseClient, ME};
use crate::{
    model::{ConnectionAuthorization, Id, ProfileId},
    ClientResult,
};

use libs::serde_json::{json, Value};
use maybe_async::maybe_async;

fn mailbox_item(recipients: Vec<Value>, subject: &str, body: &str) -> Value {
    json!({
        "recipients": { "values": recipients },
        "subject": subject,
        "body": body,
    })
}

fn invitation_request(authorization: Option<&ConnectionAuthorization>) -> Value {
    let mut request = json!({ "connect-type": "friend" });
    if let Some(authorization) = authorization {
        request["authorization"] = json!({
            "name": authorization.name,
            "value": authorization.value,
        });
    }
    json!({ "invitation-request": request })
}

/// Messages and invitations sent from the authenticated member.
#[maybe_async]
pub trait CommunicationOperations: BaseClient {
    /// Sends a message to one or more first-degree connections.
    async fn send_message(
        &self,
        subject: &str,
        body: &str,
        recipients: &[ProfileId],
    ) -> ClientResult<()> {
        let recipients = recipients
            .iter()
            .map(|id| json!({ "person": { "_path": format!("/people/{}", id.id()) } }))
            .collect();

        let url = format!("{ME}/mailbox");
        self.api_post(&url, &mailbox_item(recipients, subject, body))
            .await?;
        Ok(())
    }

    /// Invites a member to connect. `authorization` comes from the
    /// recipient's profile, see [`Profile::connection_authorization`].
    ///
    /// [`Profile::connection_authorization`]: crate::model::Profile::connection_authorization
    async fn send_invitation(
        &self,
        subject: &str,
        body: &str,
        recipient: ProfileId,
        authorization: &ConnectionAuthorization,
    ) -> ClientResult<()> {
        let recipients = vec![json!({
            "person": { "_path": format!("/people/{}", recipient.id()) }
        })];
        let mut item = mailbox_item(recipients, subject, body);
        item["item-content"] = invitation_request(Some(authorization));

        let url = format!("{ME}/mailbox");
        self.api_post(&url, &item).await?;
        Ok(())
    }

    /// Invites someone who may not be a member yet, by email.
    async fn send_email_invitation(
        &self,
        subject: &str,
        body: &str,
        email: &str,
        first_name: &str,
        last_name: &str,
    ) -> ClientResult<()> {
        let recipients = vec![json!({
            "person": {
                "_path": format!("/people/email={email}"),
                "first-name": first_name,
                "last-name": last_name,
            }
        })];
        let mut item = mailbox_item(recipients, subject, body);
        item["item-content"] = invitation_request(None);

        let url = format!("{ME}/mailbox");
        self.api_post(&url, &item).await?;
        Ok(())
    }
}
