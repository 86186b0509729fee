//! Send a text message to a Slack channel via `chat.postMessage`.

use super::{api::*, auth::SlackAccessToken, channel::ChannelId, error::SlackError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The server-assigned timestamp of a posted message, e.g.
/// `1694012345.000100`. It doubles as the message's identifier within its
/// channel, so it's the acknowledgment we surface to the operator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Timestamp(pub String);

/// Format without the surrounding newtype wrapper.
impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// <https://api.slack.com/methods/chat.postMessage#args>
#[derive(Serialize)]
struct MessageRequest<'a> {
    channel: &'a ChannelId,
    // May contain mrkdwn; it's passed along untouched.
    text: &'a str,
}

/// <https://api.slack.com/methods/chat.postMessage#examples>
#[derive(Deserialize)]
struct MessageResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "super::api::only_true")]
    ok: bool,
    ts: Timestamp,
}

impl SlackClient {
    /// Post a message in a channel, returning the timestamp Slack assigned
    /// to it.
    ///
    /// Exactly one request is issued; there's no retry. A failure is either
    /// [SlackError::APIRequestFailed], when no well-formed response came
    /// back at all, or [SlackError::APIResponseError], when Slack rejected
    /// the request with an error code.
    pub async fn post_message(
        &self,
        channel: &ChannelId,
        text: &str,
        token: &SlackAccessToken,
    ) -> Result<Timestamp, SlackError> {
        let res: APIResult<MessageResponse> = self
            .post("/chat.postMessage", token)
            .json(&MessageRequest { channel, text })
            .send()
            .await?
            .json()
            .await?;

        match res {
            APIResult::Ok(res) => Ok(res.ts),
            APIResult::Err(res) => Err(SlackError::APIResponseError(res.error)),
        }
    }
}
