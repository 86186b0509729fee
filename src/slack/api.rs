//! Type definitions and helpers for the Slack web API.

use super::auth::{to_auth_header_val, SlackAccessToken};
use serde::de::{Deserializer, Error};
use serde::Deserialize;

/// The base URL of the Slack API.
pub const API_BASE: &str = "https://slack.com/api";

/// A reusable client that holds a connection pool internally, as per
/// [reqwest::Client], alongside the API base URL.
//
// Carrying the base URL rather than hardcoding it lets tests aim the client
// at a local mock server.
pub struct SlackClient {
    base_url: String,
    client: reqwest::Client,
}

impl SlackClient {
    pub fn new(base_url: String) -> Self {
        SlackClient {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Create a POST request to any Slack API endpoint, handling
    /// authentication.
    pub(super) fn post<T: ToString>(
        &self,
        path: T,
        token: &SlackAccessToken,
    ) -> reqwest::RequestBuilder {
        self.client
            .post(self.base_url.to_owned() + &path.to_string())
            .header(reqwest::header::AUTHORIZATION, to_auth_header_val(token))
    }
}

/// Slack's API returns a common "untagged" response, representing whether a
/// request was successful.
///
/// ```json
/// {
///     "ok": true,
///     "ts": "1694012345.000100"
/// }
/// ```
///
/// ```json
/// {
///     "ok": false,
///     "error": "invalid_auth"
/// }
/// ```
#[derive(Deserialize)]
#[serde(untagged)]
pub enum APIResult<T> {
    Ok(T),
    Err(ErrorResponse),
}

/// The universal response in case of an unsuccessful request.
// The `ok` field is guarded here, and should be guarded on success responses
// too, so that the untagged `APIResult` can't pick the wrong arm when the
// two payloads share a shape.
//
// Ideally we'd be able to use `ok` as a tag, rather than defining `APIResult`
// as untagged. See:
//   <https://github.com/serde-rs/serde/issues/745#issuecomment-294314786>
#[derive(Deserialize)]
pub struct ErrorResponse {
    #[allow(dead_code)]
    #[serde(deserialize_with = "only_false")]
    ok: bool,
    pub error: String,
}

/// Reject deserialization unless the boolean is `true`.
pub(super) fn only_true<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b {
            Ok(b)
        } else {
            Err(Error::custom("invalid bool: false"))
        }
    })
}

/// Reject deserialization unless the boolean is `false`.
fn only_false<'a, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'a>,
{
    bool::deserialize(deserializer).and_then(|b| {
        if b {
            Err(Error::custom("invalid bool: true"))
        } else {
            Ok(b)
        }
    })
}
