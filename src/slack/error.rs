use std::fmt;

/// Sum type representing every possible unexceptional fail state.
// `reqwest::Error`'s `Debug` rendering carries the URL and error chain but
// never request headers, so the token can't surface through it.
#[derive(Debug)]
pub enum SlackError {
    /// The exchange never completed: DNS resolution, the connection, TLS, a
    /// timeout, or an unreadable response body.
    APIRequestFailed(reqwest::Error),
    /// Slack received the request and rejected it, returning a
    /// machine-readable error code such as `invalid_auth` or
    /// `channel_not_found`.
    APIResponseError(String),
}

impl From<reqwest::Error> for SlackError {
    fn from(e: reqwest::Error) -> Self {
        SlackError::APIRequestFailed(e)
    }
}

// An API rejection renders as the bare error code; the operator line in
// `main` supplies the surrounding wording. `reqwest::Error`'s rendering never
// includes request headers, so the token can't leak through here.
impl fmt::Display for SlackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlackError::APIRequestFailed(e) => write!(f, "{}", e),
            SlackError::APIResponseError(e) => write!(f, "{}", e),
        }
    }
}
