//! Slack channel identifiers.

use serde::Serialize;
use std::fmt;

/// The underlying ID of a channel, e.g. `C090YG3PXHC`. Slack's API addresses
/// conversations by ID rather than by display name; the ID can be found in
/// the UI by copying a link to the channel.
///
/// The contents are opaque to us and forwarded to the API verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChannelId(pub String);

/// Format without the surrounding newtype wrapper.
///
/// ```
/// let x = ChannelId("C090YG3PXHC".into());
/// assert_eq!(format!("{}", x), "C090YG3PXHC");
/// ```
impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
