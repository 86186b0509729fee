//! Supports posting a plain text message to a Slack channel.
//!
//! The structure is intentionally a little generalised: the API envelope and
//! authentication helpers would serve any other web API method, though only
//! `chat.postMessage` is wired up.
//!
//! See [message].

pub mod api;
pub mod auth;
pub mod channel;
pub mod error;
pub mod message;
