use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use thiserror::Error;

use super::{Chat, PostMessage};

/// `error` codes meaning the token itself is no good.
const AUTH_ERRORS: [&str; 4] = [
    "invalid_auth",
    "not_authed",
    "account_inactive",
    "token_revoked",
];

#[derive(Debug, Error)]
pub(crate) enum SlackError {
    #[error("Slack request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Slack API error: {0}")]
    Api(String),

    #[error("rtm.connect returned no websocket url")]
    MissingUrl,

    #[error("Slack token is not a valid header value")]
    InvalidToken,
}

impl SlackError {
    pub(crate) fn is_auth_error(&self) -> bool {
        matches!(self, SlackError::Api(code) if AUTH_ERRORS.contains(&code.as_str()))
    }
}

#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

impl SlackResponse {
    fn check(self) -> Result<Self, SlackError> {
        if self.ok {
            Ok(self)
        } else {
            Err(SlackError::Api(
                self.error.unwrap_or_else(|| "unknown_error".to_owned()),
            ))
        }
    }
}

/// Slack Web API client authenticated with the bot token.
#[derive(Clone)]
pub(crate) struct SlackClient {
    http: reqwest::Client,
    api_base: String,
}

impl SlackClient {
    pub(crate) fn new(api_base: &str, token: &SecretString) -> Result<Self, SlackError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| SlackError::InvalidToken)?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        let http = reqwest::Client::builder()
            .user_agent(concat!("pr-bot/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_owned(),
        })
    }

    async fn call<B: serde::Serialize + ?Sized>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<SlackResponse, SlackError> {
        tracing::debug!("POST {method}");
        self.http
            .post(format!("{}/{method}", self.api_base))
            .json(body)
            .send()
            .await?
            .error_for_status()?
            .json::<SlackResponse>()
            .await?
            .check()
    }

    /// Start an RTM session, returning the websocket URL to connect to.
    pub(crate) async fn rtm_connect(&self) -> Result<String, SlackError> {
        self.call("rtm.connect", &serde_json::json!({}))
            .await?
            .url
            .filter(|url| !url.is_empty())
            .ok_or(SlackError::MissingUrl)
    }
}

impl Chat for SlackClient {
    async fn post_message(&self, message: &PostMessage) -> Result<(), SlackError> {
        self.call("chat.postMessage", message).await?;
        tracing::info!(
            "Posted {} attachment(s) to {}",
            message.attachments.len(),
            message.channel
        );
        Ok(())
    }
}
