use anyhow::Result;
use octocrab::service::middleware::retry::RetryConfig;
use secrecy::{ExposeSecret, SecretString};

/// Every GitHub call is made exactly once; a failure surfaces to the caller.
pub(crate) fn build_octocrab(
    github_token: &SecretString,
    base_uri: Option<&str>,
) -> Result<octocrab::Octocrab> {
    let mut builder = octocrab::Octocrab::builder();
    builder.add_retry_config(RetryConfig::None);
    let builder = builder
        // https://github.com/XAMPPRocky/octocrab/issues/594
        .personal_token(github_token.expose_secret().to_owned());
    let builder = match base_uri {
        Some(uri) => builder.base_uri(uri.to_owned())?,
        None => builder,
    };
    Ok(builder.build()?)
}
