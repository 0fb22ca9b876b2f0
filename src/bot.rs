use std::future::Future;

use anyhow::Result;
use futures::channel::mpsc::{channel, Receiver};

use crate::cli::{build_octocrab, Cli};
use crate::event::Event;
use crate::github::{GitHubApi, OctocrabGitHub, RepositoryRef};
use crate::slack::{rtm, Chat, SlackClient};
use crate::utils::resolve_secret;

mod runner;

pub(crate) use runner::Runner;

/// Connect to Slack and answer commands until a fatal error or a shutdown signal.
pub(crate) async fn serve(cli: Cli) -> Result<()> {
    let slack_token = resolve_secret(cli.slack_token, "slack_token")?;
    let github_token = resolve_secret(cli.github_token, "github_token")?;
    let repo = RepositoryRef::new(cli.user, cli.repo);

    let slack = SlackClient::new(&cli.slack_api_base, &slack_token)?;
    let github = OctocrabGitHub::new(build_octocrab(
        &github_token,
        cli.github_api_base.as_deref(),
    )?);
    std::mem::drop((slack_token, github_token));

    let (sender, receiver) = channel::<Event>(32);
    tokio::spawn(rtm::manage_connection(slack.clone(), sender));
    tracing::info!("Listing open {} of {repo}", cli.source);

    let runner = Runner::new(slack, github, repo, cli.source);
    run_until(&runner, receiver, shutdown_signal()).await
}

/// A resolved `shutdown` is a clean exit; the runner only ever stops with an error.
async fn run_until<C: Chat, G: GitHubApi>(
    runner: &Runner<C, G>,
    receiver: Receiver<Event>,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    tokio::select! {
        result = runner.run(receiver) => Ok(result?),
        () = shutdown => {
            tracing::info!("Shutdown requested");
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = tokio::signal::ctrl_c().await {
            tracing::warn!("Cannot listen for ctrl-c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::warn!("Cannot listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
