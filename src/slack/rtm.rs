//! Keeps an RTM websocket open and feeds its events to the runner.

use std::time::Duration;

use anyhow::{Context, Result};
use futures::{channel::mpsc::Sender, SinkExt, StreamExt};
use serde_json::json;
use tokio_tungstenite::{connect_async, tungstenite::Message as WsMessage};

use super::SlackClient;
use crate::event::{Event, RtmFrame};

#[derive(Debug, Clone, Copy)]
struct Timing {
    reconnect_delay: Duration,
    ping_interval: Duration,
}

const TIMING: Timing = Timing {
    reconnect_delay: Duration::from_secs(5),
    ping_interval: Duration::from_secs(30),
};

/// Runs until the token is rejected or the receiving end is dropped.
/// Connection failures are retried here and never reach the runner.
pub(crate) async fn manage_connection(client: SlackClient, sender: Sender<Event>) {
    reconnect_loop(client, sender, TIMING).await;
}

async fn reconnect_loop(client: SlackClient, mut sender: Sender<Event>, timing: Timing) {
    loop {
        match client.rtm_connect().await {
            Ok(url) => match session(&url, &mut sender, timing.ping_interval).await {
                Ok(()) => tracing::info!("RTM session closed, reconnecting"),
                Err(error) => tracing::warn!("RTM session failed: {error:#}"),
            },
            Err(error) if error.is_auth_error() => {
                tracing::error!("rtm.connect rejected the token: {error}");
                if sender.send(Event::InvalidAuth).await.is_err() {
                    tracing::debug!("runner already gone");
                }
                return;
            }
            Err(error) => tracing::warn!("rtm.connect failed: {error}"),
        }
        if sender.is_closed() {
            return;
        }
        tokio::time::sleep(timing.reconnect_delay).await;
    }
}

async fn session(url: &str, sender: &mut Sender<Event>, ping_interval: Duration) -> Result<()> {
    let (stream, _response) = connect_async(url)
        .await
        .context("failed to connect RTM websocket")?;
    let (mut sink, mut source) = stream.split();
    tracing::debug!("RTM websocket open");

    let mut ping = tokio::time::interval(ping_interval);
    // the first tick completes immediately
    ping.tick().await;
    let mut ping_id = 0_u64;

    loop {
        tokio::select! {
            _ = ping.tick() => {
                ping_id += 1;
                let frame = json!({ "id": ping_id, "type": "ping" }).to_string();
                sink.send(WsMessage::Text(frame.into()))
                    .await
                    .context("failed to ping RTM websocket")?;
            }
            message = source.next() => {
                let Some(message) = message else {
                    return Ok(());
                };
                let message = message.context("failed reading RTM websocket")?;
                match parse_frame(message) {
                    Some(RtmFrame::Goodbye) => return Ok(()),
                    Some(frame) => {
                        if let Some(event) = frame.into_event() {
                            sender.send(event).await.context("runner stopped listening")?;
                        }
                    }
                    None => {}
                }
            }
        }
    }
}

fn parse_frame(message: WsMessage) -> Option<RtmFrame> {
    let text = match message {
        WsMessage::Text(text) => text.to_string(),
        WsMessage::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        WsMessage::Close(_) => return Some(RtmFrame::Goodbye),
        WsMessage::Ping(_) | WsMessage::Pong(_) | WsMessage::Frame(_) => return None,
    };
    match serde_json::from_str::<RtmFrame>(&text) {
        Ok(frame) => Some(frame),
        Err(error) => {
            // replies to our own pings and other untyped acks end up here
            tracing::debug!("skipping RTM frame {text}: {error}");
            None
        }
    }
}
