//! Socket bridge plumbing: frame codec and the line reader feeding the event loop.

pub mod codec;

use crate::app::event::Event;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug)]
pub enum BridgeEvent {
    /// A decoded frame, ready for the stores.
    Frame(Event),
    /// The input side closed; no more frames will arrive.
    Closed,
}

/// Read JSON-lines frames from `reader` until EOF, forwarding decoded events.
/// Frames that fail to decode are logged and skipped.
pub fn spawn_reader<R>(reader: R, event_tx: mpsc::UnboundedSender<BridgeEvent>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match codec::decode_frame(&line) {
                        Ok(event) => {
                            if event_tx.send(BridgeEvent::Frame(event)).is_err() {
                                break;
                            }
                        }
                        Err(e) => tracing::warn!(error = %e, "dropping socket frame"),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    tracing::warn!(error = %e, "socket input failed");
                    break;
                }
            }
        }
        let _ = event_tx.send(BridgeEvent::Closed);
    })
}
