//! JSON framing between the socket bridge and the stores.
//!
//! Inbound frames look like `{"type": "nick", "data": {...}}`. Lowercase kinds
//! are socket notifications; uppercase kinds are store events passed through
//! verbatim (`{"type": "SET_NICK", "server": ..., ...}`). `CONNECT` frames
//! carry only the typed address; the store key is always derived from it.

use crate::app::action::Action;
use crate::app::creators;
use crate::app::event::{ConnectOptions, Event, Host, ServerInfo};
use crate::app::servers::ServerStore;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("malformed frame: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("frame has no type")]
    MissingType,
    #[error("unknown frame type `{0}`")]
    UnknownKind(String),
}

#[derive(Deserialize)]
struct ConnectionUpdate {
    server: Host,
    connected: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NickChange {
    server: Host,
    #[serde(default)]
    old_nick: String,
    new_nick: String,
}

#[derive(Deserialize)]
struct NickFail {
    server: Host,
}

/// `host` is not read: a client-chosen key could disagree with the address.
#[derive(Deserialize)]
struct ConnectFrame {
    server: String,
    nick: String,
    #[serde(default)]
    options: ConnectOptions,
}

pub fn decode_frame(line: &str) -> Result<Event, BridgeError> {
    let mut value: Value = serde_json::from_str(line)?;
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .ok_or(BridgeError::MissingType)?
        .to_string();
    let data = value.get_mut("data").map(Value::take).unwrap_or(Value::Null);

    let event = match kind.as_str() {
        "servers" => Event::SocketServers {
            data: serde_json::from_value::<Vec<ServerInfo>>(data)?,
        },
        "connection_update" => {
            let update: ConnectionUpdate = serde_json::from_value(data)?;
            Event::SocketConnectionUpdate {
                server: update.server,
                connected: update.connected,
                error: update.error,
            }
        }
        "nick" => {
            let change: NickChange = serde_json::from_value(data)?;
            Event::SocketNick {
                server: change.server,
                old_nick: change.old_nick,
                new_nick: change.new_nick,
            }
        }
        "nick_fail" => {
            let fail: NickFail = serde_json::from_value(data)?;
            Event::SocketNickFail {
                server: fail.server,
            }
        }
        "CONNECT" => {
            let frame: ConnectFrame = serde_json::from_value(value)?;
            creators::connect(&frame.server, &frame.nick, frame.options)
        }
        k if Event::KINDS.contains(&k) => serde_json::from_value::<Event>(value)?,
        _ => return Err(BridgeError::UnknownKind(kind)),
    };

    Ok(event)
}

pub fn encode_action(action: &Action) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(action)?)
}

pub fn encode_snapshot(servers: &ServerStore) -> Result<String, BridgeError> {
    Ok(serde_json::to_string(&serde_json::json!({
        "type": "snapshot",
        "data": servers,
    }))?)
}
