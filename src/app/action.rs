use crate::app::event::Host;
use serde::{Deserialize, Serialize};

/// Messages sent to the socket bridge as a side effect of user events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Action {
    Connect {
        /// Address as typed, `host[:port]`.
        host: String,
        nick: String,
        name: Option<String>,
        tls: bool,
        password: Option<String>,
        username: Option<String>,
        realname: Option<String>,
        channels: Vec<String>,
    },
    Quit {
        server: Host,
    },
    SetServerName {
        server: Host,
        name: String,
    },
    Nick {
        server: Host,
        #[serde(rename = "newNick")]
        new_nick: String,
    },
    Join {
        server: Host,
        channels: Vec<String>,
    },
    Part {
        server: Host,
        channels: Vec<String>,
    },
}
