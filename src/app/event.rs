use serde::{Deserialize, Serialize};

/// Store key for a server: the host part of the address the user connected to.
pub type Host = String;

/// Extra fields the connect form passes along with host and nick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectOptions {
    pub name: Option<String>,
    pub tls: bool,
    pub password: Option<String>,
    pub username: Option<String>,
    pub realname: Option<String>,
    pub channels: Vec<String>,
}

/// Connection status as reported by the socket bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusInfo {
    pub connected: bool,
    pub error: Option<String>,
}

/// One entry of a bulk `servers` sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: Host,
    #[serde(default)]
    pub name: Option<String>,
    pub nick: String,
    #[serde(default)]
    pub status: StatusInfo,
}

/// Everything the stores react to, whether it came from the user or the socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    Connect {
        host: Host,
        /// Address as typed, `host[:port]`.
        server: String,
        nick: String,
        #[serde(default)]
        options: ConnectOptions,
    },
    Disconnect {
        server: Host,
    },
    SetServerName {
        server: Host,
        name: String,
    },
    SetNick {
        server: Host,
        nick: String,
        #[serde(default)]
        editing: bool,
    },
    Join {
        server: Host,
        channels: Vec<String>,
    },
    Part {
        server: Host,
        channels: Vec<String>,
    },
    SelectTab {
        server: Host,
        #[serde(default)]
        name: Option<String>,
    },
    SocketServers {
        data: Vec<ServerInfo>,
    },
    SocketConnectionUpdate {
        server: Host,
        connected: bool,
        #[serde(default)]
        error: Option<String>,
    },
    SocketNick {
        server: Host,
        #[serde(rename = "oldNick")]
        old_nick: String,
        #[serde(rename = "newNick")]
        new_nick: String,
    },
    SocketNickFail {
        server: Host,
    },
}

impl Event {
    /// The host this event addresses, if it addresses a single one.
    pub fn server(&self) -> Option<&str> {
        match self {
            Event::Connect { host, .. } => Some(host),
            Event::Disconnect { server }
            | Event::SetServerName { server, .. }
            | Event::SetNick { server, .. }
            | Event::Join { server, .. }
            | Event::Part { server, .. }
            | Event::SelectTab { server, .. }
            | Event::SocketConnectionUpdate { server, .. }
            | Event::SocketNick { server, .. }
            | Event::SocketNickFail { server } => Some(server),
            Event::SocketServers { .. } => None,
        }
    }

    /// True for events delivered by the socket bridge rather than the user.
    pub fn from_socket(&self) -> bool {
        matches!(
            self,
            Event::SocketServers { .. }
                | Event::SocketConnectionUpdate { .. }
                | Event::SocketNick { .. }
                | Event::SocketNickFail { .. }
        )
    }

    /// Every value `kind()` can return, i.e. every serialized `type` tag.
    pub const KINDS: &'static [&'static str] = &[
        "CONNECT",
        "DISCONNECT",
        "SET_SERVER_NAME",
        "SET_NICK",
        "JOIN",
        "PART",
        "SELECT_TAB",
        "SOCKET_SERVERS",
        "SOCKET_CONNECTION_UPDATE",
        "SOCKET_NICK",
        "SOCKET_NICK_FAIL",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            Event::Connect { .. } => "CONNECT",
            Event::Disconnect { .. } => "DISCONNECT",
            Event::SetServerName { .. } => "SET_SERVER_NAME",
            Event::SetNick { .. } => "SET_NICK",
            Event::Join { .. } => "JOIN",
            Event::Part { .. } => "PART",
            Event::SelectTab { .. } => "SELECT_TAB",
            Event::SocketServers { .. } => "SOCKET_SERVERS",
            Event::SocketConnectionUpdate { .. } => "SOCKET_CONNECTION_UPDATE",
            Event::SocketNick { .. } => "SOCKET_NICK",
            Event::SocketNickFail { .. } => "SOCKET_NICK_FAIL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_tag_matches_kind() {
        let event = Event::SocketNick {
            server: "srv".into(),
            old_nick: "a".into(),
            new_nick: "b".into(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], event.kind());
        assert_eq!(value["oldNick"], "a");
        assert_eq!(value["newNick"], "b");
    }

    #[test]
    fn test_kinds_lists_every_tag() {
        let events = [
            Event::Disconnect {
                server: "srv".into(),
            },
            Event::SocketNickFail {
                server: "srv".into(),
            },
            Event::SelectTab {
                server: "srv".into(),
                name: None,
            },
        ];
        for event in &events {
            assert!(Event::KINDS.contains(&event.kind()));
        }
        assert_eq!(Event::KINDS.len(), 11);
    }

    #[test]
    fn test_set_nick_editing_defaults_to_false() {
        let event: Event =
            serde_json::from_str(r#"{"type":"SET_NICK","server":"srv","nick":"x"}"#).unwrap();
        assert_eq!(
            event,
            Event::SetNick {
                server: "srv".into(),
                nick: "x".into(),
                editing: false,
            }
        );
    }

    #[test]
    fn test_server_accessor() {
        let sync = Event::SocketServers { data: vec![] };
        assert_eq!(sync.server(), None);
        assert!(sync.from_socket());

        let part = Event::Part {
            server: "srv".into(),
            channels: vec!["#a".into()],
        };
        assert_eq!(part.server(), Some("srv"));
        assert!(!part.from_socket());
    }
}
