//! Constructors for the events a user can trigger.

use crate::app::event::{ConnectOptions, Event, Host};

const MAX_SERVER_NAME_LEN: usize = 255;

/// Derive the store key from an address typed as `host[:port]`.
///
/// `[::1]:6697` keys on `::1`; a leading colon is treated as part of the host.
pub fn host_of(server: &str) -> Host {
    if let Some(rest) = server.strip_prefix('[') {
        if let Some(end) = rest.find(']') {
            return rest[..end].to_string();
        }
    }
    match server.find(':') {
        Some(i) if i > 0 => server[..i].to_string(),
        _ => server.to_string(),
    }
}

pub fn connect(server: &str, nick: &str, options: ConnectOptions) -> Event {
    Event::Connect {
        host: host_of(server),
        server: server.to_string(),
        nick: nick.to_string(),
        options,
    }
}

/// Events emitted when the connect form is submitted: connect, join the
/// requested channels, then focus the new server.
pub fn connect_form(server: &str, nick: &str, options: ConnectOptions) -> Vec<Event> {
    let host = host_of(server);
    let channels = options.channels.clone();
    let mut events = vec![connect(server, nick, options)];
    if !channels.is_empty() {
        events.push(join(channels, &host));
    }
    events.push(select(&host, None));
    events
}

pub fn disconnect(server: &str) -> Event {
    Event::Disconnect {
        server: server.to_string(),
    }
}

pub fn set_server_name(name: &str, server: &str) -> Event {
    Event::SetServerName {
        server: server.to_string(),
        name: name.to_string(),
    }
}

pub fn is_valid_server_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name.chars().count() <= MAX_SERVER_NAME_LEN
}

/// Nicks never contain whitespace, so it is stripped before the event is built.
pub fn set_nick(nick: &str, server: &str, editing: bool) -> Event {
    let nick: String = nick.chars().filter(|c| !c.is_whitespace()).collect();
    Event::SetNick {
        server: server.to_string(),
        nick,
        editing,
    }
}

pub fn join(channels: Vec<String>, server: &str) -> Event {
    Event::Join {
        server: server.to_string(),
        channels,
    }
}

pub fn part(channels: Vec<String>, server: &str) -> Event {
    Event::Part {
        server: server.to_string(),
        channels,
    }
}

pub fn select(server: &str, name: Option<&str>) -> Event {
    Event::SelectTab {
        server: server.to_string(),
        name: name.map(str::to_string),
    }
}
