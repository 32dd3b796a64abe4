//! Server store: host → server record, folded from user and socket events.
//!
//! The store is a persistent map (`im`), so every reduction yields a new
//! snapshot that shares structure with the previous one. Events that address
//! a host the store does not know about leave the snapshot untouched.

use crate::app::event::{Event, ServerInfo};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerStatus {
    pub connected: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerRecord {
    pub name: String,
    pub nick: String,
    /// Nick proposed locally and not yet confirmed by the server.
    pub edited_nick: Option<String>,
    pub status: ServerStatus,
}

impl ServerRecord {
    pub fn new(name: impl Into<String>, nick: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nick: nick.into(),
            edited_nick: None,
            status: ServerStatus::default(),
        }
    }

    fn from_info(info: &ServerInfo) -> Self {
        Self {
            name: info.name.clone().unwrap_or_else(|| info.host.clone()),
            nick: info.nick.clone(),
            edited_nick: None,
            status: ServerStatus {
                connected: info.status.connected,
                error: info.status.error.clone(),
            },
        }
    }
}

/// Insertion-ordered map of host → record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServerStore {
    order: im::Vector<String>,
    records: im::HashMap<String, ServerRecord>,
}

impl ServerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, host: &str) -> bool {
        self.records.contains_key(host)
    }

    pub fn get(&self, host: &str) -> Option<&ServerRecord> {
        self.records.get(host)
    }

    pub fn hosts(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ServerRecord)> {
        self.order
            .iter()
            .filter_map(move |host| self.records.get(host).map(|srv| (host, srv)))
    }

    pub fn connected_count(&self) -> usize {
        self.records.values().filter(|srv| srv.status.connected).count()
    }

    fn insert(&mut self, host: String, record: ServerRecord) {
        if !self.records.contains_key(&host) {
            self.order.push_back(host.clone());
        }
        self.records.insert(host, record);
    }

    fn remove(&mut self, host: &str) -> Option<ServerRecord> {
        let record = self.records.remove(host)?;
        if let Some(idx) = self.order.iter().position(|h| h == host) {
            self.order.remove(idx);
        }
        Some(record)
    }

    /// Applies `f` to the record for `host`. Returns false when the host is unknown.
    fn update<F>(&mut self, host: &str, f: F) -> bool
    where
        F: FnOnce(&mut ServerRecord),
    {
        match self.records.get_mut(host) {
            Some(record) => {
                f(record);
                true
            }
            None => false,
        }
    }
}

impl FromIterator<(String, ServerRecord)> for ServerStore {
    fn from_iter<I: IntoIterator<Item = (String, ServerRecord)>>(iter: I) -> Self {
        let mut store = ServerStore::new();
        for (host, record) in iter {
            store.insert(host, record);
        }
        store
    }
}

impl Serialize for ServerStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (host, record) in self.iter() {
            map.serialize_entry(host, record)?;
        }
        map.end()
    }
}

/// Folds one event into the store and returns the next snapshot.
pub fn reduce(state: &ServerStore, event: &Event) -> ServerStore {
    let mut next = state.clone();

    let known = match event {
        Event::Connect {
            host, nick, options, ..
        } => {
            if !next.contains(host) {
                let name = options.name.clone().unwrap_or_else(|| host.clone());
                next.insert(host.clone(), ServerRecord::new(name, nick.clone()));
            }
            true
        }
        Event::Disconnect { server } => next.remove(server).is_some(),
        Event::SetServerName { server, name } => {
            next.update(server, |srv| srv.name = name.clone())
        }
        Event::SetNick {
            server,
            nick,
            editing,
        } => next.update(server, |srv| {
            if *editing {
                srv.edited_nick = Some(nick.clone());
            } else if nick.is_empty() {
                srv.edited_nick = None;
            } else {
                srv.nick = nick.clone();
                srv.edited_nick = None;
            }
        }),
        Event::SocketNick {
            server, new_nick, ..
        } => next.update(server, |srv| {
            srv.nick = new_nick.clone();
            srv.edited_nick = None;
        }),
        Event::SocketNickFail { server } => {
            next.update(server, |srv| srv.edited_nick = None)
        }
        Event::SocketServers { data } => {
            // Pending edits do not survive a resync.
            next = data
                .iter()
                .map(|info| (info.host.clone(), ServerRecord::from_info(info)))
                .collect();
            true
        }
        Event::SocketConnectionUpdate {
            server,
            connected,
            error,
        } => next.update(server, |srv| {
            srv.status.connected = *connected;
            srv.status.error = error.clone();
        }),
        Event::Join { .. } | Event::Part { .. } | Event::SelectTab { .. } => true,
    };

    if !known {
        tracing::debug!(
            kind = event.kind(),
            server = event.server().unwrap_or_default(),
            "ignoring event for unknown server"
        );
    }

    next
}

pub fn get_nick<'a>(store: &'a ServerStore, host: &str) -> Option<&'a str> {
    store.get(host).map(|srv| srv.nick.as_str())
}

pub fn get_server_name<'a>(store: &'a ServerStore, host: &str) -> Option<&'a str> {
    store.get(host).map(|srv| srv.name.as_str())
}

pub fn is_connected(store: &ServerStore, host: &str) -> bool {
    store.get(host).map(|srv| srv.status.connected).unwrap_or(false)
}
