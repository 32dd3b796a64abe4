use crate::app::event::Event;
use crate::app::servers::ServerStore;

/// Joined channels per host, in join order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChannelStore {
    channels: im::HashMap<String, im::Vector<String>>,
}

impl ChannelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, host: &str) -> impl Iterator<Item = &String> {
        self.channels.get(host).into_iter().flat_map(|list| list.iter())
    }

    pub fn contains(&self, host: &str, channel: &str) -> bool {
        self.canonical(host, channel).is_some()
    }

    /// The channel name as it was joined, matching `channel` case-insensitively.
    pub fn canonical(&self, host: &str, channel: &str) -> Option<&String> {
        self.get(host).find(|ch| ch.eq_ignore_ascii_case(channel))
    }
}

/// `servers` is the server snapshot after the same event was applied.
pub fn reduce(state: &ChannelStore, event: &Event, servers: &ServerStore) -> ChannelStore {
    let mut next = state.clone();

    match event {
        Event::Join { server, channels } => {
            if !servers.contains(server) {
                return next;
            }
            for channel in channels {
                if !next.contains(server, channel) {
                    next.channels
                        .entry(server.clone())
                        .or_insert_with(im::Vector::new)
                        .push_back(channel.clone());
                }
            }
        }
        Event::Part { server, channels } => {
            if let Some(list) = next.channels.get_mut(server) {
                list.retain(|ch| !channels.iter().any(|p| p.eq_ignore_ascii_case(ch)));
            }
        }
        Event::Disconnect { server } => {
            next.channels.remove(server);
        }
        Event::SocketServers { .. } => {
            next.channels.retain(|host, _| servers.contains(host));
        }
        _ => {}
    }

    next
}
