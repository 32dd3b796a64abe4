use crate::app::channels::ChannelStore;
use crate::app::event::{Event, Host};
use crate::app::servers::ServerStore;
use serde::Serialize;

/// A selectable tab: a server's status tab (`name == None`) or one of its channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    pub server: Host,
    pub name: Option<String>,
}

impl Tab {
    pub fn is(&self, server: &str, name: Option<&str>) -> bool {
        self.server == server && self.name.as_deref() == name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TabState {
    pub selected: Option<Tab>,
}

/// `servers` and `channels` are the snapshots after the same event was applied.
pub fn reduce(
    state: &TabState,
    event: &Event,
    servers: &ServerStore,
    channels: &ChannelStore,
) -> TabState {
    let mut next = state.clone();

    if let Event::SelectTab { server, name } = event {
        let target = match name {
            Some(channel) => channels
                .canonical(server, channel)
                .map(|ch| Some(ch.clone())),
            None if servers.contains(server) => Some(None),
            None => None,
        };
        if let Some(name) = target {
            next.selected = Some(Tab {
                server: server.clone(),
                name,
            });
        }
        return next;
    }

    // Fall back when the selected tab went away.
    if let Some(tab) = next.selected.take() {
        next.selected = if !servers.contains(&tab.server) {
            None
        } else if let Some(channel) = tab.name.as_deref() {
            if channels.contains(&tab.server, channel) {
                Some(tab)
            } else {
                Some(Tab {
                    server: tab.server,
                    name: None,
                })
            }
        } else {
            Some(tab)
        };
    }

    next
}
