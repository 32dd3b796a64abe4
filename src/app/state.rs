use crate::app::channels::ChannelStore;
use crate::app::servers::ServerStore;
use crate::app::tab::TabState;

/// Root snapshot handed to selectors and the UI.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub servers: ServerStore,
    pub channels: ChannelStore,
    pub tab: TabState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_line(&self) -> String {
        let mut s = format!(
            "Servers: {}/{}",
            self.servers.connected_count(),
            self.servers.len()
        );
        if let Some(tab) = &self.tab.selected {
            match &tab.name {
                Some(channel) => s.push_str(&format!(" | {} {}", tab.server, channel)),
                None => s.push_str(&format!(" | {}", tab.server)),
            }
        }
        s
    }
}
