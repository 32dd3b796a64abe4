//! Tab list: one entry per server followed by its channels.

use crate::app::creators;
use crate::app::event::{Event, Host};
use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem};
use unicode_width::UnicodeWidthChar;

const SERVER_CONNECTED: &str = " ◆ ";
const SERVER_DISCONNECTED: &str = " ◈ ";
const CHANNEL_INDENT: &str = "   ";

/// View state for a single tab. Holds no state of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabListItem {
    pub server: Host,
    /// Channel name; `None` for the server tab.
    pub target: Option<String>,
    pub content: String,
    pub selected: bool,
    pub connected: bool,
}

impl TabListItem {
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.target.is_none() {
            classes.push("tab-server");
            classes.push(if self.connected { "success" } else { "error" });
        }
        if self.selected {
            classes.push("selected");
        }
        classes
    }

    /// The event a click on this tab dispatches.
    pub fn select_event(&self) -> Event {
        creators::select(&self.server, self.target.as_deref())
    }

    fn to_list_item(&self, width: u16) -> ListItem<'static> {
        let (prefix, style) = match &self.target {
            None if self.connected => (SERVER_CONNECTED, Theme::server_connected()),
            None => (SERVER_DISCONNECTED, Theme::server_disconnected()),
            Some(_) => (CHANNEL_INDENT, Theme::channel_normal()),
        };
        let style = if self.selected {
            style.patch(Theme::selected())
        } else {
            style
        };
        let room = (width as usize).saturating_sub(prefix.chars().count());
        ListItem::new(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(truncate_to_width(&self.content, room), style),
        ]))
    }
}

/// Derive the tab list from a snapshot, servers in store order.
pub fn tab_items(state: &AppState) -> Vec<TabListItem> {
    let selected = state.tab.selected.as_ref();
    let mut items = Vec::new();

    for (host, srv) in state.servers.iter() {
        items.push(TabListItem {
            server: host.clone(),
            target: None,
            content: srv.name.clone(),
            selected: selected.is_some_and(|tab| tab.is(host, None)),
            connected: srv.status.connected,
        });
        for channel in state.channels.get(host) {
            items.push(TabListItem {
                server: host.clone(),
                target: Some(channel.clone()),
                content: channel.clone(),
                selected: selected.is_some_and(|tab| tab.is(host, Some(channel.as_str()))),
                connected: srv.status.connected,
            });
        }
    }

    items
}

/// Build the bordered list widget for an area `width` columns wide.
pub fn tab_list(state: &AppState, width: u16) -> List<'static> {
    let inner = width.saturating_sub(2);
    let mut items: Vec<ListItem> = tab_items(state)
        .iter()
        .map(|item| item.to_list_item(inner))
        .collect();

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(" No servers", Theme::muted())));
    }

    let block = Block::default()
        .title(" Tabs ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    List::new(items).block(block)
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    frame.render_widget(tab_list(state, area.width), area);
}

fn truncate_to_width(s: &str, max: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::creators::{connect, join, select};
    use crate::app::event::ConnectOptions;
    use crate::app::handler::handle_event;
    use ratatui::backend::TestBackend;

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        handle_event(
            &mut state,
            connect("irc.example.org:6697", "nick", ConnectOptions::default()),
        );
        handle_event(
            &mut state,
            join(vec!["#rust".into(), "#irc".into()], "irc.example.org"),
        );
        handle_event(
            &mut state,
            connect(
                "10.0.0.1",
                "nick",
                ConnectOptions {
                    name: Some("home".into()),
                    ..Default::default()
                },
            ),
        );
        handle_event(
            &mut state,
            Event::SocketConnectionUpdate {
                server: "10.0.0.1".into(),
                connected: true,
                error: None,
            },
        );
        handle_event(&mut state, select("irc.example.org", Some("#irc")));
        state
    }

    #[test]
    fn test_classes() {
        let mut item = TabListItem {
            server: "srv".into(),
            target: None,
            content: "srv".into(),
            selected: false,
            connected: true,
        };
        assert_eq!(item.classes(), vec!["tab-server", "success"]);

        item.connected = false;
        item.selected = true;
        assert_eq!(item.classes(), vec!["tab-server", "error", "selected"]);

        item.target = Some("#rust".into());
        assert_eq!(item.classes(), vec!["selected"]);
    }

    #[test]
    fn test_tab_items_order_and_selection() {
        let items = tab_items(&sample_state());
        let contents: Vec<_> = items.iter().map(|i| i.content.as_str()).collect();
        assert_eq!(contents, vec!["irc.example.org", "#rust", "#irc", "home"]);

        let selected: Vec<_> = items.iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].target.as_deref(), Some("#irc"));

        assert!(!items[0].connected);
        assert!(items[3].connected);
    }

    #[test]
    fn test_selection_ignores_channel_case() {
        let mut state = sample_state();
        handle_event(&mut state, select("irc.example.org", Some("#RUST")));

        let items = tab_items(&state);
        let selected: Vec<_> = items.iter().filter(|i| i.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].target.as_deref(), Some("#rust"));
    }

    #[test]
    fn test_click_selects_tab() {
        let mut state = sample_state();
        let items = tab_items(&state);
        handle_event(&mut state, items[3].select_event());
        assert!(state.tab.selected.as_ref().unwrap().is("10.0.0.1", None));
    }

    #[test]
    fn test_render_tab_list() {
        let state = sample_state();
        let backend = TestBackend::new(24, 6);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, f.area(), &state)).unwrap();

        let buffer = terminal.backend().buffer();
        let rows: Vec<String> = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect();

        assert!(rows[0].contains("Tabs"));
        assert!(rows[1].contains("◈ irc.example.org"));
        assert!(rows[2].contains("#rust"));
        assert!(rows[4].contains("◆ home"));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("longername", 5), "long…");
        assert_eq!(truncate_to_width("日本語", 4), "日…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
