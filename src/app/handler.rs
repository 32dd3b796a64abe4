use crate::app::action::Action;
use crate::app::creators::is_valid_server_name;
use crate::app::event::Event;
use crate::app::state::AppState;
use crate::app::{channels, servers, tab};

/// Apply `event` to every store and return the socket messages it implies.
pub fn handle_event(state: &mut AppState, event: Event) -> Vec<Action> {
    let servers = servers::reduce(&state.servers, &event);
    let channels = channels::reduce(&state.channels, &event, &servers);
    let tab = tab::reduce(&state.tab, &event, &servers, &channels);

    match &event {
        Event::Connect { host, .. } if !state.servers.contains(host) => {
            tracing::info!(server = %host, "connecting");
        }
        Event::Disconnect { server } if state.servers.contains(server) => {
            tracing::info!(server = %server, "disconnected");
        }
        Event::SocketConnectionUpdate {
            server,
            connected,
            error,
        } => {
            tracing::debug!(server = %server, connected, error = ?error, "connection update");
        }
        Event::SocketServers { data } => {
            tracing::debug!(count = data.len(), "server list synced");
        }
        _ => {}
    }

    let actions = outbound(&servers, &event);

    state.servers = servers;
    state.channels = channels;
    state.tab = tab;

    actions
}

fn outbound(servers: &servers::ServerStore, event: &Event) -> Vec<Action> {
    match event {
        Event::Connect {
            server,
            nick,
            options,
            ..
        } => vec![Action::Connect {
            host: server.clone(),
            nick: nick.clone(),
            name: options.name.clone(),
            tls: options.tls,
            password: options.password.clone(),
            username: options.username.clone(),
            realname: options.realname.clone(),
            channels: options.channels.clone(),
        }],
        Event::Disconnect { server } => vec![Action::Quit {
            server: server.clone(),
        }],
        Event::SetServerName { server, name }
            if servers.contains(server) && is_valid_server_name(name) =>
        {
            vec![Action::SetServerName {
                server: server.clone(),
                name: name.trim().to_string(),
            }]
        }
        Event::SetNick {
            server,
            nick,
            editing: false,
        } if servers.contains(server) && !nick.is_empty() => vec![Action::Nick {
            server: server.clone(),
            new_nick: nick.clone(),
        }],
        Event::Join { server, channels } if servers.contains(server) && !channels.is_empty() => {
            vec![Action::Join {
                server: server.clone(),
                channels: channels.clone(),
            }]
        }
        Event::Part { server, channels } if servers.contains(server) && !channels.is_empty() => {
            vec![Action::Part {
                server: server.clone(),
                channels: channels.clone(),
            }]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::creators::{
        connect, connect_form, disconnect, join, part, set_nick, set_server_name,
    };
    use crate::app::event::ConnectOptions;

    fn connected(host: &str) -> AppState {
        let mut state = AppState::new();
        handle_event(&mut state, connect(host, "nick", ConnectOptions::default()));
        state
    }

    #[test]
    fn test_connect_emits_raw_address() {
        let mut state = AppState::new();
        let options = ConnectOptions {
            name: Some("Example".into()),
            tls: true,
            channels: vec!["#rust".into()],
            ..Default::default()
        };
        let actions = handle_event(
            &mut state,
            connect("irc.example.org:6697", "nick", options),
        );
        assert_eq!(
            actions,
            vec![Action::Connect {
                host: "irc.example.org:6697".into(),
                nick: "nick".into(),
                name: Some("Example".into()),
                tls: true,
                password: None,
                username: None,
                realname: None,
                channels: vec!["#rust".into()],
            }]
        );
        assert!(state.servers.contains("irc.example.org"));
    }

    #[test]
    fn test_connect_form_selects_new_server() {
        let mut state = AppState::new();
        let options = ConnectOptions {
            channels: vec!["#rust".into()],
            ..Default::default()
        };
        let mut actions = Vec::new();
        for event in connect_form("srv:6667", "nick", options) {
            actions.extend(handle_event(&mut state, event));
        }
        assert_eq!(actions.len(), 2);
        assert!(state.channels.contains("srv", "#rust"));
        assert!(state.tab.selected.as_ref().unwrap().is("srv", None));
        assert_eq!(state.status_line(), "Servers: 0/1 | srv");
    }

    #[test]
    fn test_nick_sent_only_when_committed() {
        let mut state = connected("srv");
        assert!(handle_event(&mut state, set_nick("nick2", "srv", true)).is_empty());
        assert!(handle_event(&mut state, set_nick("", "srv", false)).is_empty());
        assert_eq!(
            handle_event(&mut state, set_nick("nick3", "srv", false)),
            vec![Action::Nick {
                server: "srv".into(),
                new_nick: "nick3".into(),
            }]
        );
    }

    #[test]
    fn test_server_name_validation() {
        let mut state = connected("srv");
        assert!(handle_event(&mut state, set_server_name("  ", "srv")).is_empty());
        assert!(handle_event(&mut state, set_server_name("pie", "nowhere")).is_empty());
        assert_eq!(
            handle_event(&mut state, set_server_name(" pie ", "srv")),
            vec![Action::SetServerName {
                server: "srv".into(),
                name: "pie".into(),
            }]
        );
    }

    #[test]
    fn test_disconnect_sends_quit_and_drops_state() {
        let mut state = connected("srv");
        handle_event(&mut state, join(vec!["#a".into()], "srv"));
        let actions = handle_event(&mut state, disconnect("srv"));
        assert_eq!(
            actions,
            vec![Action::Quit {
                server: "srv".into()
            }]
        );
        assert!(state.servers.is_empty());
        assert!(!state.channels.contains("srv", "#a"));
    }

    #[test]
    fn test_unknown_host_commands_stay_local() {
        let mut state = connected("srv");
        assert!(handle_event(&mut state, set_nick("nick2", "nowhere", false)).is_empty());
        assert!(handle_event(&mut state, join(vec!["#a".into()], "nowhere")).is_empty());
        assert!(handle_event(&mut state, part(vec!["#a".into()], "nowhere")).is_empty());
        assert!(!state.channels.contains("nowhere", "#a"));

        assert_eq!(
            handle_event(&mut state, join(vec!["#a".into()], "srv")),
            vec![Action::Join {
                server: "srv".into(),
                channels: vec!["#a".into()],
            }]
        );
    }

    #[test]
    fn test_socket_events_never_emit() {
        let mut state = connected("srv");
        let actions = handle_event(
            &mut state,
            Event::SocketNick {
                server: "srv".into(),
                old_nick: "nick".into(),
                new_nick: "nick2".into(),
            },
        );
        assert!(actions.is_empty());
        assert_eq!(servers::get_nick(&state.servers, "srv"), Some("nick2"));
    }
}
