pub mod tab_list;
mod theme;

use crate::app::state::AppState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

/// Render the tab list off-screen and return its rows as plain text.
pub fn render_lines(state: &AppState, width: u16) -> Vec<String> {
    let items = tab_list::tab_items(state).len().max(1);
    let rows = u16::try_from(items).unwrap_or(u16::MAX).saturating_add(2);
    let area = Rect::new(0, 0, width, rows);
    let mut buf = Buffer::empty(area);
    tab_list::tab_list(state, width).render(area, &mut buf);

    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_renders_placeholder() {
        let lines = render_lines(&AppState::new(), 20);
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("No servers"));
    }

    #[test]
    fn test_one_row_per_tab_plus_borders() {
        use crate::app::creators::{connect, join};
        use crate::app::event::ConnectOptions;
        use crate::app::handler::handle_event;

        let mut state = AppState::new();
        handle_event(&mut state, connect("srv", "nick", ConnectOptions::default()));
        handle_event(&mut state, join(vec!["#a".into(), "#b".into()], "srv"));

        let lines = render_lines(&state, 20);
        assert_eq!(lines.len(), 5);
        assert!(lines[3].contains("#b"));
    }
}
