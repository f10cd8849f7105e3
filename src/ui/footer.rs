//! Bottom bar: the keys that do something in the current state, and the version.

use crate::engine::{FetchState, ProfileState};
use crate::ui::theme::Palette;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `(key, action)` pairs, most useful first.
fn key_hints(state: &ProfileState) -> Vec<(&'static str, &'static str)> {
    let mut hints = vec![("Enter", "search"), ("Esc", "quit")];
    match &state.fetch {
        FetchState::Error(_) => hints.push(("Ctrl+R", "retry")),
        FetchState::Success { .. } => {
            hints.push(("Ctrl+S", "sort"));
            hints.push(("↑↓", "scroll"));
        }
        FetchState::Loading => {}
    }
    hints.push(("Ctrl+T", "theme"));
    hints
}

/// Hints for `state` with the version right-aligned in `width` columns.
///
/// Hints that would run into the version are dropped from the end.
pub fn footer_line(state: &ProfileState, palette: Palette, width: usize) -> Line<'static> {
    let key = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(palette.muted);
    let version = format!("v{} ", VERSION);
    let version_width = version.chars().count();
    let budget = width.saturating_sub(version_width);

    let mut spans = Vec::new();
    let mut used = 0;
    for (k, action) in key_hints(state) {
        // " key action " with chars, not bytes, for the arrows
        let cost = k.chars().count() + action.chars().count() + 3;
        if used + cost > budget {
            break;
        }
        spans.push(Span::raw(" "));
        spans.push(Span::styled(k, key));
        spans.push(Span::styled(format!(" {} ", action), label));
        used += cost;
    }
    spans.push(Span::raw(" ".repeat(budget - used)));
    spans.push(Span::styled(version, label));
    Line::from(spans)
}

pub fn widget(state: &ProfileState, area: Rect, palette: Palette) -> Paragraph<'static> {
    let inner_width = area.width.saturating_sub(2) as usize;
    Paragraph::new(footer_line(state, palette, inner_width)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border)),
    )
}
