use crate::engine::{FetchState, ProfileState};
use crate::ui::theme::Palette;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &ProfileState, palette: Palette) -> Paragraph<'static> {
        let text_style = Style::default().fg(palette.text);
        let separator_style = Style::default().fg(palette.muted);
        let (status, status_color) = match &state.fetch {
            FetchState::Loading if !state.has_searched() => ("○ Idle", palette.muted),
            FetchState::Loading => ("◌ Loading", palette.accent),
            FetchState::Success { .. } => ("● Ready", palette.accent),
            FetchState::Error(_) => ("● Error", palette.error),
        };
        let theme = if state.dark_theme { "Dark" } else { "Light" };
        let line = Line::from(vec![
            Span::styled("  GitHub Profiles", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, Style::default().fg(status_color)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Sort: {}", state.sort.label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Theme: {}", theme), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
