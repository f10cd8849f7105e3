use crate::engine::{FetchState, ProfileState};
use crate::model::Profile;
use crate::ui::app::App;
use crate::ui::footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::Palette;
use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let state = app.state();
    let palette = Palette::for_theme(state.dark_theme);
    let area = frame.area();
    let regions = layout_regions(area);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    frame.render_widget(Header::new().widget(state, palette), regions.header);

    let search = Paragraph::new(state.query.clone())
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .title(" Username ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(search, regions.search);
    if regions.search.width > 2 && regions.search.height > 2 {
        let typed = state.query.chars().count() as u16;
        let x = regions.search.x + 1 + typed.min(regions.search.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(x, regions.search.y + 1));
    }

    let lines = body_lines(state, palette);
    let max_scroll = (lines.len() as u16).saturating_sub(1);
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll().min(max_scroll), 0))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::RIGHT)
                .border_style(Style::default().fg(palette.border)),
        );
    frame.render_widget(body, regions.body);

    frame.render_widget(footer::widget(state, regions.footer, palette), regions.footer);
}

/// Body content for `state`, one entry per line before wrapping.
pub fn body_lines(state: &ProfileState, palette: Palette) -> Vec<Line<'static>> {
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);

    match &state.fetch {
        FetchState::Loading => match &state.last_identifier {
            None => vec![
                Line::from(""),
                Line::styled(" Type a GitHub username and press Enter.", muted),
            ],
            Some(identifier) => vec![
                Line::from(""),
                Line::styled(format!(" Loading {}...", identifier), text),
            ],
        },
        FetchState::Error(failure) => vec![
            Line::from(""),
            Line::styled(
                format!(" {}", failure.kind.user_message()),
                Style::default()
                    .fg(palette.error)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(format!(" {}", failure.message), muted),
            Line::from(""),
            Line::styled(" Press Ctrl+R to retry.", muted),
        ],
        FetchState::Success { profile, .. } => {
            let mut lines = profile_lines(profile, palette);
            let repositories = state.visible_repositories().unwrap_or_default();
            lines.push(Line::from(""));
            lines.push(Line::styled(
                format!(
                    " Repositories ({}) by {}",
                    repositories.len(),
                    state.sort.label()
                ),
                text.add_modifier(Modifier::BOLD),
            ));
            if repositories.is_empty() {
                lines.push(Line::styled("   No public repositories.", muted));
            }
            for repo in repositories {
                let mut spans = vec![
                    Span::styled(
                        format!("   ★ {:>5}  ", repo.stars),
                        Style::default().fg(palette.star),
                    ),
                    Span::styled(repo.name.clone(), Style::default().fg(palette.accent)),
                ];
                if let Some(language) = &repo.language {
                    spans.push(Span::styled(format!("  {}", language), muted));
                }
                if let Some(updated) = repo.updated_at_parsed() {
                    spans.push(Span::styled(
                        format!("  {}", updated.format("%Y-%m-%d")),
                        muted,
                    ));
                }
                lines.push(Line::from(spans));
                if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
                    lines.push(Line::styled(format!("            {}", description), text));
                }
                lines.push(Line::styled(
                    format!("            {}", repo.html_url),
                    muted.add_modifier(Modifier::UNDERLINED),
                ));
            }
            lines
        }
    }
}

fn profile_lines(profile: &Profile, palette: Palette) -> Vec<Line<'static>> {
    let text = Style::default().fg(palette.text);
    let muted = Style::default().fg(palette.muted);
    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {}", profile.display_name()),
                text.add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  @{}", profile.login), muted),
        ]),
    ];
    if let Some(bio) = profile.bio.as_deref().filter(|b| !b.trim().is_empty()) {
        lines.push(Line::styled(format!(" {}", bio.trim()), text));
    }
    lines.push(Line::styled(
        format!(
            " {} repos · {} followers · {} following",
            profile.public_repos, profile.followers, profile.following
        ),
        muted,
    ));
    if let Some(url) = &profile.html_url {
        lines.push(Line::styled(format!(" {}", url), Style::default().fg(palette.accent)));
    }
    lines
}
