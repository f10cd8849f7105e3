//! Terminal front end: key handling and rendering through a test backend.

mod common;

use common::{profile, repo, FakeRepository};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ghprofile::engine::{ProfileEngine, SortOption};
use ghprofile::ui::app::App;
use ghprofile::ui::input::handle_key;
use ghprofile::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, key(KeyCode::Char(ch)));
    }
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn octocat_repository() -> Arc<FakeRepository> {
    let repository = FakeRepository::new();
    repository.succeed("octocat", profile("octocat"), vec![repo("A", 5), repo("B", 9)]);
    repository
}

#[test]
fn hint_shown_before_first_search() {
    let app = App::new(ProfileEngine::new(FakeRepository::new()));
    let text = screen(&app);
    assert!(text.contains("Type a GitHub username and press Enter."));
    assert!(text.contains("Sort: Stars"));
}

#[test]
fn control_keys_toggle_theme_and_cycle_sort() {
    let mut app = App::new(ProfileEngine::new(FakeRepository::new()));

    handle_key(&mut app, ctrl('t'));
    assert!(app.state().dark_theme);
    handle_key(&mut app, ctrl('s'));
    assert_eq!(app.state().sort, SortOption::Recent);
    assert!(screen(&app).contains("Theme: Dark"));

    type_text(&mut app, "ab");
    handle_key(&mut app, ctrl('u'));
    assert_eq!(app.state().query, "");
}

#[test]
fn escape_quits() {
    let mut app = App::new(ProfileEngine::new(FakeRepository::new()));
    handle_key(&mut app, key(KeyCode::Esc));
    assert!(app.should_quit());
}

#[tokio::test]
async fn enter_searches_and_result_renders_sorted() {
    let repository = octocat_repository();
    let engine = ProfileEngine::new(repository);
    let mut app = App::new(engine.clone());

    type_text(&mut app, "octocat");
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.state().is_loading());
    assert!(screen(&app).contains("Loading octocat..."));

    let mut updates = engine.subscribe();
    updates
        .wait_for(|state| !state.is_loading())
        .await
        .expect("engine alive");
    app.refresh();

    let text = screen(&app);
    assert!(text.contains("@octocat"));
    assert!(text.contains("Repositories (2) by Stars"));
    assert!(text.find("  B").unwrap() < text.find("  A").unwrap());

    handle_key(&mut app, ctrl('s'));
    handle_key(&mut app, ctrl('s'));
    let text = screen(&app);
    assert!(text.contains("Repositories (2) by Name"));
    assert!(text.find("  A").unwrap() < text.find("  B").unwrap());
}

#[tokio::test]
async fn retry_key_refetches_after_error() {
    let repository = FakeRepository::new();
    let engine = ProfileEngine::new(repository.clone());
    let mut app = App::new(engine.clone());

    type_text(&mut app, "octocat");
    handle_key(&mut app, key(KeyCode::Enter));
    let mut updates = engine.subscribe();
    updates.wait_for(|s| !s.is_loading()).await.unwrap();
    app.refresh();
    assert!(screen(&app).contains("Press Ctrl+R to retry."));

    repository.succeed("octocat", profile("octocat"), vec![]);
    handle_key(&mut app, ctrl('r'));
    assert_eq!(app.state().generation, 2);
    updates.wait_for(|s| !s.is_loading()).await.unwrap();
    app.refresh();
    assert!(screen(&app).contains("No public repositories."));
}
