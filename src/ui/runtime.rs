use crate::engine::ProfileEngine;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the terminal UI until the user quits.
///
/// Searches run as tasks on `handle`; a forwarder task turns engine state
/// changes into [`AppEvent::StateChanged`] so the loop redraws when a result
/// lands.
pub fn run(engine: ProfileEngine, handle: &Handle, initial_user: Option<String>) -> io::Result<()> {
    let _runtime = handle.enter();
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);

    let state_tx = events.sender();
    let mut updates = engine.subscribe();
    let forwarder = handle.spawn(async move {
        while updates.changed().await.is_ok() {
            if state_tx.send(AppEvent::StateChanged).is_err() {
                break;
            }
        }
    });

    let mut app = App::new(engine);
    if let Some(user) = initial_user.filter(|u| !u.trim().is_empty()) {
        for ch in user.chars() {
            app.on_char(ch);
        }
        app.submit();
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::StateChanged) | Ok(AppEvent::Tick) => app.refresh(),
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    forwarder.abort();
    drop(guard);
    Ok(())
}
