use crate::engine::{ProfileEngine, ProfileState};

/// Terminal front end over a [`ProfileEngine`].
///
/// Holds the last published engine snapshot plus purely local view state
/// (scroll position, quit flag). All lookup state lives in the engine.
pub struct App {
    engine: ProfileEngine,
    state: ProfileState,
    scroll: u16,
    should_quit: bool,
}

impl App {
    pub fn new(engine: ProfileEngine) -> Self {
        let state = engine.snapshot();
        Self {
            engine,
            state,
            scroll: 0,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Pull the engine's current state. A new search or result resets the
    /// scroll position.
    pub fn refresh(&mut self) {
        let next = self.engine.snapshot();
        if next.generation != self.state.generation || next.fetch != self.state.fetch {
            self.scroll = 0;
        }
        self.state = next;
    }

    pub fn on_char(&mut self, ch: char) {
        let mut query = self.engine.query();
        query.push(ch);
        self.engine.update_query(query);
        self.refresh();
    }

    pub fn on_paste(&mut self, text: &str) {
        let mut query = self.engine.query();
        query.extend(text.chars().filter(|c| !c.is_control()));
        self.engine.update_query(query);
        self.refresh();
    }

    pub fn backspace(&mut self) {
        let mut query = self.engine.query();
        query.pop();
        self.engine.update_query(query);
        self.refresh();
    }

    pub fn clear_query(&mut self) {
        self.engine.update_query(String::new());
        self.refresh();
    }

    /// Start a search for the query. Requires a tokio runtime context.
    pub fn submit(&mut self) {
        let _ = self.engine.spawn_search();
        self.refresh();
    }

    pub fn retry(&mut self) {
        let _ = self.engine.spawn_retry();
        self.refresh();
    }

    pub fn toggle_theme(&mut self) {
        self.engine.toggle_theme();
        self.refresh();
    }

    pub fn cycle_sort(&mut self) {
        self.engine.cycle_sort();
        self.refresh();
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll).saturating_add(delta);
        self.scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }
}
