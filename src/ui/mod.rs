//! Terminal front end.
//!
//! `mvi` holds the intent/reducer/state traits shared with the engine; the
//! rest is the ratatui view over a [`ProfileEngine`](crate::engine::ProfileEngine).

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
