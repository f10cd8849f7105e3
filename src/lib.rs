//! GitHub profile lookup: a state engine over a remote gateway, with a
//! terminal UI and a plain-text front end.

pub mod config;
pub mod engine;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod report;
pub mod repository;
pub mod ui;
