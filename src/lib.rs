//! Terminal client for searching Hacker News stories.

pub mod config;
pub mod logging;
pub mod mvi;
pub mod search;
pub mod store;
pub mod ui;
