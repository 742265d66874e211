//! Terminal UI: event loop, key handling, and rendering.

pub mod app;
pub mod events;
pub mod footer;
pub mod generator;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
