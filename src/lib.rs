//! slidedraft: a terminal client for an AI presentation-draft backend.
//!
//! Collects a topic, an audience, and a desired length, submits them as one
//! HTTP POST to a configurable backend, and renders the returned draft or an
//! error. The request lifecycle (idle, loading, success, failure) is driven
//! by a pure reducer in [`ui::generator`]; the network call itself lives in
//! [`backend`].

pub mod backend;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
