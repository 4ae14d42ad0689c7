//! Terminal front end of the rentals console.
//!
//! The `rentals` binary parses [`cli::Cli`], builds a [`context::AppContext`]
//! and hands off to one of the [`commands`].

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod output;
pub mod render;
pub mod store;
pub mod terminal;
pub mod timing;
