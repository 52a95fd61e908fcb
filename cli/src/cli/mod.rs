//! CLI module for wsctl.

pub mod args;
pub mod commands;
pub mod terminal;

pub use args::{Cli, Commands};
