//! wsctl - console workspace management from the terminal.
//!
//! Switch, create and delete console workspaces (tenants). The interesting
//! parts are [`decode`], which turns a failed response's byte stream into JSON
//! or raw text, and [`flow`], which decides what the user is told after each
//! remote call.

pub mod cli;
pub mod client;
pub mod config;
pub mod decode;
pub mod error;
pub mod flow;
pub mod workspace;
