//! Command implementations.

pub mod workspace;

pub use workspace::{
    handle_create, handle_current, handle_delete, handle_list, handle_rename, handle_switch,
};
