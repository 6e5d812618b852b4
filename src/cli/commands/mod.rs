//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed to by
//! [`CommandDispatcher`].

pub mod check;
pub mod dispatcher;
pub mod references;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
