//! zk - plain-text note-taking assistant
//!
//! Finds the notebook a command should act on, runs user-defined shell
//! aliases, and dispatches built-in commands.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ZkError;
