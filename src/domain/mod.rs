//! Domain layer - Notebook location and alias models

pub mod alias;
pub mod dirs;

pub use alias::{AliasTable, InvocationContext, RUNNING_ALIAS_ENV};
pub use dirs::{Candidate, Dirs};
