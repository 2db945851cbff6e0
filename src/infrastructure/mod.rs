//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod container;
pub mod index;
pub mod notebook;
pub mod shell;

pub use config::Config;
pub use container::Container;
pub use index::{IndexStats, IndexedNote};
pub use notebook::Notebook;
pub use shell::{ChildExit, ShellCommand, ShellRunner, SystemShell};
