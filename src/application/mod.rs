//! Application layer - Use cases and orchestration

pub mod index_notes;
pub mod init;
pub mod list_notes;

pub use index_notes::{index_notes, refresh_before_command};
pub use init::init;
pub use list_notes::list_notes;
