//! Initialize notebook use case

use crate::error::Result;
use crate::infrastructure::{Container, Notebook};
use std::path::Path;

/// Create a notebook at `path`, relative to the working directory.
///
/// Does not need a current notebook.
pub fn init(container: &Container, path: Option<&Path>) -> Result<Notebook> {
    let dir = match path {
        Some(path) => container.resolve(path),
        None => container.working_dir().to_path_buf(),
    };
    let notebook = Notebook::create(&dir)?;

    tracing::info!(root = %notebook.root().display(), "created notebook");
    Ok(notebook)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Config;
    use tempfile::TempDir;

    #[test]
    fn test_init_in_working_dir() {
        let temp = TempDir::new().unwrap();
        let container = Container::with_config(Config::default(), temp.path().to_path_buf());

        let notebook = init(&container, None).unwrap();
        assert!(temp.path().join(".zk/config.toml").exists());
        assert_eq!(notebook.root(), temp.path());
    }

    #[test]
    fn test_init_relative_path() {
        let temp = TempDir::new().unwrap();
        let container = Container::with_config(Config::default(), temp.path().to_path_buf());

        init(&container, Some(Path::new("notes"))).unwrap();
        assert!(temp.path().join("notes/.zk").is_dir());
    }
}
