//! Notebook on the file system

use crate::error::{Result, ZkError};
use crate::infrastructure::config::{Config, NOTEBOOK_MARKER};
use std::fs;
use std::path::{Path, PathBuf};

/// A directory tree holding one collection of notes
#[derive(Debug, Clone)]
pub struct Notebook {
    root: PathBuf,
    config: Config,
}

impl Notebook {
    /// Open the notebook containing `dir`, walking up its ancestors until a
    /// `.zk` directory is found.
    pub fn open(dir: &Path) -> Result<Self> {
        let root = Self::find_root(dir)?;
        let config = Config::load_from_dir(&root)?;
        Ok(Notebook { root, config })
    }

    /// Create a new notebook in `dir`, creating the directory if needed.
    pub fn create(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        if Self::has_marker(dir) {
            return Err(ZkError::AlreadyInitialized(dir.to_path_buf()));
        }

        fs::create_dir(dir.join(NOTEBOOK_MARKER))?;
        let config = Config::default();
        config.save_to_dir(dir)?;

        Ok(Notebook {
            root: dir.to_path_buf(),
            config,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Path of a file inside the `.zk` directory
    pub fn data_path(&self, name: &str) -> PathBuf {
        self.root.join(NOTEBOOK_MARKER).join(name)
    }

    fn find_root(start: &Path) -> Result<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_marker(&current) {
                return Ok(current);
            }
            if !current.pop() {
                return Err(ZkError::NotebookNotFound(start.to_path_buf()));
            }
        }
    }

    fn has_marker(path: &Path) -> bool {
        path.join(NOTEBOOK_MARKER).is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_notebook() {
        let temp = TempDir::new().unwrap();
        let notebook = Notebook::create(temp.path()).unwrap();

        assert_eq!(notebook.root(), temp.path());
        assert!(temp.path().join(".zk").is_dir());
        assert!(temp.path().join(".zk/config.toml").is_file());
    }

    #[test]
    fn test_create_missing_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("new").join("notebook");

        Notebook::create(&dir).unwrap();
        assert!(dir.join(".zk").is_dir());
    }

    #[test]
    fn test_create_twice_fails() {
        let temp = TempDir::new().unwrap();
        Notebook::create(temp.path()).unwrap();

        let err = Notebook::create(temp.path()).unwrap_err();
        assert!(matches!(err, ZkError::AlreadyInitialized(_)));
    }

    #[test]
    fn test_open_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        Notebook::create(temp.path()).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let notebook = Notebook::open(&subdir).unwrap();
        assert_eq!(notebook.root(), temp.path());
    }

    #[test]
    fn test_open_fails_without_marker() {
        let temp = TempDir::new().unwrap();

        match Notebook::open(temp.path()).unwrap_err() {
            ZkError::NotebookNotFound(path) => assert_eq!(path, temp.path()),
            other => panic!("Expected NotebookNotFound error, got {other:?}"),
        }
    }

    #[test]
    fn test_data_path() {
        let temp = TempDir::new().unwrap();
        let notebook = Notebook::create(temp.path()).unwrap();
        assert_eq!(
            notebook.data_path("index.toml"),
            temp.path().join(".zk").join("index.toml")
        );
    }
}
