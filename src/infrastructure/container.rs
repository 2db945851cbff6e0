//! Dependencies shared by every command of one invocation

use crate::domain::{AliasTable, Candidate};
use crate::error::{Result, ZkError};
use crate::infrastructure::{Config, Notebook};
use std::path::{Path, PathBuf};

/// Holds the user config and, once bound, the current notebook.
#[derive(Debug)]
pub struct Container {
    config: Config,
    working_dir: PathBuf,
    binding: Binding,
}

#[derive(Debug)]
enum Binding {
    Bound(Notebook),
    /// No candidate could be opened; remembers where the first search started.
    Unbound(PathBuf),
}

impl Container {
    /// Create a container with the user-global configuration.
    pub fn new() -> Result<Self> {
        let config = Config::load_global()?;
        let working_dir = std::env::current_dir().map_err(ZkError::WorkingDirectory)?;
        Ok(Self::with_config(config, working_dir))
    }

    pub fn with_config(config: Config, working_dir: PathBuf) -> Self {
        Container {
            binding: Binding::Unbound(working_dir.clone()),
            config,
            working_dir,
        }
    }

    /// Bind the first candidate holding a notebook.
    ///
    /// Failing to bind is not an error here: commands needing a notebook
    /// report it through [`Container::current_notebook`].
    pub fn set_current_notebook(&mut self, candidates: &[Candidate]) {
        for candidate in candidates {
            match Notebook::open(&candidate.notebook_dir) {
                Ok(notebook) => {
                    tracing::debug!(
                        root = %notebook.root().display(),
                        working_dir = %candidate.working_dir.display(),
                        "bound notebook"
                    );
                    self.working_dir = candidate.working_dir.clone();
                    self.binding = Binding::Bound(notebook);
                    return;
                }
                Err(ZkError::NotebookNotFound(dir)) => {
                    tracing::debug!(dir = %dir.display(), "no notebook in candidate");
                }
                Err(e) => {
                    tracing::warn!(
                        dir = %candidate.notebook_dir.display(),
                        "cannot open notebook: {}",
                        e
                    );
                }
            }
        }

        if let Some(first) = candidates.first() {
            self.working_dir = first.working_dir.clone();
            self.binding = Binding::Unbound(first.notebook_dir.clone());
        }
    }

    /// The bound notebook, or `NotebookNotFound` naming the first searched
    /// directory.
    pub fn current_notebook(&self) -> Result<&Notebook> {
        match &self.binding {
            Binding::Bound(notebook) => Ok(notebook),
            Binding::Unbound(dir) => Err(ZkError::NotebookNotFound(dir.clone())),
        }
    }

    /// Directory relative path arguments are resolved from
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// User aliases overlaid with the current notebook's aliases
    pub fn aliases(&self) -> AliasTable {
        match &self.binding {
            Binding::Bound(notebook) => self.config.alias.merged_with(&notebook.config().alias),
            Binding::Unbound(_) => self.config.alias.clone(),
        }
    }

    /// Resolve `path` against the working directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn container(cwd: &Path) -> Container {
        Container::with_config(Config::default(), cwd.to_path_buf())
    }

    #[test]
    fn test_first_bindable_candidate_wins() {
        let empty = TempDir::new().unwrap();
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        Notebook::create(first.path()).unwrap();
        Notebook::create(second.path()).unwrap();

        let mut c = container(empty.path());
        c.set_current_notebook(&[
            Candidate::new(empty.path(), empty.path()),
            Candidate::new(first.path(), "/work/first"),
            Candidate::new(second.path(), "/work/second"),
        ]);

        assert_eq!(c.current_notebook().unwrap().root(), first.path());
        assert_eq!(c.working_dir(), Path::new("/work/first"));
    }

    #[test]
    fn test_unbound_names_first_candidate() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();

        let mut c = container(Path::new("/"));
        c.set_current_notebook(&[
            Candidate::new(a.path(), a.path()),
            Candidate::new(b.path(), b.path()),
        ]);

        match c.current_notebook().unwrap_err() {
            ZkError::NotebookNotFound(dir) => assert_eq!(dir, a.path()),
            other => panic!("Expected NotebookNotFound error, got {other:?}"),
        }
        assert_eq!(c.working_dir(), a.path());
    }

    #[test]
    fn test_aliases_overlay_notebook_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.alias.insert("ls", "zk list");
        config.alias.insert("hi", "echo hi");
        config.save_to_dir(temp.path()).unwrap();

        let mut global = Config::default();
        global.alias.insert("ls", "global list");
        global.alias.insert("bye", "echo bye");

        let mut c = Container::with_config(global, temp.path().to_path_buf());
        assert_eq!(c.aliases().get("ls"), Some("global list"));

        c.set_current_notebook(&[Candidate::new(temp.path(), temp.path())]);
        let aliases = c.aliases();
        assert_eq!(aliases.get("ls"), Some("zk list"));
        assert_eq!(aliases.get("hi"), Some("echo hi"));
        assert_eq!(aliases.get("bye"), Some("echo bye"));
    }

    #[test]
    fn test_resolve_relative_to_working_dir() {
        let c = container(Path::new("/notes"));
        assert_eq!(c.resolve(Path::new("a.md")), PathBuf::from("/notes/a.md"));
        assert_eq!(c.resolve(Path::new("/abs.md")), PathBuf::from("/abs.md"));
    }
}
