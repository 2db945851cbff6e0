//! Directory pairs used to locate the current notebook

use std::path::PathBuf;

/// Directories given explicitly on the command line.
///
/// Both paths are absolute when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dirs {
    /// Value of `--notebook-dir`
    pub notebook_dir: Option<PathBuf>,
    /// Value of `--working-dir` / `-W`
    pub working_dir: Option<PathBuf>,
}

/// A place where a notebook might be found.
///
/// `working_dir` is the directory relative path arguments are resolved from
/// once the candidate is bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub notebook_dir: PathBuf,
    pub working_dir: PathBuf,
}

impl Candidate {
    pub fn new(notebook_dir: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Candidate {
            notebook_dir: notebook_dir.into(),
            working_dir: working_dir.into(),
        }
    }
}
