//! Places where zk looks for the current notebook

use crate::domain::{Candidate, Dirs};
use crate::error::{Result, ZkError};
use std::path::{Path, PathBuf};

/// Default notebook used when none is found from the working directory
pub const NOTEBOOK_DIR_ENV: &str = "ZK_NOTEBOOK_DIR";

/// Candidates for the current notebook, by order of precedence:
///
/// 1. `--notebook-dir` flag
/// 2. current working directory
/// 3. `ZK_NOTEBOOK_DIR` environment variable
pub fn notebook_search_dirs(dirs: &Dirs) -> Result<Vec<Candidate>> {
    let cwd = std::env::current_dir().map_err(ZkError::WorkingDirectory)?;
    let env_dir = std::env::var_os(NOTEBOOK_DIR_ENV)
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from);

    let candidates = search_dirs(dirs, &cwd, env_dir);
    tracing::debug!(?candidates, "notebook candidates");
    Ok(candidates)
}

/// Same as [`notebook_search_dirs`] with the process state passed in.
pub fn search_dirs(dirs: &Dirs, cwd: &Path, env_dir: Option<PathBuf>) -> Vec<Candidate> {
    let working_dir = dirs.working_dir.as_deref();

    // With an explicit notebook, only look there so "not found" names it.
    if let Some(notebook_dir) = &dirs.notebook_dir {
        return vec![Candidate::new(
            notebook_dir,
            working_dir.unwrap_or(cwd),
        )];
    }

    let wd = working_dir.unwrap_or(cwd);
    let mut candidates = vec![Candidate::new(wd, wd)];

    if let Some(env_dir) = env_dir {
        let env_working_dir = working_dir.map_or_else(|| env_dir.clone(), Path::to_path_buf);
        candidates.push(Candidate::new(env_dir, env_working_dir));
    }

    candidates
}
