//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// `--notebook-dir` and `--working-dir` are consumed by the pre-scan before
// clap runs; they are declared here for the help output.
#[derive(Parser, Debug)]
#[command(name = "zk")]
#[command(about = "A plain-text note-taking assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Turn off notebook auto-discovery and set manually the notebook where commands are run
    #[arg(long, global = true, value_name = "PATH")]
    pub notebook_dir: Option<PathBuf>,

    /// Run as if zk was started in <PATH> instead of the current working directory
    #[arg(short = 'W', long, global = true, value_name = "PATH")]
    pub working_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create a new notebook in the given directory
    Init {
        /// Directory to initialize (default: working directory)
        path: Option<PathBuf>,
    },

    /// Index the notes to be searchable
    Index {
        /// Print the notes added, modified or removed
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the indexed notes
    List {
        /// Only keep notes whose path matches this regular expression
        #[arg(short = 'm', long = "match", value_name = "REGEX")]
        pattern: Option<String>,
    },

    /// List the configured aliases
    Alias,
}

impl Commands {
    /// Whether the command is the index refresh itself
    pub fn is_index(&self) -> bool {
        matches!(self, Commands::Index { .. })
    }
}
