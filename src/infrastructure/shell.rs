//! Running shell command lines with the terminal attached

use std::path::Path;
use std::process::{Command, Stdio};

/// How a child process finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildExit {
    /// Exited on its own with this code
    Code(i32),
    /// Killed before it could report a code
    Signaled,
}

/// A command line to hand to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    /// Command line, interpreted by the shell
    pub line: String,
    /// Positional arguments, available to the line as `$@`
    pub args: Vec<String>,
    /// Extra variables set in the child's environment only
    pub env: Vec<(String, String)>,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>) -> Self {
        ShellCommand {
            line: line.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Run the line from `dir` first.
    pub fn in_dir(mut self, dir: &Path) -> Self {
        self.line = format!("{} && {}", change_dir(dir), self.line);
        self
    }
}

/// Spawns a shell command and waits for it to finish.
pub trait ShellRunner {
    fn run(&self, command: &ShellCommand) -> std::io::Result<ChildExit>;
}

/// Runs commands through the user's shell with inherited standard streams.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl ShellRunner for SystemShell {
    fn run(&self, command: &ShellCommand) -> std::io::Result<ChildExit> {
        let mut cmd = build_command(command);
        cmd.envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        tracing::debug!(line = %command.line, args = ?command.args, "spawning shell command");
        let status = cmd.status()?;

        Ok(match status.code() {
            Some(code) => ChildExit::Code(code),
            None => ChildExit::Signaled,
        })
    }
}

// On Windows, cmd /C receives the arguments appended to the line.
#[cfg(windows)]
fn build_command(command: &ShellCommand) -> Command {
    let mut line = command.line.clone();
    for arg in &command.args {
        line.push(' ');
        line.push_str(&quote(arg));
    }
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}

// `sh -c LINE -- ARGS...` sets $0 to `--` and $1.. to ARGS.
#[cfg(not(windows))]
fn build_command(command: &ShellCommand) -> Command {
    let shell = std::env::var("SHELL")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "sh".to_string());
    let mut cmd = Command::new(shell);
    cmd.arg("-c").arg(&command.line).arg("--").args(&command.args);
    cmd
}

#[cfg(windows)]
fn change_dir(dir: &Path) -> String {
    format!("cd /d {}", quote(&dir.to_string_lossy()))
}

#[cfg(not(windows))]
fn change_dir(dir: &Path) -> String {
    format!("cd {}", quote(&dir.to_string_lossy()))
}

/// Quote a single word for the shell.
#[cfg(windows)]
pub fn quote(word: &str) -> String {
    format!("\"{}\"", word.replace('"', "\"\""))
}

/// Quote a single word for the shell.
#[cfg(not(windows))]
pub fn quote(word: &str) -> String {
    let is_plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "/._-+,:@%=".contains(c));
    if is_plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}
