//! Platform CLI Port
//!
//! Abstracts running one command of the hosting platform's management CLI.
//! The deploy runner only needs to know whether a command succeeded; no
//! structured output is parsed.

use std::fmt;
use thiserror::Error;

/// A fully resolved platform command: program plus argv.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PlatformCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

/// Renders the command as a copy-pasteable shell line.
impl fmt::Display for PlatformCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | '=' | ':'));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

/// Why a platform command did not succeed.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// The program could not be started (missing from PATH, not executable, ...)
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran and exited non-zero
    #[error("'{program}' exited with status {code}")]
    Exit { program: String, code: i32 },

    /// The program was killed before it could exit
    #[error("'{program}' was terminated by a signal")]
    Signal { program: String },
}

impl PlatformError {
    /// Exit status of the child, when it produced one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            PlatformError::Exit { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Runs platform commands to completion.
///
/// Implementations block until the child exits. There is no timeout: a hung
/// platform call hangs the caller.
pub trait PlatformCli {
    fn run(&self, command: &PlatformCommand) -> Result<(), PlatformError>;
}

impl<T: PlatformCli + ?Sized> PlatformCli for &T {
    fn run(&self, command: &PlatformCommand) -> Result<(), PlatformError> {
        (**self).run(command)
    }
}
