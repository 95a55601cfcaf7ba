//! Process Platform
//!
//! Runs platform commands as child processes and reports their exit status.

use crate::domain::ports::{PlatformCli, PlatformCommand, PlatformError};
use std::process::{Command, Stdio};

/// Where the child's stdout goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildOutput {
    /// Share our stdout (human mode)
    #[default]
    Inherit,
    /// Send it to our stderr so stdout stays a clean NDJSON stream
    ToStderr,
}

/// `PlatformCli` that spawns each command and waits for it.
///
/// stdin and stderr are always inherited so interactive logins and the
/// platform CLI's own diagnostics reach the user.
#[derive(Debug, Clone, Default)]
pub struct ProcessPlatform {
    output: ChildOutput,
}

impl ProcessPlatform {
    pub fn new(output: ChildOutput) -> Self {
        Self { output }
    }
}

impl PlatformCli for ProcessPlatform {
    fn run(&self, command: &PlatformCommand) -> Result<(), PlatformError> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stderr(Stdio::inherit());

        match self.output {
            ChildOutput::Inherit => {
                cmd.stdout(Stdio::inherit());
            }
            ChildOutput::ToStderr => {
                cmd.stdout(Stdio::from(std::io::stderr()));
            }
        }

        let status = cmd.status().map_err(|source| PlatformError::Spawn {
            program: command.program.clone(),
            source,
        })?;

        if status.success() {
            return Ok(());
        }

        match status.code() {
            Some(code) => Err(PlatformError::Exit {
                program: command.program.clone(),
                code,
            }),
            None => Err(PlatformError::Signal {
                program: command.program.clone(),
            }),
        }
    }
}
