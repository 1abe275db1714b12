use crate::command::{CommandFactory, ExecutableCommand, ExitCode, Stdin, Stdout};
use crate::env::Environment;
use crate::error::os_error;
use crate::interpreter::Factory;
use anyhow::Result;
use std::ffi::OsString;
use std::process::ExitStatus;

/// Command that is not a builtin: launched as an independent child process.
///
/// The child starts with the shell's standard streams unless the caller hands
/// in opened redirect files, runs in the environment's working directory, and
/// is blocked on until it terminates. Program-name resolution against the
/// executable search path happens at spawn time, so a failed lookup surfaces
/// as the spawn error and the shell's loop keeps running.
pub struct ExternalCommand {
    name: OsString,
    args: Vec<OsString>,
}

impl ExternalCommand {
    pub fn new(name: OsString, args: Vec<OsString>) -> Self {
        Self { name, args }
    }
}

impl CommandFactory for Factory<ExternalCommand> {
    /// Catch-all: every name that no builtin claimed becomes a launch attempt.
    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        Some(Box::new(ExternalCommand::new(
            name.into(),
            args.iter().map(|x| x.into()).collect(),
        )))
    }
}

impl ExecutableCommand for ExternalCommand {
    fn execute(
        self: Box<Self>,
        stdin: Box<dyn Stdin>,
        stdout: Box<dyn Stdout>,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let mut child = std::process::Command::new(&self.name)
            .args(&self.args)
            .stdin(stdin.stdio())
            .stdout(stdout.stdio())
            .current_dir(&env.current_dir)
            .spawn()
            .map_err(os_error)?;
        let exit_status = child.wait().map_err(os_error)?;
        match exit_status.code() {
            Some(x) => Ok(x),
            None => Ok(terminated_by_signal(exit_status)),
        }
    }
}

#[cfg(unix)]
fn terminated_by_signal(exit_status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    if let Some(signal) = ExitStatusExt::signal(&exit_status) {
        128 + signal
    } else if ExitStatusExt::core_dumped(&exit_status) {
        255
    } else {
        -1
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_exit_status: ExitStatus) -> i32 {
    -1
}
