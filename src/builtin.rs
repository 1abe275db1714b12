use crate::command::{CommandFactory, ExecutableCommand, ExitCode, Stdin, Stdout};
use crate::env::Environment;
use crate::error::os_error;
use crate::interpreter::Factory;
use anyhow::Result;
use argh::{EarlyExit, FromArgs};
use std::io::{Read, Write};
use std::path::Path;

/// Built-in commands known to the shell at compile time.
///
/// Builtins are parsed using the [`argh`] crate (`FromArgs`) and run directly
/// in the calling process, never in a spawned child: `cd` must mutate this
/// process's working directory and `exit` must end this process's loop, so
/// neither effect would survive a child-process boundary.
pub(crate) trait BuiltinCommand: Sized + FromArgs {
    /// Canonical name of the command, e.g. "cd".
    fn name() -> &'static str;

    /// Executes the command using the provided IO streams and environment.
    ///
    /// Return value follows shell conventions: 0 for success, non-zero for error.
    fn execute(
        self,
        stdin: &mut dyn Read,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

impl<T: BuiltinCommand> ExecutableCommand for T {
    fn execute(
        self: Box<Self>,
        mut stdin: Box<dyn Stdin>,
        mut stdout: Box<dyn Stdout>,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        BuiltinCommand::execute(*self, &mut stdin, &mut stdout, env)
    }
}

/// Produced when argh rejects a builtin invocation (or answers `--help`):
/// prints the generated text instead of executing anything.
struct InvalidArgs {
    output: String,
    is_error: bool,
}

impl ExecutableCommand for InvalidArgs {
    fn execute(
        self: Box<Self>,
        _stdin: Box<dyn Stdin>,
        mut stdout: Box<dyn Stdout>,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        if self.is_error {
            eprint!("{}", self.output);
            Ok(1)
        } else {
            stdout.write_all(self.output.as_bytes())?;
            Ok(0)
        }
    }
}

impl<T: BuiltinCommand + 'static> CommandFactory for Factory<T> {
    fn try_create(
        &self,
        _env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>> {
        if name == T::name() {
            Some(match T::from_args(&[name], args) {
                Ok(cmd) => Box::new(cmd),
                Err(EarlyExit { output, status }) => Box::new(InvalidArgs {
                    output,
                    is_error: status.is_err(),
                }),
            })
        } else {
            None
        }
    }
}

#[derive(FromArgs)]
/// Change the current working directory.
pub struct Cd {
    #[argh(positional, greedy)]
    /// directory to switch to, absolute or relative; only the first value is
    /// consulted, any extras are ignored.
    pub args: Vec<String>,
}

impl BuiltinCommand for Cd {
    fn name() -> &'static str {
        "cd"
    }

    fn execute(
        self,
        _stdin: &mut dyn Read,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let Some(target) = self.args.first() else {
            return Err(anyhow::anyhow!("cd: missing argument"));
        };
        std::env::set_current_dir(Path::new(target)).map_err(os_error)?;
        env.current_dir = std::env::current_dir().map_err(os_error)?;
        Ok(0)
    }
}

#[derive(FromArgs)]
/// Terminate the shell with status 0.
pub struct Exit {
    #[argh(positional, greedy)]
    /// accepted and ignored; the shell always exits 0.
    pub _args: Vec<String>,
}

impl BuiltinCommand for Exit {
    fn name() -> &'static str {
        "exit"
    }

    fn execute(
        self,
        _stdin: &mut dyn Read,
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        env.should_exit = true;
        Ok(0)
    }
}
