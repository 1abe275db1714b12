use crate::env::Environment;
use anyhow::Result;
use std::io::{Read, Write};
use std::process::Stdio;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// One parsed input line: the argument vector plus optional redirect targets
/// for the standard streams of the program to run.
///
/// `argv[0]`, when present, names the program or builtin; redirect operators
/// and their operands never appear in the vector. A `Command` with an empty
/// argument vector is well-formed and means "nothing to execute". Each
/// instance owns its strings and lives for exactly one loop iteration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Command {
    pub(crate) argv: Vec<String>,
    pub(crate) input_path: Option<String>,
    pub(crate) output_path: Option<String>,
}

impl Command {
    /// The full argument vector, program name included.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    /// The program or builtin name, absent for an empty line.
    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    /// File to redirect the program's standard input from.
    pub fn input_path(&self) -> Option<&str> {
        self.input_path.as_deref()
    }

    /// File to create (or truncate) for the program's standard output.
    pub fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    /// True when the line held no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }
}

/// Abstraction over a readable input stream that can also be converted into
/// a [`Stdio`] handle for spawning external processes.
///
/// Implementors typically wrap standard input or an opened redirect file.
/// A blanket implementation exists for any type that implements `Read` and
/// `Into<Stdio>` (notably `std::fs::File`).
pub trait Stdin: Read {
    /// Convert this input into a [`Stdio`] handle suitable for `std::process::Command`.
    fn stdio(self: Box<Self>) -> Stdio;
}

impl<T: Read + Into<Stdio>> Stdin for T {
    fn stdio(self: Box<Self>) -> Stdio {
        (*self).into()
    }
}

/// Abstraction over a writable output stream that can also be converted into
/// a [`Stdio`] handle for spawning external processes.
///
/// A blanket implementation exists for any type that implements `Write` and
/// `Into<Stdio>`.
pub trait Stdout: Write {
    /// Convert this output into a [`Stdio`] handle suitable for `std::process::Command`.
    fn stdio(self: Box<Self>) -> Stdio;
}

impl<T: Write + Into<Stdio>> Stdout for T {
    fn stdio(self: Box<Self>) -> Stdio {
        (*self).into()
    }
}

/// Object-safe trait for anything the shell can execute.
///
/// Implemented by builtins via a blanket impl and by external commands.
pub trait ExecutableCommand {
    /// Executes the command to completion.
    fn execute(
        self: Box<Self>,
        stdin: Box<dyn Stdin>,
        stdout: Box<dyn Stdout>,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`, letting the
/// interpreter fall through to the next factory in its chain.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(
        &self,
        env: &Environment,
        name: &str,
        args: &[&str],
    ) -> Option<Box<dyn ExecutableCommand>>;
}
