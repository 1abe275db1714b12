use crate::builtin::{Cd, Exit};
use crate::command::{Command, CommandFactory, ExitCode, Stdin, Stdout};
use crate::env::Environment;
use crate::error::os_error;
use crate::external::ExternalCommand;
use crate::parser;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::process::Stdio;

/// Prompt written before every line read.
const PROMPT: &str = "TechShell> ";

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports commands defined in this crate — builtins and ExternalCommand.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// The shell proper: owns the [`Environment`] and the chain of
/// [`CommandFactory`] objects queried to turn a parsed [`Command`] into
/// something executable. See [`Default`] for the stock chain.
///
/// Example
/// ```no_run
/// use techshell::{parser, Interpreter};
/// let mut sh = Interpreter::default();
/// let code = sh.run(&parser::parse("ls -la")).unwrap();
/// assert_eq!(code, 0);
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create an interpreter with a custom factory chain.
    pub fn new(commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            env: Environment::new(),
            commands,
        }
    }

    /// The interpreter's view of the process state.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Execute one parsed command to completion.
    ///
    /// Opens any redirect targets, then walks the factory chain and runs the
    /// first match; for an external program that includes the blocking wait
    /// on the child. The returned exit code is the command's own — callers
    /// following shell convention discard it.
    pub fn run(&mut self, cmd: &Command) -> Result<ExitCode> {
        let Some(name) = cmd.program() else {
            return Ok(0);
        };

        let stdin: Box<dyn Stdin> = match cmd.input_path() {
            Some(path) => Box::new(File::open(path).map_err(os_error)?),
            None => Box::new(InheritedStdin(std::io::stdin().lock())),
        };
        let stdout: Box<dyn Stdout> = match cmd.output_path() {
            Some(path) => Box::new(open_output(path).map_err(os_error)?),
            None => Box::new(InheritedStdout(std::io::stdout())),
        };

        let args: Vec<&str> = cmd.argv()[1..].iter().map(String::as_str).collect();
        for factory in &self.commands {
            if let Some(exec) = factory.try_create(&self.env, name, &args) {
                return exec.execute(stdin, stdout, &mut self.env);
            }
        }
        Err(anyhow::anyhow!("command not found: {}", name))
    }

    /// The interactive read-parse-execute loop.
    ///
    /// One command completes fully, including the blocking wait on any
    /// spawned child, before the next line is read. Empty lines re-prompt
    /// with no side effects. Failures are reported on stderr and the loop
    /// keeps going; only `exit` or end-of-input ends it.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    let cmd = parser::parse(&line);
                    if cmd.is_empty() {
                        continue;
                    }
                    if let Err(err) = self.run(&cmd) {
                        eprintln!("{err}");
                    }
                    if self.env.should_exit {
                        break;
                    }
                }
                // Ctrl-C discards the pending line; only exit/EOF end the loop
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// The stock shell: `cd` and `exit` builtins, then the external launcher.
    fn default() -> Self {
        Self::new(vec![
            Box::new(Factory::<Cd>::default()),
            Box::new(Factory::<Exit>::default()),
            Box::new(Factory::<ExternalCommand>::default()),
        ])
    }
}

/// Open (or create) an output-redirect target, truncating existing content.
fn open_output(path: &str) -> std::io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o644);
    }
    opts.open(path)
}

struct InheritedStdin(std::io::StdinLock<'static>);

impl Read for InheritedStdin {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.0.read(buf)
    }
}

impl Stdin for InheritedStdin {
    fn stdio(self: Box<Self>) -> Stdio {
        Stdio::inherit()
    }
}

struct InheritedStdout(std::io::Stdout);

impl Write for InheritedStdout {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.0.flush()
    }
}

impl Stdout for InheritedStdout {
    fn stdio(self: Box<Self>) -> Stdio {
        Stdio::inherit()
    }
}
