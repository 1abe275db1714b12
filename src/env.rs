use std::env as stdenv;
use std::path::PathBuf;

/// Mutable, process-level state shared by the interpreter and its commands.
///
/// `current_dir` mirrors the process working directory: captured at startup
/// and updated only by the `cd` builtin, then read by every subsequent
/// external-command launch. `should_exit` is set by the `exit` builtin and
/// checked by the interactive loop after each command.
///
/// Note: fields are public for simplicity to keep the crate small.
#[derive(Debug, Clone)]
pub struct Environment {
    /// The working directory for command execution.
    pub current_dir: PathBuf,
    /// When true, the interactive loop terminates after the current command.
    pub should_exit: bool,
}

impl Environment {
    /// Capture the current process state into a new `Environment`.
    pub fn new() -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            current_dir,
            should_exit: false,
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializes tests that read or mutate the process working directory.
#[cfg(test)]
pub(crate) fn lock_current_dir() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::{Mutex, OnceLock, PoisonError};
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}
