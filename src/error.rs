use anyhow::anyhow;
use std::io;

/// Format an OS-level failure the way the shell reports it:
/// `Error <code> (<description>)`.
///
/// The display of a raw-OS `io::Error` carries an ` (os error N)` suffix;
/// that suffix is stripped so the code appears exactly once. Errors with no
/// OS code (synthetic `io::Error`s) are wrapped unchanged.
pub(crate) fn os_error(err: io::Error) -> anyhow::Error {
    match err.raw_os_error() {
        Some(code) => {
            let text = err.to_string();
            let suffix = format!(" (os error {code})");
            let description = text.strip_suffix(suffix.as_str()).unwrap_or(&text);
            anyhow!("Error {code} ({description})")
        }
        None => anyhow::Error::new(err),
    }
}
