//! Turns a raw input line into a [`Command`].

use crate::command::Command;

fn is_redirect(token: &str) -> bool {
    token == "<" || token == ">"
}

/// Parse one input line (trailing newline already stripped).
///
/// The line is split on runs of whitespace. `<` and `>` each consume the
/// following token as a redirect target; every other token is appended to
/// the argument vector, so redirect operators may appear before, after or
/// between arguments. A redirect whose operand is missing or is itself an
/// operator is dropped silently, and repeated redirects of the same kind
/// overwrite each other — the last one wins.
///
/// Never fails: malformed or empty input yields an empty [`Command`].
pub fn parse(line: &str) -> Command {
    let mut cmd = Command::default();
    let mut tokens = line.split_whitespace().peekable();

    while let Some(token) = tokens.next() {
        match token {
            "<" => {
                if let Some(path) = tokens.next_if(|t| !is_redirect(t)) {
                    cmd.input_path = Some(path.to_string());
                }
            }
            ">" => {
                if let Some(path) = tokens.next_if(|t| !is_redirect(t)) {
                    cmd.output_path = Some(path.to_string());
                }
            }
            arg => cmd.argv.push(arg.to_string()),
        }
    }

    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(cmd: &Command) -> Vec<&str> {
        cmd.argv().iter().map(String::as_str).collect()
    }

    #[test]
    fn plain_words_become_argv() {
        let cmd = parse("ls -la");
        assert_eq!(argv(&cmd), ["ls", "-la"]);
        assert_eq!(cmd.input_path(), None);
        assert_eq!(cmd.output_path(), None);
    }

    #[test]
    fn both_redirects_are_consumed() {
        let cmd = parse("sort < in.txt > out.txt");
        assert_eq!(argv(&cmd), ["sort"]);
        assert_eq!(cmd.input_path(), Some("in.txt"));
        assert_eq!(cmd.output_path(), Some("out.txt"));
    }

    #[test]
    fn redirect_between_arguments() {
        let cmd = parse("echo hi > out.txt extra");
        assert_eq!(argv(&cmd), ["echo", "hi", "extra"]);
        assert_eq!(cmd.output_path(), Some("out.txt"));
        assert_eq!(cmd.input_path(), None);
    }

    #[test]
    fn redirect_before_command_name() {
        let cmd = parse("> out echo hi");
        assert_eq!(argv(&cmd), ["echo", "hi"]);
        assert_eq!(cmd.output_path(), Some("out"));
    }

    #[test]
    fn empty_and_whitespace_lines_yield_empty_command() {
        for line in ["", "   ", " \t \t "] {
            let cmd = parse(line);
            assert!(cmd.is_empty());
            assert_eq!(cmd.program(), None);
            assert_eq!(cmd.input_path(), None);
            assert_eq!(cmd.output_path(), None);
        }
    }

    #[test]
    fn missing_operand_drops_redirect() {
        let cmd = parse("cat <");
        assert_eq!(argv(&cmd), ["cat"]);
        assert_eq!(cmd.input_path(), None);

        let cmd = parse("echo hi >");
        assert_eq!(argv(&cmd), ["echo", "hi"]);
        assert_eq!(cmd.output_path(), None);
    }

    #[test]
    fn operator_shaped_operand_drops_redirect() {
        let cmd = parse("cat < >");
        assert_eq!(argv(&cmd), ["cat"]);
        assert_eq!(cmd.input_path(), None);
        assert_eq!(cmd.output_path(), None);

        // the second operator is still processed on its own
        let cmd = parse("cat < > out");
        assert_eq!(argv(&cmd), ["cat"]);
        assert_eq!(cmd.input_path(), None);
        assert_eq!(cmd.output_path(), Some("out"));
    }

    #[test]
    fn repeated_redirect_last_wins() {
        let cmd = parse("cat < a < b");
        assert_eq!(argv(&cmd), ["cat"]);
        assert_eq!(cmd.input_path(), Some("b"));

        let cmd = parse("echo x > a > b");
        assert_eq!(cmd.output_path(), Some("b"));
    }

    #[test]
    fn whitespace_runs_collapse_to_one_split() {
        let cmd = parse("  grep   -i\tfoo  ");
        assert_eq!(argv(&cmd), ["grep", "-i", "foo"]);
    }
}
