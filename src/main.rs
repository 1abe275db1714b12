use techshell::Interpreter;

fn main() {
    let mut shell = Interpreter::default();
    if let Err(err) = shell.repl() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
