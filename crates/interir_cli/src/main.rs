use std::io::{self, BufRead, IsTerminal};
use std::process;

use interir_core::Session;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Check for --help / -h flag
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    // Check for --vi and --empty flags
    let vi_mode = args.iter().any(|a| a == "--vi");
    let empty = args.iter().any(|a| a == "--empty");
    let args: Vec<&str> = args
        .iter()
        .filter(|a| *a != "--vi" && *a != "--empty")
        .map(|s| s.as_str())
        .collect();

    match args.first().copied() {
        Some("-c") => {
            if args.len() != 2 {
                eprintln!("usage: interir -c <commands>");
                process::exit(1);
            }
            exec_commands("-c", args[1]);
        }
        Some("run") => {
            if args.len() != 2 {
                eprintln!("usage: interir run <script>");
                process::exit(1);
            }
            run_script(args[1]);
        }
        Some(other) => {
            eprintln!("unknown subcommand: {}", other);
            eprintln!("usage: interir [--vi] [--empty] [-c <commands> | run <script>]");
            process::exit(1);
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                let session = if empty {
                    Session::new()
                } else {
                    Session::with_sample_layout()
                };
                interir_cli::repl::run_repl(session, vi_mode);
            } else {
                run_pipe();
            }
        }
    }
}

/// Pipe mode: read raw lines from stdin, no reedline.
fn run_pipe() {
    let stdin = io::stdin();
    let mut session = Session::new();
    let mut had_error = false;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("read error: {}", e);
                process::exit(1);
            }
        };

        let result = session.exec(&line);

        for out in session.take_output() {
            println!("{}", out);
        }

        if let Err(e) = result {
            eprintln!("error: {}", e);
            had_error = true;
        }

        if !session.is_running() {
            break;
        }
    }

    if had_error {
        process::exit(1);
    }
}

/// Execute a command script file.
fn run_script(path: &str) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("cannot read '{}': {}", path, e);
            process::exit(1);
        }
    };
    exec_commands(path, &content);
}

/// Run newline-separated commands from a labeled source.
fn exec_commands(label: &str, content: &str) {
    let mut session = Session::new();
    let mut had_error = false;

    for (lineno, line) in content.lines().enumerate() {
        let result = session.exec(line);

        for out in session.take_output() {
            println!("{}", out);
        }

        if let Err(e) = result {
            eprintln!("{}:{}: error: {}", label, lineno + 1, e);
            had_error = true;
        }

        if !session.is_running() {
            break;
        }
    }

    if had_error {
        process::exit(1);
    }
}

/// Print CLI usage.
fn print_usage() {
    println!(
        "\
interir — interior design command interpreter

USAGE:
  interir [--vi] [--empty]      Start an interactive session
  interir -c <commands>         Execute newline-separated commands inline
  interir run <script>          Execute a command script file
  echo <commands> | interir     Pipe mode (no line editing)

FLAGS:
  --vi                          Use vi keybindings in the interactive session
  --empty                       Start without the sample layout
  -h, --help                    Show this help

The interactive session starts with a sample layout (three rooms, the
Living Room furnished); scripts and pipes always start empty. Type 'help'
inside a session for the command list."
    );
}
