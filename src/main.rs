use std::io::{self, BufRead, Write};

use evalix_rs::Evaluator;
use log::debug;

fn print_banner() {
    println!("========================================");
    println!("  evalix - expression calculator");
    println!("========================================");
    println!();
}

fn print_help() {
    println!("Available Commands:");
    println!("  help       - Show this help message");
    println!("  exit/quit  - Exit the calculator");
    println!("  clear      - Clear the screen");
    println!("\nExamples:");
    println!("  2 + 2 * 3");
    println!("  sin(pi/2)");
    println!("  sqrt(144)");
    println!("  ln(e^2)");
    println!();
}

fn main() {
    pretty_env_logger::init();

    print_banner();
    print_help();

    let evaluator = Evaluator::with_builtins();
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        debug!("input: {input:?}");

        // Command vocabulary is filtered here; the evaluator never sees it.
        match input {
            "exit" | "quit" => {
                println!("Goodbye!");
                break;
            }
            "help" => {
                print_help();
                continue;
            }
            "clear" => {
                print!("\x1b[2J\x1b[1;1H");
                print_banner();
                continue;
            }
            _ => {}
        }

        match evaluator.evaluate(input) {
            Ok(value) => println!("= {value}"),
            Err(err) => println!("Error: {err}"),
        }
    }
}
