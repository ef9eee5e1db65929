//! Line-oriented session against a single store.
//!
//! Every invocation of the CLI starts from a fresh store, so changes only
//! outlive one command inside a shell session.

use std::io::{BufRead, IsTerminal, Write};

use anyhow::Result;
use apptbook_core::AppointmentStore;
use apptbook_core::config::AppConfig;
use clap::Parser;
use owo_colors::OwoColorize;

use super::Commands;
use crate::render::render_error;

#[derive(Parser, Debug)]
#[command(name = "apptbook", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

pub fn run(store: &mut AppointmentStore, cfg: &AppConfig) -> Result<()> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();

    if interactive {
        println!(
            "{} {}",
            cfg.clinic_name.bold(),
            "- type a command, `help`, or `exit`".dimmed()
        );
    }

    run_lines(stdin.lock(), store, cfg, interactive)
}

/// Execute each input line as a command. Failures are reported and the
/// session continues; only I/O errors end it early.
pub fn run_lines<R: BufRead>(
    input: R,
    store: &mut AppointmentStore,
    cfg: &AppConfig,
    prompt: bool,
) -> Result<()> {
    let mut lines = input.lines();

    loop {
        if prompt {
            print!("{} ", "apptbook>".cyan());
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let words = match split_words(&line) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("{}", e.red());
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => continue,
            Some("exit" | "quit") => break,
            Some(_) => {}
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(e) => {
                // clap renders help and usage errors itself
                e.print()?;
                continue;
            }
        };

        if matches!(command, Commands::Shell) {
            eprintln!("{}", "Already in a shell session".yellow());
            continue;
        }

        if let Err(e) = super::run(command, store, cfg) {
            eprintln!("{}", render_error(&e));
        }
    }

    Ok(())
}

/// Split a line into words, honoring single and double quotes so names
/// with spaces can be passed: `list --doctor "Dr. Amit Patel"`.
pub fn split_words(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
