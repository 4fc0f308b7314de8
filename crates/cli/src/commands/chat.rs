//! `cryochat chat` — Interactive conversation mode.

use std::io::Write;

use cryochat_agent::Session;
use cryochat_core::error::SessionError;
use cryochat_core::Complexity;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::render::print_reply;

/// What a line of terminal input asks for.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Question(String),
    SetComplexity(Complexity),
    FollowUp(usize),
    Help,
}

fn parse_input(line: &str) -> Input {
    match line {
        "/simple" | "/intuitive" => Input::SetComplexity(Complexity::Simple),
        "/rigorous" => Input::SetComplexity(Complexity::Rigorous),
        "/help" | "?" => Input::Help,
        _ => match line.strip_prefix('/').and_then(|n| n.parse::<usize>().ok()) {
            Some(n) if n > 0 => Input::FollowUp(n),
            _ => Input::Question(line.to_string()),
        },
    }
}

fn is_exit(line: &str) -> bool {
    matches!(line, "exit" | "quit" | "/exit" | "/quit" | ":q")
}

/// Read stdin lines on a background task until EOF or an exit command.
fn spawn_stdin_reader() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(32);

    tokio::spawn(async move {
        let mut lines = BufReader::new(io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    if is_exit(&line) {
                        break;
                    }
                    if tx.send(line).await.is_err() {
                        break;
                    }
                }
                Ok(None) => break, // EOF (Ctrl+D)
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to read from stdin");
                    break;
                }
            }
        }
    });

    rx
}

/// The `n`th suggested follow-up of the latest reply.
fn follow_up(session: &Session, n: usize) -> Option<String> {
    session
        .last_reply()
        .and_then(|m| m.related_questions.as_ref())
        .and_then(|questions| questions.get(n - 1))
        .cloned()
}

fn print_help() {
    println!();
    println!("  /simple, /rigorous   switch the explanation style");
    println!("  /1, /2, ...          ask a suggested follow-up");
    println!("  exit                 leave the conversation");
    println!();
}

fn prompt() -> std::io::Result<()> {
    print!("  You > ");
    std::io::stdout().flush()
}

pub async fn run(
    complexity: Option<Complexity>,
    no_delay: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = super::load_config()?;
    let complexity = complexity.unwrap_or(config.complexity);
    let responder = super::with_retries(super::thesis_responder(&config, no_delay), &config);
    let mut session = Session::new(complexity);

    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║     Cryo-FDSOI Thesis Assistant — cryochat    ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    println!("  Mode:  {} ({})", session.complexity().label(), session.complexity());
    println!("  Type /help for commands, 'exit' or Ctrl+D to quit.");

    if let Some(greeting) = session.transcript().first() {
        print_reply(greeting, &config.display);
    }

    let mut rx = spawn_stdin_reader();
    prompt()?;

    while let Some(line) = rx.recv().await {
        let question = match parse_input(&line) {
            Input::Question(q) => q,
            Input::FollowUp(n) => match follow_up(&session, n) {
                Some(q) => {
                    println!("  You > {q}");
                    q
                }
                None => {
                    eprintln!("  [Error] There is no follow-up /{n}");
                    prompt()?;
                    continue;
                }
            },
            Input::SetComplexity(tier) => {
                session.set_complexity(tier);
                println!("  Mode switched to {} ({tier})", tier.label());
                prompt()?;
                continue;
            }
            Input::Help => {
                print_help();
                prompt()?;
                continue;
            }
        };

        let turn = match session.begin(&question) {
            Ok(turn) => turn,
            Err(e) => {
                eprintln!("  [Error] {e}");
                prompt()?;
                continue;
            }
        };

        eprint!("  ...");

        let outcome = {
            let pending = responder.respond(turn.query(), turn.complexity());
            tokio::pin!(pending);

            // Lines typed while the reply is pending are refused, not queued.
            loop {
                tokio::select! {
                    result = &mut pending => break result,
                    Some(extra) = rx.recv() => {
                        eprintln!("\r  [Busy] {} (ignored: {extra})", SessionError::Busy);
                    }
                }
            }
        };

        eprint!("\r     \r");

        match outcome {
            Ok(reply) => {
                print_reply(&reply, &config.display);
                session.complete(turn, reply);
            }
            Err(e) => {
                session.fail(turn);
                eprintln!("  [Error] {e}");
                println!();
            }
        }

        prompt()?;
    }

    println!();
    println!("  Goodbye! 👋");
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(parse_input("/rigorous"), Input::SetComplexity(Complexity::Rigorous));
        assert_eq!(parse_input("/simple"), Input::SetComplexity(Complexity::Simple));
        assert_eq!(parse_input("/2"), Input::FollowUp(2));
        assert_eq!(parse_input("/help"), Input::Help);
    }

    #[test]
    fn anything_else_is_a_question() {
        assert_eq!(
            parse_input("What is the mobility law?"),
            Input::Question("What is the mobility law?".into())
        );
        assert_eq!(parse_input("/0"), Input::Question("/0".into()));
        assert_eq!(parse_input("/unknown"), Input::Question("/unknown".into()));
    }

    #[test]
    fn exit_words() {
        for word in ["exit", "quit", "/exit", "/quit", ":q"] {
            assert!(is_exit(word));
        }
        assert!(!is_exit("exit now"));
    }

    #[test]
    fn follow_up_comes_from_latest_reply() {
        let session = Session::default();
        assert_eq!(
            follow_up(&session, 1).as_deref(),
            Some("Why does Maxwell-Boltzmann statistics break down at 4K?")
        );
        assert!(follow_up(&session, 9).is_none());
    }
}
