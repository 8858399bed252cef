//! REPL Module
//!
//! Reads lines, tokenizes them, and dispatches one command at a time.

use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::commands::{Command, Dispatcher, Flow, Pokedex};

pub const PROMPT: &str = "Pokedex > ";

/// Splits a line on whitespace and lowercases every token.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Command failures are printed and the loop continues; only I/O errors on
/// `input` or `out` end it early.
pub async fn run<I, W, R>(
    input: I,
    out: &mut W,
    dispatcher: &mut Dispatcher<R>,
    pokedex: &mut Pokedex,
) -> std::io::Result<()>
where
    I: AsyncBufRead + Unpin,
    W: Write,
    R: Rng,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            debug!("End of input");
            writeln!(out)?;
            return Ok(());
        };

        let words = clean_input(&line);
        let Some((name, args)) = words.split_first() else {
            continue;
        };

        let Some(command) = Command::parse(name) else {
            writeln!(out, "Unknown command")?;
            continue;
        };

        match dispatcher.execute(command, args, pokedex, out).await {
            Ok(Flow::Exit) => return Ok(()),
            Ok(Flow::Continue) => {}
            Err(e) => {
                debug!(command = command.name(), error = %e, "Command failed");
                writeln!(out, "Error: {}", e)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_input() {
        let cases = [
            ("  hello  world  ", vec!["hello", "world"]),
            ("hello, world!", vec!["hello,", "world!"]),
            (
                "This IS a CapiTal LeTTER",
                vec!["this", "is", "a", "capital", "letter"],
            ),
            ("catch\tPikachu\n", vec!["catch", "pikachu"]),
        ];

        for (input, expected) in cases {
            assert_eq!(clean_input(input), expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_clean_input_blank() {
        assert!(clean_input("").is_empty());
        assert!(clean_input("    ").is_empty());
    }
}
