//! Line-oriented front end for the expression recognizer
//!
//! Reads one line from standard input and prints exactly `Accepted` or
//! `Rejected`. Diagnostic detail (rejection reasons, lexing failures) goes
//! to the log on stderr, controlled by `RUST_LOG`; the verdict itself
//! never depends on logging configuration.

use anyhow::Context;
use ll1_core::{expression_grammar, recognize, Verdict};
use std::io::{self, BufRead};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let table = expression_grammar()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading standard input")?;
    let line = line.trim_end_matches(['\n', '\r']);

    let accepted = match recognize(&table, line) {
        Ok(Verdict::Accepted) => true,
        Ok(Verdict::Rejected(rejection)) => {
            tracing::debug!(%rejection, "input rejected");
            false
        }
        // A line that does not even lex is outside the language; the
        // user-visible contract stays binary.
        Err(err) => {
            tracing::debug!(%err, "input rejected before parsing");
            false
        }
    };

    println!("{}", if accepted { "Accepted" } else { "Rejected" });
    Ok(())
}
