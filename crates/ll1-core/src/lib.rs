//! Table-driven LL(1) predictive parsing for a fixed expression grammar
//!
//! The crate recognizes the language of arithmetic expressions over the
//! single-character terminals `i + * ( )`: a line is tokenized, terminated
//! with an end marker, and driven through a stack automaton against a
//! precomputed parse table. The result is a binary [`Verdict`]; every
//! failure is a deterministic rejection, never a process error.

pub mod driver;
pub mod grammar;
pub mod lexer;
pub mod symbol;
pub mod table;

pub use driver::{Driver, RejectReason, Rejection, Verdict};
pub use grammar::{expression_grammar, Production};
pub use lexer::{tokenize, LexError, TokenStream};
pub use symbol::{NonTerminal, Symbol, Terminal};
pub use table::{GrammarError, ParseTable};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("grammar error: {0}")]
    Grammar(#[from] GrammarError),

    #[error("lex error: {0}")]
    Lex(#[from] LexError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Tokenize a line and run it through the driver in one call
///
/// A lexing failure is an `Err`; a line that lexes always gets a verdict.
pub fn recognize(table: &ParseTable, line: &str) -> Result<Verdict> {
    let stream = tokenize(line)?;
    Ok(Driver::new(table).run(&stream))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognize_member() {
        let table = expression_grammar().unwrap();
        assert!(recognize(&table, "i+i*i").unwrap().is_accepted());
    }

    #[test]
    fn test_recognize_non_member() {
        let table = expression_grammar().unwrap();
        assert!(!recognize(&table, "i+").unwrap().is_accepted());
    }

    #[test]
    fn test_recognize_lex_failure_is_an_error() {
        let table = expression_grammar().unwrap();
        let err = recognize(&table, "a+b").unwrap_err();
        assert!(matches!(err, Error::Lex(_)));
    }
}
