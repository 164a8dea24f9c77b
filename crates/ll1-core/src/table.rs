//! The LL(1) parse table
//!
//! A `ParseTable` maps (non-terminal, lookahead terminal) pairs to the
//! single production the driver must expand. It is hand-authored, built
//! once, and read-only thereafter; repeated parses may share one table
//! freely.

use crate::grammar::Production;
use crate::symbol::{NonTerminal, Terminal};
use thiserror::Error;

/// Error raised while authoring a parse table
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// Two productions were installed for the same cell. A table with such
    /// a cell does not describe an LL(1) grammar.
    #[error("ambiguous table entry for {non_terminal} on lookahead {lookahead}")]
    AmbiguousEntry {
        non_terminal: NonTerminal,
        lookahead: Terminal,
    },
}

/// Table driving the predictive parser
///
/// Cells are addressed by symbol ordinals into a fixed two-dimensional
/// array; an empty cell means the grammar accepts no continuation of that
/// non-terminal under that lookahead.
pub struct ParseTable {
    start: NonTerminal,
    cells: [[Option<Production>; Terminal::COUNT]; NonTerminal::COUNT],
}

impl ParseTable {
    /// Create an empty table for a grammar with the given start symbol
    pub fn new(start: NonTerminal) -> Self {
        Self {
            start,
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }

    /// The grammar's start symbol
    pub fn start(&self) -> NonTerminal {
        self.start
    }

    /// Install the production to expand for `non_terminal` under `lookahead`
    ///
    /// Defining a cell twice is an LL(1) conflict and is rejected, so a
    /// mis-authored table fails at construction rather than mis-parsing
    /// later.
    pub fn define(
        &mut self,
        non_terminal: NonTerminal,
        lookahead: Terminal,
        production: Production,
    ) -> Result<(), GrammarError> {
        let cell = &mut self.cells[non_terminal.index()][lookahead.index()];
        if cell.is_some() {
            return Err(GrammarError::AmbiguousEntry {
                non_terminal,
                lookahead,
            });
        }
        *cell = Some(production);
        Ok(())
    }

    /// Look up the production for `non_terminal` under `lookahead`
    ///
    /// `None` means the pair has no entry: a syntax error at that
    /// lookahead.
    pub fn get(&self, non_terminal: NonTerminal, lookahead: Terminal) -> Option<&Production> {
        self.cells[non_terminal.index()][lookahead.index()].as_ref()
    }
}
