//! The predictive-parser driver
//!
//! A table-driven stack automaton: the stack starts as
//! `[end marker, start symbol]` and each step either matches the terminal
//! on top of the stack against the lookahead or replaces the non-terminal
//! on top with the production the table predicts. The verdict is
//! `Accepted` exactly when the stack empties as the end marker is
//! consumed.

use crate::lexer::TokenStream;
use crate::symbol::{NonTerminal, Symbol, Terminal};
use crate::table::ParseTable;
use thiserror::Error;

/// Why the driver rejected an input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The terminal on top of the stack is not the lookahead
    #[error("expected {expected} but found {found}")]
    TerminalMismatch { expected: Terminal, found: Terminal },

    /// The table has no production for this pair; the grammar accepts no
    /// such continuation
    #[error("no production for {non_terminal} on lookahead {lookahead}")]
    NoTableEntry {
        non_terminal: NonTerminal,
        lookahead: Terminal,
    },

    /// The derivation completed with input still unconsumed
    #[error("derivation complete with {remaining} token(s) unconsumed")]
    UnconsumedInput { remaining: usize },

    /// The stack emptied before the end marker was consumed
    #[error("stack emptied before the input was consumed")]
    PrematureStackEmpty,
}

/// A rejection, positioned for diagnostics
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{reason} (token {cursor}, step {step})")]
pub struct Rejection {
    /// The triggering condition
    pub reason: RejectReason,
    /// Cursor position in the token stream when the driver stopped
    pub cursor: usize,
    /// Driver step at which the rejection occurred
    pub step: usize,
}

/// The binary outcome of one parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    /// Check if this verdict is an acceptance
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Predictive parser over a borrowed table
///
/// The driver holds no state between runs: stack and cursor live inside
/// [`Driver::run`], so one driver (and one table) can serve any number of
/// parses and two runs over the same input always agree.
pub struct Driver<'t> {
    table: &'t ParseTable,
}

impl<'t> Driver<'t> {
    /// Create a driver over a table
    pub fn new(table: &'t ParseTable) -> Self {
        Self { table }
    }

    /// Run the automaton over one token stream to a verdict
    ///
    /// Rejections are ordinary return values; no input can make this
    /// panic or error fatally.
    pub fn run(&self, input: &TokenStream) -> Verdict {
        let mut stack: Vec<Symbol> = vec![
            Symbol::Terminal(Terminal::End),
            Symbol::NonTerminal(self.table.start()),
        ];
        let mut cursor = 0usize;
        let mut step = 0usize;

        while let Some(&top) = stack.last() {
            let lookahead = input.terminal_at(cursor);
            step += 1;

            match top {
                // The bottom marker surfacing with input left means the
                // start symbol has been fully derived too early.
                Symbol::Terminal(Terminal::End) if lookahead != Terminal::End => {
                    let remaining = input.len() - cursor - 1;
                    let rejection = Rejection {
                        reason: RejectReason::UnconsumedInput { remaining },
                        cursor,
                        step,
                    };
                    tracing::debug!(%rejection, "input rejected");
                    return Verdict::Rejected(rejection);
                }
                Symbol::Terminal(expected) if expected == lookahead => {
                    tracing::trace!(terminal = %expected, cursor, "match");
                    stack.pop();
                    cursor += 1;
                }
                Symbol::Terminal(expected) => {
                    let rejection = Rejection {
                        reason: RejectReason::TerminalMismatch {
                            expected,
                            found: lookahead,
                        },
                        cursor,
                        step,
                    };
                    tracing::debug!(%rejection, "input rejected");
                    return Verdict::Rejected(rejection);
                }
                Symbol::NonTerminal(non_terminal) => {
                    let Some(production) = self.table.get(non_terminal, lookahead) else {
                        let rejection = Rejection {
                            reason: RejectReason::NoTableEntry {
                                non_terminal,
                                lookahead,
                            },
                            cursor,
                            step,
                        };
                        tracing::debug!(%rejection, "input rejected");
                        return Verdict::Rejected(rejection);
                    };
                    tracing::trace!(%non_terminal, %lookahead, %production, "expand");
                    stack.pop();
                    // Push the body reversed so its leftmost symbol is the
                    // new top; epsilon pushes nothing and leaves the
                    // cursor alone.
                    for &symbol in production.symbols().iter().rev() {
                        stack.push(symbol);
                    }
                }
            }
        }

        if cursor == input.len() {
            Verdict::Accepted
        } else {
            let rejection = Rejection {
                reason: RejectReason::PrematureStackEmpty,
                cursor,
                step,
            };
            tracing::debug!(%rejection, "input rejected");
            Verdict::Rejected(rejection)
        }
    }
}
