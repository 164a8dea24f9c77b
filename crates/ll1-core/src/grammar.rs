//! Productions and the arithmetic-expression grammar
//!
//! The grammar recognized by the reference table:
//!
//! ```text
//! Expr     -> Term ExprTail
//! ExprTail -> + Term ExprTail | ε
//! Term     -> Factor TermTail
//! TermTail -> * Factor TermTail | ε
//! Factor   -> ( Expr ) | i
//! ```
//!
//! Left recursion is factored into the `*Tail` symbols, so the table has at
//! most one production per (non-terminal, lookahead) cell.

use crate::symbol::{NonTerminal, Symbol, Terminal};
use crate::table::{GrammarError, ParseTable};
use std::fmt;

/// The right-hand side of a grammar rule
///
/// An empty body is the epsilon production: the driver pops the
/// non-terminal and pushes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Production {
    symbols: Vec<Symbol>,
}

impl Production {
    /// Create a production from its body
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// The epsilon production
    pub fn epsilon() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Check if this is the epsilon production
    pub fn is_epsilon(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The body, leftmost symbol first
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_epsilon() {
            return write!(f, "ε");
        }
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

fn t(terminal: Terminal) -> Symbol {
    Symbol::Terminal(terminal)
}

fn n(non_terminal: NonTerminal) -> Symbol {
    Symbol::NonTerminal(non_terminal)
}

/// Build the parse table for the arithmetic-expression grammar
///
/// Cells follow the grammar above, one entry per non-terminal and
/// predicting lookahead. The table is deterministic and the returned
/// `Result` only exists because `define` checks for conflicting cells;
/// for this grammar every `define` succeeds.
pub fn expression_grammar() -> Result<ParseTable, GrammarError> {
    use NonTerminal::*;
    use Terminal::*;

    let mut table = ParseTable::new(Expr);

    // Expr -> Term ExprTail
    let expr = || Production::new(vec![n(Term), n(ExprTail)]);
    table.define(Expr, Ident, expr())?;
    table.define(Expr, LParen, expr())?;

    // ExprTail -> + Term ExprTail | ε
    let expr_tail = Production::new(vec![t(Plus), n(Term), n(ExprTail)]);
    table.define(ExprTail, Plus, expr_tail)?;
    table.define(ExprTail, RParen, Production::epsilon())?;
    table.define(ExprTail, End, Production::epsilon())?;

    // Term -> Factor TermTail
    let term = || Production::new(vec![n(Factor), n(TermTail)]);
    table.define(Term, Ident, term())?;
    table.define(Term, LParen, term())?;

    // TermTail -> * Factor TermTail | ε
    let term_tail = Production::new(vec![t(Star), n(Factor), n(TermTail)]);
    table.define(TermTail, Star, term_tail)?;
    table.define(TermTail, Plus, Production::epsilon())?;
    table.define(TermTail, RParen, Production::epsilon())?;
    table.define(TermTail, End, Production::epsilon())?;

    // Factor -> ( Expr ) | i
    table.define(Factor, Ident, Production::new(vec![t(Ident)]))?;
    table.define(
        Factor,
        LParen,
        Production::new(vec![t(LParen), n(Expr), t(RParen)]),
    )?;

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_display() {
        let production = Production::new(vec![t(Terminal::Plus), n(NonTerminal::Term)]);
        assert_eq!(production.to_string(), "+ Term");
        assert_eq!(Production::epsilon().to_string(), "ε");
    }

    #[test]
    fn test_epsilon_has_empty_body() {
        assert!(Production::epsilon().is_epsilon());
        assert!(Production::epsilon().symbols().is_empty());
        assert!(!Production::new(vec![t(Terminal::Ident)]).is_epsilon());
    }

    #[test]
    fn test_expression_grammar_builds() {
        let table = expression_grammar().expect("reference table has no conflicting cells");
        assert_eq!(table.start(), NonTerminal::Expr);
    }

    #[test]
    fn test_expression_grammar_cells() {
        let table = expression_grammar().unwrap();

        let expr_on_ident = table.get(NonTerminal::Expr, Terminal::Ident).unwrap();
        assert_eq!(expr_on_ident.to_string(), "Term ExprTail");

        let factor_on_lparen = table.get(NonTerminal::Factor, Terminal::LParen).unwrap();
        assert_eq!(factor_on_lparen.to_string(), "( Expr )");

        let factor_on_ident = table.get(NonTerminal::Factor, Terminal::Ident).unwrap();
        assert_eq!(factor_on_ident.symbols(), &[t(Terminal::Ident)]);
    }

    #[test]
    fn test_expression_grammar_epsilon_cells() {
        let table = expression_grammar().unwrap();

        for lookahead in [Terminal::RParen, Terminal::End] {
            let production = table.get(NonTerminal::ExprTail, lookahead).unwrap();
            assert!(production.is_epsilon());
        }
        for lookahead in [Terminal::Plus, Terminal::RParen, Terminal::End] {
            let production = table.get(NonTerminal::TermTail, lookahead).unwrap();
            assert!(production.is_epsilon());
        }
    }

    #[test]
    fn test_expression_grammar_undefined_cells() {
        let table = expression_grammar().unwrap();

        // Expressions cannot start with an operator or a closing paren
        assert!(table.get(NonTerminal::Expr, Terminal::Plus).is_none());
        assert!(table.get(NonTerminal::Expr, Terminal::RParen).is_none());
        assert!(table.get(NonTerminal::Expr, Terminal::End).is_none());
        // A factor cannot begin at an operator or the end marker
        assert!(table.get(NonTerminal::Factor, Terminal::Plus).is_none());
        assert!(table.get(NonTerminal::Factor, Terminal::Star).is_none());
        assert!(table.get(NonTerminal::Factor, Terminal::End).is_none());
        // The tails never predict on the tokens that start a factor
        assert!(table.get(NonTerminal::ExprTail, Terminal::Ident).is_none());
        assert!(table.get(NonTerminal::TermTail, Terminal::LParen).is_none());
    }
}
