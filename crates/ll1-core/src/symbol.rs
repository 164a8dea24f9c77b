//! Grammar symbol definitions for the expression language

use std::fmt;

/// A terminal symbol of the expression grammar
///
/// The alphabet is fixed: the identifier terminal `i`, the two operators,
/// the parentheses, and the end marker appended by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// `i`
    Ident,
    /// `+`
    Plus,
    /// `*`
    Star,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `$`, appended to every token stream; never written in the input
    End,
}

impl Terminal {
    /// Number of terminals, for ordinal-indexed tables
    pub const COUNT: usize = 6;

    /// Ordinal of this terminal, in `0..Terminal::COUNT`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map an input character to its terminal, if it is in the alphabet
    ///
    /// The end marker is not spellable: `$` returns `None` like any other
    /// character outside the alphabet.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'i' => Some(Terminal::Ident),
            '+' => Some(Terminal::Plus),
            '*' => Some(Terminal::Star),
            '(' => Some(Terminal::LParen),
            ')' => Some(Terminal::RParen),
            _ => None,
        }
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminal::Ident => write!(f, "i"),
            Terminal::Plus => write!(f, "+"),
            Terminal::Star => write!(f, "*"),
            Terminal::LParen => write!(f, "("),
            Terminal::RParen => write!(f, ")"),
            Terminal::End => write!(f, "$"),
        }
    }
}

/// A non-terminal of the expression grammar
///
/// `Expr`/`Term`/`Factor` carry the precedence levels; `ExprTail` and
/// `TermTail` are the right-recursive continuation symbols that keep the
/// grammar LL(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Expr,
    ExprTail,
    Term,
    TermTail,
    Factor,
}

impl NonTerminal {
    /// Number of non-terminals, for ordinal-indexed tables
    pub const COUNT: usize = 5;

    /// Ordinal of this non-terminal, in `0..NonTerminal::COUNT`
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NonTerminal::Expr => write!(f, "Expr"),
            NonTerminal::ExprTail => write!(f, "ExprTail"),
            NonTerminal::Term => write!(f, "Term"),
            NonTerminal::TermTail => write!(f, "TermTail"),
            NonTerminal::Factor => write!(f, "Factor"),
        }
    }
}

/// A grammar symbol: either a terminal or a non-terminal
///
/// Stack entries and production bodies are `Symbol`s, so the driver
/// dispatches on the tag rather than on any property of the rendered
/// character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(Terminal),
    NonTerminal(NonTerminal),
}

impl Symbol {
    /// Check if this symbol is a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }

    /// Check if this symbol is a non-terminal
    pub fn is_non_terminal(&self) -> bool {
        matches!(self, Symbol::NonTerminal(_))
    }
}

impl From<Terminal> for Symbol {
    fn from(terminal: Terminal) -> Self {
        Symbol::Terminal(terminal)
    }
}

impl From<NonTerminal> for Symbol {
    fn from(non_terminal: NonTerminal) -> Self {
        Symbol::NonTerminal(non_terminal)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Terminal(t) => write!(f, "{}", t),
            Symbol::NonTerminal(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_from_char() {
        assert_eq!(Terminal::from_char('i'), Some(Terminal::Ident));
        assert_eq!(Terminal::from_char('+'), Some(Terminal::Plus));
        assert_eq!(Terminal::from_char('*'), Some(Terminal::Star));
        assert_eq!(Terminal::from_char('('), Some(Terminal::LParen));
        assert_eq!(Terminal::from_char(')'), Some(Terminal::RParen));
    }

    #[test]
    fn test_terminal_from_char_outside_alphabet() {
        assert_eq!(Terminal::from_char('x'), None);
        assert_eq!(Terminal::from_char('2'), None);
        assert_eq!(Terminal::from_char(' '), None);
        // The end marker is appended by the lexer, never read
        assert_eq!(Terminal::from_char('$'), None);
    }

    #[test]
    fn test_terminal_display() {
        assert_eq!(Terminal::Ident.to_string(), "i");
        assert_eq!(Terminal::Plus.to_string(), "+");
        assert_eq!(Terminal::Star.to_string(), "*");
        assert_eq!(Terminal::LParen.to_string(), "(");
        assert_eq!(Terminal::RParen.to_string(), ")");
        assert_eq!(Terminal::End.to_string(), "$");
    }

    #[test]
    fn test_terminal_ordinals_in_bounds() {
        let all = [
            Terminal::Ident,
            Terminal::Plus,
            Terminal::Star,
            Terminal::LParen,
            Terminal::RParen,
            Terminal::End,
        ];
        assert_eq!(all.len(), Terminal::COUNT);
        for (expected, terminal) in all.iter().enumerate() {
            assert_eq!(terminal.index(), expected);
        }
    }

    #[test]
    fn test_non_terminal_ordinals_in_bounds() {
        let all = [
            NonTerminal::Expr,
            NonTerminal::ExprTail,
            NonTerminal::Term,
            NonTerminal::TermTail,
            NonTerminal::Factor,
        ];
        assert_eq!(all.len(), NonTerminal::COUNT);
        for (expected, non_terminal) in all.iter().enumerate() {
            assert_eq!(non_terminal.index(), expected);
        }
    }

    #[test]
    fn test_non_terminal_display() {
        assert_eq!(NonTerminal::Expr.to_string(), "Expr");
        assert_eq!(NonTerminal::Factor.to_string(), "Factor");
    }

    #[test]
    fn test_symbol_tags() {
        let t = Symbol::from(Terminal::Plus);
        let n = Symbol::from(NonTerminal::Expr);
        assert!(t.is_terminal());
        assert!(!t.is_non_terminal());
        assert!(n.is_non_terminal());
        assert!(!n.is_terminal());
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::from(Terminal::Star).to_string(), "*");
        assert_eq!(Symbol::from(NonTerminal::TermTail).to_string(), "TermTail");
    }

    #[test]
    fn test_symbol_equality() {
        assert_eq!(Symbol::from(Terminal::End), Symbol::from(Terminal::End));
        assert_ne!(
            Symbol::from(Terminal::Ident),
            Symbol::from(NonTerminal::Expr)
        );
    }
}
