//! Lexer for the expression language
//!
//! Every meaningful input character is one terminal, so lexing is a
//! per-character mapping plus the appended end marker. Characters outside
//! the alphabet fail here, with a column, before the driver ever runs.

use crate::symbol::Terminal;
use thiserror::Error;

/// Lexing error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character with no terminal in the alphabet
    #[error("unrecognized character {ch:?} at column {column}")]
    UnrecognizedCharacter { ch: char, column: usize },

    /// An end marker supplied inside a hand-built terminal sequence; the
    /// stream appends its own
    #[error("end marker embedded at position {position}")]
    EmbeddedEndMarker { position: usize },
}

/// A tokenized input line: terminals plus exactly one trailing end marker
///
/// Streams are only built by [`tokenize`] or [`TokenStream::from_terminals`],
/// both of which append the end marker themselves, so every stream the
/// driver sees is well terminated with no symbol elided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStream {
    terminals: Vec<Terminal>,
}

impl TokenStream {
    /// Build a stream from bare terminals, appending the end marker
    ///
    /// Rejects a sequence that already contains the end marker.
    pub fn from_terminals(
        terminals: impl IntoIterator<Item = Terminal>,
    ) -> Result<Self, LexError> {
        let mut terminals: Vec<Terminal> = terminals.into_iter().collect();
        if let Some(position) = terminals.iter().position(|&t| t == Terminal::End) {
            return Err(LexError::EmbeddedEndMarker { position });
        }
        terminals.push(Terminal::End);
        Ok(Self { terminals })
    }

    /// Number of terminals, end marker included
    pub fn len(&self) -> usize {
        self.terminals.len()
    }

    /// A stream is never empty; it holds at least the end marker
    pub fn is_empty(&self) -> bool {
        self.terminals.is_empty()
    }

    /// The terminal under the cursor
    ///
    /// Reads past the end saturate to the end marker, so a lookahead is
    /// always available.
    pub fn terminal_at(&self, index: usize) -> Terminal {
        self.terminals.get(index).copied().unwrap_or(Terminal::End)
    }

    /// All terminals, end marker last
    pub fn terminals(&self) -> &[Terminal] {
        &self.terminals
    }
}

/// Tokenize one input line
///
/// Maps each character to its terminal and appends the end marker. The
/// line must contain alphabet characters only: whitespace is not skipped,
/// and `$` is as unrecognized as any other foreign character.
pub fn tokenize(line: &str) -> Result<TokenStream, LexError> {
    let mut terminals = Vec::with_capacity(line.len() + 1);
    for (i, ch) in line.chars().enumerate() {
        match Terminal::from_char(ch) {
            Some(terminal) => terminals.push(terminal),
            None => return Err(LexError::UnrecognizedCharacter { ch, column: i + 1 }),
        }
    }
    terminals.push(Terminal::End);
    Ok(TokenStream { terminals })
}
