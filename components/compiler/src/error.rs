//! Compile error helpers

use core_types::{CompileError, ErrorLocation};

use crate::token::{Token, TokenKind};

/// Build a compile error pointing at `token`
///
/// End-of-input reports "at end"; scanner error tokens report no location
/// because their lexeme is already the message.
pub fn error_at(token: &Token<'_>, message: impl Into<String>) -> CompileError {
    let location = match token.kind {
        TokenKind::Eof => ErrorLocation::AtEnd,
        TokenKind::Error => ErrorLocation::Unspecified,
        _ => ErrorLocation::At(token.lexeme.to_string()),
    };
    CompileError {
        line: token.line,
        location,
        message: message.into(),
    }
}
