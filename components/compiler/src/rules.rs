//! Pratt parse rules
//!
//! Every token kind maps to exactly one [`ParseRule`]. The mapping is an
//! exhaustive `match`, so a new token kind cannot be added without deciding
//! its rule.

use crate::token::TokenKind;

/// Binding power, loosest to tightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Not an operator
    None,
    /// `=`
    Assignment,
    /// `or`
    Or,
    /// `and`
    And,
    /// `==` `!=`
    Equality,
    /// `<` `>` `<=` `>=`
    Comparison,
    /// `+` `-`
    Term,
    /// `*` `/`
    Factor,
    /// `!` `-`
    Unary,
    /// `.` `()`
    Call,
    /// Literals and grouping
    Primary,
}

impl Precedence {
    /// The next tighter level; `Primary` is its own successor
    pub fn next(self) -> Self {
        match self {
            Precedence::None => Precedence::Assignment,
            Precedence::Assignment => Precedence::Or,
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Equality,
            Precedence::Equality => Precedence::Comparison,
            Precedence::Comparison => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary => Precedence::Call,
            Precedence::Call | Precedence::Primary => Precedence::Primary,
        }
    }
}

/// Handler for a token in prefix position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// The token cannot start an expression
    None,
    /// `( expr )`
    Grouping,
    /// `-x` or `!x`
    Unary,
    /// Number literal
    Number,
    /// String literal
    String,
    /// `true`, `false` or `nil`
    Literal,
}

/// Handler for a token in infix position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Infix {
    /// The token is not an infix operator
    None,
    /// Binary operator
    Binary,
}

/// Parse rule for one token kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseRule {
    /// Prefix handler
    pub prefix: Prefix,
    /// Infix handler
    pub infix: Infix,
    /// Binding power as an infix operator
    pub precedence: Precedence,
}

impl ParseRule {
    const fn new(prefix: Prefix, infix: Infix, precedence: Precedence) -> Self {
        Self {
            prefix,
            infix,
            precedence,
        }
    }

    const NONE: ParseRule = ParseRule::new(Prefix::None, Infix::None, Precedence::None);

    /// Look up the rule for a token kind
    pub fn for_kind(kind: TokenKind) -> ParseRule {
        use TokenKind::*;

        match kind {
            LeftParen => Self::new(Prefix::Grouping, Infix::None, Precedence::None),
            Minus => Self::new(Prefix::Unary, Infix::Binary, Precedence::Term),
            Plus => Self::new(Prefix::None, Infix::Binary, Precedence::Term),
            Slash | Star => Self::new(Prefix::None, Infix::Binary, Precedence::Factor),
            Bang => Self::new(Prefix::Unary, Infix::None, Precedence::None),
            BangEqual | EqualEqual => Self::new(Prefix::None, Infix::Binary, Precedence::Equality),
            Greater | GreaterEqual | Less | LessEqual => {
                Self::new(Prefix::None, Infix::Binary, Precedence::Comparison)
            }
            String => Self::new(Prefix::String, Infix::None, Precedence::None),
            Number => Self::new(Prefix::Number, Infix::None, Precedence::None),
            False | Nil | True => Self::new(Prefix::Literal, Infix::None, Precedence::None),
            RightParen | LeftBrace | RightBrace | Comma | Dot | Semicolon | Equal | Identifier
            | And | Class | Else | For | Fun | If | Or | Print | Return | Super | This | Var
            | While | Error | Eof => Self::NONE,
        }
    }
}
