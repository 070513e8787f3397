// Copyright (c) 2026 - present gotest2action contributors
// SPDX-License-Identifier: MIT

//! Syntax-only scanning of Go source files
//!
//! This is not a Go parser. It tokenizes a file, checks the structure a
//! parser would reject outright (missing package clause, broken literals or
//! comments, unbalanced brackets) and reports every top-level function and
//! method declaration with the line of its `func` keyword.
//!
//! A `func` keyword starts a declaration only at bracket depth zero and at
//! the start of a top-level declaration, which in Go means after an explicit
//! `;` or after a newline that ends the previous declaration through
//! automatic semicolon insertion.

use logos::{Lexer, Logos};

use crate::error::ScanError;

/// A top-level `func` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuncDecl {
    /// Function or method name
    pub name: String,
    /// 1-based line of the `func` keyword
    pub line: usize,
    /// Whether the declaration has a receiver
    pub is_method: bool,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\f]+")]
enum Token {
    #[token("\n")]
    Newline,

    #[regex(r"//[^\n]*")]
    LineComment,

    /// Runs through the closing `*/`, or to the end of input when there is none
    #[token("/*", block_comment)]
    BlockComment,

    #[token("package")]
    Package,

    #[token("func")]
    Func,

    // Keywords after which a newline ends the statement
    #[token("break")]
    #[token("continue")]
    #[token("fallthrough")]
    #[token("return")]
    StatementKeyword,

    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*")]
    Ident,

    #[regex(r"[0-9][0-9A-Za-z_.]*")]
    Number,

    #[regex(r#""([^"\\\n]|\\[^\n])*""#)]
    StringLit,

    #[regex(r"`[^`]*`")]
    RawStringLit,

    #[regex(r"'([^'\\\n]|\\[^\n])+'")]
    RuneLit,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    #[token(";")]
    Semicolon,

    #[token("++")]
    #[token("--")]
    IncDec,

    #[regex(r"[-+*/%&|^<>=!:.,~]")]
    Operator,
}

fn block_comment(lex: &mut Lexer<Token>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
}

impl Token {
    /// Whether a newline directly after this token inserts a semicolon
    fn ends_line(self) -> bool {
        matches!(
            self,
            Self::Ident
                | Self::Number
                | Self::StringLit
                | Self::RawStringLit
                | Self::RuneLit
                | Self::StatementKeyword
                | Self::IncDec
                | Self::RParen
                | Self::RBracket
                | Self::RBrace
        )
    }

    fn opening_bracket(self) -> Option<char> {
        match self {
            Self::LParen => Some('('),
            Self::LBracket => Some('['),
            Self::LBrace => Some('{'),
            _ => None,
        }
    }

    fn closing_bracket(self) -> Option<(char, char)> {
        match self {
            Self::RParen => Some(('(', ')')),
            Self::RBracket => Some(('[', ']')),
            Self::RBrace => Some(('{', '}')),
            _ => None,
        }
    }
}

/// Where the scanner is in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Clause {
    ExpectPackage,
    ExpectPackageName,
    Body,
}

/// Progress through a `func` declaration header
#[derive(Debug, Clone, Copy)]
enum Header {
    /// Just saw `func`
    Func { line: usize },
    /// Inside the receiver parentheses
    Receiver { line: usize },
    /// Receiver closed, the name comes next
    AfterReceiver { line: usize },
}

/// Scan Go source and return its top-level function and method declarations
///
/// Declarations are returned in source order.
///
/// # Errors
///
/// Returns a `ScanError` if the source is not syntactically plausible Go:
/// no leading package clause, a character that starts no token, an
/// unterminated string, rune or comment, or unbalanced brackets.
pub fn function_declarations(source: &str) -> Result<Vec<FuncDecl>, ScanError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);

    let mut decls = Vec::new();
    let mut brackets: Vec<(char, usize)> = Vec::new();
    let mut clause = Clause::ExpectPackage;
    let mut header: Option<Header> = None;
    let mut prev: Option<Token> = None;
    let mut newline_since_prev = false;
    let mut line = 1;

    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        let token_line = line;
        line += slice.bytes().filter(|&b| b == b'\n').count();

        let Ok(token) = result else {
            return Err(ScanError::UnexpectedCharacter {
                line: token_line,
                text: slice.to_string(),
            });
        };

        match token {
            Token::Newline => {
                newline_since_prev = true;
                continue;
            }
            Token::LineComment => continue,
            Token::BlockComment if !is_closed_comment(slice) => {
                return Err(ScanError::UnterminatedComment { line: token_line });
            }
            // A comment spanning lines acts like a newline.
            Token::BlockComment => {
                newline_since_prev |= slice.contains('\n');
                continue;
            }
            _ => {}
        }

        match clause {
            Clause::ExpectPackage if token == Token::Package => {
                clause = Clause::ExpectPackageName;
            }
            Clause::ExpectPackageName if token == Token::Ident => {
                clause = Clause::Body;
            }
            Clause::ExpectPackage | Clause::ExpectPackageName => {
                return Err(ScanError::MissingPackageClause { line: token_line });
            }
            Clause::Body => {}
        }

        if let Some(open) = token.opening_bracket() {
            brackets.push((open, token_line));
        } else if let Some((open, close)) = token.closing_bracket() {
            match brackets.pop() {
                Some((top, _)) if top == open => {}
                _ => {
                    return Err(ScanError::UnbalancedBracket {
                        line: token_line,
                        bracket: close,
                    });
                }
            }
        }

        header = match (header, token) {
            (Some(Header::Func { line }), Token::Ident)
            | (Some(Header::AfterReceiver { line }), Token::Ident) => {
                decls.push(FuncDecl {
                    name: slice.to_string(),
                    line,
                    is_method: matches!(header, Some(Header::AfterReceiver { .. })),
                });
                None
            }
            (Some(Header::Func { line }), Token::LParen) => Some(Header::Receiver { line }),
            (Some(Header::Receiver { line }), Token::RParen) if brackets.is_empty() => {
                Some(Header::AfterReceiver { line })
            }
            (Some(receiver @ Header::Receiver { .. }), _) => Some(receiver),
            (None, Token::Func)
                if brackets.is_empty() && starts_declaration(prev, newline_since_prev) =>
            {
                Some(Header::Func { line: token_line })
            }
            _ => None,
        };

        prev = Some(token);
        newline_since_prev = false;
    }

    if let Some((bracket, line)) = brackets.pop() {
        return Err(ScanError::UnclosedBracket { line, bracket });
    }
    if clause != Clause::Body {
        return Err(ScanError::MissingPackageClause { line });
    }

    Ok(decls)
}

fn is_closed_comment(slice: &str) -> bool {
    slice.len() >= 4 && slice.ends_with("*/")
}

/// Whether a token following `prev` begins a new top-level declaration
fn starts_declaration(prev: Option<Token>, newline_since_prev: bool) -> bool {
    match prev {
        None | Some(Token::Semicolon) => true,
        Some(token) => newline_since_prev && token.ends_line(),
    }
}
