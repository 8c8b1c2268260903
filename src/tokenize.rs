// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Translating a character stream to a token stream. There are only
//! three kinds of tokens: parentheses, names (runs of ASCII letters)
//! and numbers (runs of ASCII digits). Whitespace separates tokens
//! and is dropped.

use crate::error::CompileError;
use crate::scanner::Scanner;
use genawaiter::rc::Gen;
use kstring::KString;
use num::BigUint;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Paren,
    Name,
    Number,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_str(match self {
            TokenKind::Paren => "paren",
            TokenKind::Name => "name",
            TokenKind::Number => "number",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Either '(' or ')'.
    Paren(char),
    Name(KString),
    Number(BigUint),
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Paren(_) => TokenKind::Paren,
            Token::Name(_) => TokenKind::Name,
            Token::Number(_) => TokenKind::Number,
        }
    }

    /// Easily create a name token
    pub fn name(s: &str) -> Token {
        Token::Name(KString::from_ref(s))
    }

    /// Easily create a number token
    pub fn number(n: u32) -> Token {
        Token::Number(BigUint::from(n))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Token::Paren(c) => f.write_char(*c),
            Token::Name(s) => f.write_str(s),
            Token::Number(n) => write!(f, "{}", n),
        }
    }
}

// Not `char::is_ascii_whitespace`, which leaves out vertical tab.
fn is_whitespace_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn maybe_paren(c: char) -> Option<Token> {
    match c {
        '(' | ')' => Some(Token::Paren(c)),
        _ => None
    }
}

// Collect `c` and the characters following it that satisfy `pred`.
fn read_run<I>(
    scanner: &mut Scanner<I>,
    c: char,
    pred: fn(char) -> bool,
) -> Result<String, CompileError>
    where I: Iterator<Item = anyhow::Result<char>>
{
    std::iter::once(Ok(c))
        .chain(scanner.take_while(pred))
        .collect()
}

// s must consist of ASCII digits only.
fn read_number(s: &str) -> BigUint {
    let mut n = BigUint::from(0u32);
    for b in s.bytes() {
        n = n * 10u32 + u32::from(b - b'0');
    }
    n
}

fn read_token<I>(
    scanner: &mut Scanner<I>,
    c: char,
) -> Result<Token, CompileError>
    where I: Iterator<Item = anyhow::Result<char>>
{
    if let Some(t) = maybe_paren(c) {
        Ok(t)
    } else if is_digit(c) {
        let s = read_run(scanner, c, is_digit)?;
        Ok(Token::Number(read_number(&s)))
    } else if is_letter(c) {
        let s = read_run(scanner, c, is_letter)?;
        Ok(Token::Name(KString::from_string(s)))
    } else {
        Err(CompileError::UnrecognizedCharacter(c))
    }
}

/// The returned stream ends after the first error. It is fused, so
/// it's fine to call `next` again after the end.
pub fn tokenize<I>(
    cs: I,
) -> impl Iterator<Item = Result<Token, CompileError>>
    where I: Iterator<Item = anyhow::Result<char>>
{
    Gen::new(|co| async move {
        let mut scanner = Scanner::new(cs);
        loop {
            let c = match scanner.next() {
                Ok(Some(c)) => c,
                Ok(None) => return,
                Err(e) => {
                    co.yield_(Err(e)).await;
                    return;
                }
            };
            if is_whitespace_char(c) {
                continue;
            }
            match read_token(&mut scanner, c) {
                Ok(t) => co.yield_(Ok(t)).await,
                Err(e) => {
                    co.yield_(Err(e)).await;
                    return;
                }
            }
        }
    }).into_iter().fuse()
}

/// Tokenize a string held in memory.
pub fn tokenize_str(
    s: &str,
) -> impl Iterator<Item = Result<Token, CompileError>> + '_ {
    tokenize(s.chars().map(Ok))
}
