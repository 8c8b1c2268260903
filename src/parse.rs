// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Building the source tree from a token stream, by recursive
//! descent. Tokens are only ever read forward.

use crate::ast::{Program, Expression, CallExpression, NumberLiteral};
use crate::error::CompileError;
use crate::settings::Settings;
use crate::tokenize::Token;
use log::trace;

fn next_token(
    ts: &mut impl Iterator<Item = Result<Token, CompileError>>,
) -> Result<Option<Token>, CompileError> {
    let t = ts.next().transpose()?;
    trace!("token {:?}", t);
    Ok(t)
}

// Read the rest of a call whose '(' has been consumed already.
fn slurp_call(
    ts: &mut impl Iterator<Item = Result<Token, CompileError>>,
    depth_fuel: u32,
) -> Result<CallExpression, CompileError> {
    if depth_fuel == 0 {
        return Err(CompileError::NestingTooDeep)
    }
    let name = match next_token(ts)? {
        Some(Token::Name(name)) => name,
        Some(t) => return Err(CompileError::UnexpectedToken(t)),
        None => return Err(CompileError::PrematureEof),
    };
    let mut params = Vec::new();
    loop {
        match next_token(ts)? {
            Some(Token::Paren(')')) => {
                return Ok(CallExpression { name, params })
            }
            Some(t) => params.push(walk(t, ts, depth_fuel - 1)?),
            None => return Err(CompileError::PrematureEof),
        }
    }
}

fn walk(
    t: Token,
    ts: &mut impl Iterator<Item = Result<Token, CompileError>>,
    depth_fuel: u32,
) -> Result<Expression, CompileError> {
    match t {
        Token::Number(value) => {
            Ok(Expression::NumberLiteral(NumberLiteral { value }))
        }
        Token::Paren('(') => {
            Ok(Expression::CallExpression(slurp_call(ts, depth_fuel)?))
        }
        _ => Err(CompileError::UnexpectedToken(t))
    }
}

/// Every token at the top level has to start an expression, so a
/// stray ')' or name there is an `UnexpectedToken` error.
pub fn parse(
    ts: impl Iterator<Item = Result<Token, CompileError>>,
    settings: &Settings,
) -> Result<Program, CompileError> {
    let mut ts = ts;
    let mut body = Vec::new();
    while let Some(t) = next_token(&mut ts)? {
        body.push(walk(t, &mut ts, settings.depth_fuel)?);
    }
    Ok(Program { body })
}
