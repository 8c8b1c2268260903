// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The source tree, as built by [parse](../parse/index.html): calls
//! and numbers, nothing else.

use kstring::KString;
use num::BigUint;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub name: KString,
    pub params: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: BigUint,
}

/// Easily create a call expression
pub fn call(name: &str, params: Vec<Expression>) -> Expression {
    Expression::CallExpression(CallExpression {
        name: KString::from_ref(name),
        params,
    })
}

/// Easily create a number literal
pub fn number(n: u32) -> Expression {
    Expression::NumberLiteral(NumberLiteral { value: BigUint::from(n) })
}

// Display gives back the source syntax, normalized to single spaces.

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        for (i, e) in self.body.iter().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            write!(f, "{}", e)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        match self {
            Expression::CallExpression(c) => write!(f, "{}", c),
            Expression::NumberLiteral(n) => write!(f, "{}", n),
        }
    }
}

impl std::fmt::Display for CallExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        f.write_char('(')?;
        f.write_str(&self.name)?;
        for p in &self.params {
            write!(f, " {}", p)?;
        }
        f.write_char(')')
    }
}

impl std::fmt::Display for NumberLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.value)
    }
}
