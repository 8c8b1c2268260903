// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The target tree, shaped like the output language: statements,
//! identifiers and call expressions. Built by
//! [transform](../transform/index.html), printed by
//! [codegen](../codegen/index.html).

use kstring::KString;

pub use crate::ast::NumberLiteral;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Statement>,
}

/// A top-level call is always wrapped in an `ExpressionStatement`. A
/// top-level number is kept as is, and is printed without a `;`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    ExpressionStatement(ExpressionStatement),
    NumberLiteral(NumberLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub expression: CallExpression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    CallExpression(CallExpression),
    NumberLiteral(NumberLiteral),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: KString,
}

impl CallExpression {
    pub fn new(name: KString) -> CallExpression {
        CallExpression {
            callee: Identifier { name },
            arguments: Vec::new(),
        }
    }
}

impl From<Expression> for Statement {
    fn from(e: Expression) -> Statement {
        match e {
            Expression::CallExpression(expression) =>
                Statement::ExpressionStatement(
                    ExpressionStatement { expression }),
            Expression::NumberLiteral(n) => Statement::NumberLiteral(n),
        }
    }
}
