// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic depth-first walk over the source tree.
//!
//! A [Visitor](Visitor) gets one `enter_` method per node kind, called
//! before the node's children are walked, and one `exit_` method,
//! called after. All of them do nothing by default. The root
//! `Program` is not handed to the visitor; it only shows up as the
//! `Parent` of the top-level expressions.

use crate::ast::{Program, Expression, CallExpression, NumberLiteral};

#[derive(Debug, Clone, Copy)]
pub enum Parent<'t> {
    Program(&'t Program),
    CallExpression(&'t CallExpression),
}

impl<'t> Parent<'t> {
    pub fn is_call_expression(&self) -> bool {
        matches!(self, Parent::CallExpression(_))
    }
}

pub trait Visitor {
    fn enter_call_expression(&mut self, _node: &CallExpression,
                             _parent: Parent<'_>) {}
    fn exit_call_expression(&mut self, _node: &CallExpression,
                            _parent: Parent<'_>) {}
    fn enter_number_literal(&mut self, _node: &NumberLiteral,
                            _parent: Parent<'_>) {}
    fn exit_number_literal(&mut self, _node: &NumberLiteral,
                           _parent: Parent<'_>) {}
}

fn traverse_node<'t, V>(
    node: &'t Expression,
    parent: Parent<'t>,
    visitor: &mut V,
) where V: Visitor + ?Sized
{
    match node {
        Expression::CallExpression(call) => {
            visitor.enter_call_expression(call, parent);
            for param in &call.params {
                traverse_node(param, Parent::CallExpression(call), visitor);
            }
            visitor.exit_call_expression(call, parent);
        }
        Expression::NumberLiteral(n) => {
            visitor.enter_number_literal(n, parent);
            visitor.exit_number_literal(n, parent);
        }
    }
}

pub fn traverse<V>(program: &Program, visitor: &mut V)
    where V: Visitor + ?Sized
{
    for expression in &program.body {
        traverse_node(expression, Parent::Program(program), visitor);
    }
}
