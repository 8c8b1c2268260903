// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Turning the source tree into the target tree, in one walk.
//!
//! Every source node appends its translation to the insertion target
//! of its parent: the program body for top-level expressions, the
//! `arguments` of the enclosing call otherwise. Calls whose params are
//! still being walked are kept on a stack; the top of that stack is
//! the current insertion target, the program body is used when it's
//! empty.

use crate::ast;
use crate::target::{Program, Statement, CallExpression, Expression};
use crate::traverse::{traverse, Parent, Visitor};

struct Transformer {
    body: Vec<Statement>,
    open_calls: Vec<CallExpression>,
}

impl Transformer {
    fn insert(&mut self, expression: Expression, parent: Parent<'_>) {
        debug_assert_eq!(parent.is_call_expression(),
                         ! self.open_calls.is_empty());
        match self.open_calls.last_mut() {
            Some(call) => call.arguments.push(expression),
            None => self.body.push(Statement::from(expression)),
        }
    }
}

impl Visitor for Transformer {
    fn enter_call_expression(&mut self, node: &ast::CallExpression,
                             _parent: Parent<'_>) {
        self.open_calls.push(CallExpression::new(node.name.clone()));
    }
    fn exit_call_expression(&mut self, _node: &ast::CallExpression,
                            parent: Parent<'_>) {
        // Pushed by enter_call_expression for the same node.
        if let Some(call) = self.open_calls.pop() {
            self.insert(Expression::CallExpression(call), parent);
        }
    }
    fn enter_number_literal(&mut self, node: &ast::NumberLiteral,
                            parent: Parent<'_>) {
        self.insert(Expression::NumberLiteral(node.clone()), parent);
    }
}

/// The source tree is left untouched.
pub fn transform(program: &ast::Program) -> Program {
    let mut transformer = Transformer {
        body: Vec::new(),
        open_calls: Vec::new(),
    };
    traverse(program, &mut transformer);
    Program { body: transformer.body }
}
