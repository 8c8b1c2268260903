// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Some bookkeeping about a source tree.

use crate::ast::{Program, CallExpression, NumberLiteral};
use crate::traverse::{traverse, Parent, Visitor};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Number of expressions in the program body
    pub toplevel: usize,
    pub calls: usize,
    pub numbers: usize,
    /// Deepest call nesting; 0 if there are no calls
    pub max_depth: usize,
    depth: usize,
}

impl Statistics {
    pub fn of(program: &Program) -> Statistics {
        let mut stats = Statistics::default();
        traverse(program, &mut stats);
        stats
    }
}

impl Visitor for Statistics {
    fn enter_call_expression(&mut self, _node: &CallExpression,
                             parent: Parent<'_>) {
        if ! parent.is_call_expression() {
            self.toplevel += 1;
        }
        self.calls += 1;
        self.depth += 1;
        self.max_depth = self.max_depth.max(self.depth);
    }
    fn exit_call_expression(&mut self, _node: &CallExpression,
                            _parent: Parent<'_>) {
        self.depth -= 1;
    }
    fn enter_number_literal(&mut self, _node: &NumberLiteral,
                            parent: Parent<'_>) {
        if ! parent.is_call_expression() {
            self.toplevel += 1;
        }
        self.numbers += 1;
    }
}

impl std::fmt::Display for Statistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
           -> Result<(), std::fmt::Error> {
        write!(f, ";; count_toplevel = {}, count_calls = {}, \
                   count_numbers = {}, max_depth = {}",
               self.toplevel, self.calls, self.numbers, self.max_depth)
    }
}
