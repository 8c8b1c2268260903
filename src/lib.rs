// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A tiny compiler from a parenthesized call syntax to C-like call
//! expressions:
//!
//! ```text
//! (add 2 (subtract 4 2))   =>   add(2, subtract(4, 2));
//! ```
//!
//! The stages are exposed separately:
//!
//! * `tinyc::tokenize` turns characters into tokens (via the
//!   one-character pushback of `tinyc::scanner`),
//!
//! * `tinyc::parse` builds the source tree (`tinyc::ast`),
//!
//! * `tinyc::transform` builds the target tree (`tinyc::target`),
//!   using the generic walk in `tinyc::traverse`,
//!
//! * `tinyc::codegen` prints the target tree.
//!
//! `tinyc::compile` runs them all. Input grammar:
//!
//! ```text
//! program := expr*
//! expr    := number | call
//! call    := '(' name expr* ')'
//! name    := letter+
//! number  := digit+
//! ```

pub mod ast;
pub mod buffered_chars;
pub mod codegen;
pub mod compile;
pub mod error;
pub mod parse;
pub mod scanner;
pub mod settings;
pub mod stats;
pub mod target;
pub mod tokenize;
pub mod transform;
pub mod traverse;

pub use compile::compile;
pub use error::CompileError;
