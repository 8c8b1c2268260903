// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The one error type shared by all stages, so that an error from any
//! stage reaches the caller of [compile](../compile/fn.compile.html)
//! as it was raised.

use crate::tokenize::Token;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("IO error ({0})")]
    IO(anyhow::Error),
    #[error("scanner protocol violation: {0}")]
    ProtocolViolation(&'static str),
    #[error("unrecognized character '{0}'")]
    UnrecognizedCharacter(char),
    #[error("unexpected {} token '{0}'", .0.kind())]
    UnexpectedToken(Token),
    #[error("premature EOF while expecting closing character ')'")]
    PrematureEof,
    #[error("nesting too deep")]
    NestingTooDeep,
}
