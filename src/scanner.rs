// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A character stream that can give back exactly one character. The
//! tokenizer uses this as its only form of lookahead: read a
//! character, and if it doesn't belong to the current token, push it
//! back for the next round.

use crate::error::CompileError;
use std::iter::Fuse;

pub struct Scanner<I>
    where I: Iterator<Item = anyhow::Result<char>>
{
    // Fused since generator based sources must not be resumed after
    // their end.
    cs: Fuse<I>,
    /// The character last returned by `next`, if any.
    last: Option<char>,
    pushed_back: bool,
}

impl<I> Scanner<I>
    where I: Iterator<Item = anyhow::Result<char>>
{
    pub fn new(cs: I) -> Self {
        Scanner {
            cs: cs.fuse(),
            last: None,
            pushed_back: false,
        }
    }

    /// Returns `Ok(None)` at the end of input.
    pub fn next(&mut self) -> Result<Option<char>, CompileError> {
        if self.pushed_back {
            self.pushed_back = false;
            return Ok(self.last)
        }
        match self.cs.next() {
            Some(Ok(c)) => {
                self.last = Some(c);
                Ok(Some(c))
            }
            Some(Err(e)) => {
                self.last = None;
                Err(CompileError::IO(e))
            }
            None => {
                self.last = None;
                Ok(None)
            }
        }
    }

    /// Make the next call to `next` return the character the last
    /// call returned. Only one character can be pushed back.
    pub fn pushback(&mut self) -> Result<(), CompileError> {
        if self.pushed_back {
            return Err(CompileError::ProtocolViolation(
                "cannot push back twice in a row"))
        }
        if self.last.is_none() {
            return Err(CompileError::ProtocolViolation(
                "no character to push back"))
        }
        self.pushed_back = true;
        Ok(())
    }

    /// The characters up to the first one not satisfying `pred`, which
    /// is pushed back.
    pub fn take_while<P>(&mut self, pred: P) -> TakeWhile<'_, I, P>
        where P: Fn(char) -> bool
    {
        TakeWhile {
            scanner: self,
            pred,
            done: false,
        }
    }
}

pub struct TakeWhile<'s, I, P>
    where I: Iterator<Item = anyhow::Result<char>>
{
    scanner: &'s mut Scanner<I>,
    pred: P,
    done: bool,
}

impl<'s, I, P> Iterator for TakeWhile<'s, I, P>
    where I: Iterator<Item = anyhow::Result<char>>,
          P: Fn(char) -> bool
{
    type Item = Result<char, CompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None
        }
        match self.scanner.next() {
            Ok(Some(c)) => {
                if (self.pred)(c) {
                    Some(Ok(c))
                } else {
                    self.done = true;
                    self.scanner.pushback().err().map(Err)
                }
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
