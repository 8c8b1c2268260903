// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The whole pipeline: characters, tokens, source tree, target tree,
//! code. Stages pull from each other lazily, so the first error met
//! in that order ends the compilation.

use crate::buffered_chars::buffered_chars;
use crate::codegen::generate_code;
use crate::error::CompileError;
use crate::parse::parse;
use crate::settings::{Settings, DEFAULT_SETTINGS};
use crate::tokenize::tokenize;
use crate::transform::transform;
use anyhow::anyhow;
use log::debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub fn compile_chars(
    cs: impl Iterator<Item = anyhow::Result<char>>,
    settings: &Settings,
) -> Result<String, CompileError> {
    let ast = parse(tokenize(cs), settings)?;
    debug!("parsed {} top-level expressions", ast.body.len());
    let new_ast = transform(&ast);
    debug!("transformed into {} statements", new_ast.body.len());
    let code = generate_code(&new_ast);
    debug!("generated {} bytes of code", code.len());
    Ok(code)
}

pub fn compile_with(
    source: &str,
    settings: &Settings,
) -> Result<String, CompileError> {
    compile_chars(source.chars().map(Ok), settings)
}

/// `compile("(add 2 (subtract 4 2))")` gives
/// `"add(2, subtract(4, 2));"`.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, &DEFAULT_SETTINGS)
}

pub fn compile_read(
    fh: impl Read,
    settings: &Settings,
) -> Result<String, CompileError> {
    compile_chars(buffered_chars(fh), settings)
}

pub fn compile_file(
    path: &Path,
    settings: &Settings,
) -> Result<String, CompileError> {
    let fh = File::open(path).map_err(
        |e| CompileError::IO(anyhow!("{:?}: {}", path, e)))?;
    compile_read(fh, settings)
}
