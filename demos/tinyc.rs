// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use tinyc::buffered_chars::buffered_chars;
use tinyc::codegen::generate_code;
use tinyc::parse::parse;
use tinyc::settings::{Settings, DEFAULT_SETTINGS};
use tinyc::stats::Statistics;
use tinyc::tokenize::tokenize;
use tinyc::transform::transform;
use clap::Parser as ClapParser;
use std::io::{stdin, Read};
use std::path::PathBuf;
use anyhow::Result;


#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Only stream the tokens, one per line
    #[clap(long, value_parser)]
    tokens: bool,
    /// Print the source tree
    #[clap(short, long, value_parser)]
    ast: bool,
    /// Print the target tree
    #[clap(short, long, value_parser)]
    target: bool,
    /// Print counts of expressions
    #[clap(short, long, value_parser)]
    stats: bool,
    /// Maximum call nesting
    #[clap(long, value_parser, default_value_t = DEFAULT_SETTINGS.depth_fuel)]
    depth_fuel: u32,
    /// Path to the input file (default: stdin)
    #[clap(value_parser)]
    input_path: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let settings = Settings { depth_fuel: args.depth_fuel };

    let fh: Box<dyn Read> = match &args.input_path {
        Some(path) => Box::new(std::fs::File::open(path)?),
        None => Box::new(stdin()),
    };
    let cs = buffered_chars(fh);

    if args.tokens {
        for t in tokenize(cs) {
            let t = t?;
            println!("{}\t{}", t.kind(), t);
        }
        return Ok(())
    }

    let ast = parse(tokenize(cs), &settings)?;
    if args.ast {
        println!("{}", ast);
    }
    if args.stats {
        println!("{}", Statistics::of(&ast));
    }
    let new_ast = transform(&ast);
    if args.target {
        println!("{:#?}", new_ast);
    }
    println!("{}", generate_code(&new_ast));
    Ok(())
}
