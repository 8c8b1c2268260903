// Copyright 2023 Christian Jaeger <ch@christianjaeger.ch>. See the
// COPYRIGHT file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Settings for a compilation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// How many levels of call nesting the parser accepts. Parsing,
    /// transforming and code generation all recurse once per level.
    pub depth_fuel: u32,
}

pub const DEFAULT_SETTINGS : Settings = Settings {
    depth_fuel: 500,
    // ^ the limit with default settings on Linux is around 1200
};

impl Default for Settings {
    fn default() -> Self {
        DEFAULT_SETTINGS
    }
}
