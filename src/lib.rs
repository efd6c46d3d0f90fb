// Copyright (c) 2024 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions,
// more details in file LICENSE, LICENSE.additional and CONTRIBUTING.

mod builder;
mod compiler;
mod error;
mod flag;
mod pattern;

pub mod validator;

pub use builder::{regex, ReadableRegex};
pub use compiler::CompileOptions;
pub use error::ReadableRegexError;
pub use flag::{FlagSet, PatternFlag};
pub use pattern::{Captures, Match, Pattern};
pub use validator::GrammarMode;
