// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

/// Errors raised while assembling, compiling or running a pattern.
///
/// Every construction error is raised by the call that received the bad
/// input, before anything is appended to the builder, so the builder can
/// be reused after correcting the input.
#[derive(Debug, thiserror::Error)]
pub enum ReadableRegexError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("The group name \"{0}\" is not valid: it should start with a letter and only contain letters and digits.")]
    InvalidGroupName(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid repetition bounds {{{min},{max}}}: the number of repetitions must be larger than zero and the lower bound must not exceed the upper bound.")]
    InvalidRepetitionBounds { min: usize, max: usize },

    #[error("Incorrect construction: {0}")]
    IncorrectConstruction(String),

    #[error("Pattern syntax error: {0}")]
    PatternSyntax(#[source] fancy_regex::Error),

    #[error("Pattern execution error: {0}")]
    Execution(#[source] fancy_regex::Error),
}
