// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use fancy_regex::{Expr, Regex, RegexBuilder};

use crate::{
    flag::{FlagSet, PatternFlag},
    ReadableRegexError,
};

/// Options forwarded to the regex engine when a pattern is compiled.
///
/// `None` keeps the engine default.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CompileOptions {
    /// How many times backtracking may be attempted for patterns that need
    /// the backtracking engine (lookaround, possessive quantifiers).
    pub backtrack_limit: Option<usize>,

    /// The approximate size limit of the delegated compiled program.
    pub delegate_size_limit: Option<usize>,
}

impl CompileOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_backtrack_limit(self, limit: usize) -> Self {
        Self {
            backtrack_limit: Some(limit),
            ..self
        }
    }

    pub fn with_delegate_size_limit(self, limit: usize) -> Self {
        Self {
            delegate_size_limit: Some(limit),
            ..self
        }
    }

    fn to_engine_builder(self, pattern: &str) -> RegexBuilder {
        let mut builder = RegexBuilder::new(pattern);
        if let Some(limit) = self.backtrack_limit {
            builder.backtrack_limit(limit);
        }
        if let Some(limit) = self.delegate_size_limit {
            builder.delegate_size_limit(limit);
        }
        builder
    }
}

/// The two engine programs behind a compiled pattern.
#[derive(Debug)]
pub struct CompiledRegex {
    /// Finds the pattern anywhere in the text.
    pub search: Regex,

    /// Matches the pattern against the whole text.
    pub whole: Regex,
}

/// Compile the pattern text under the given flags.
pub fn compile(
    text: &str,
    flags: FlagSet,
    options: &CompileOptions,
) -> Result<CompiledRegex, ReadableRegexError> {
    let search = options
        .to_engine_builder(&format!("{}{}", flags, text))
        .build()
        .map_err(ReadableRegexError::PatternSyntax)?;

    // a trailing comment would swallow the closing parenthesis
    // when whitespace and comments are ignored.
    let terminator = if flags.contains(PatternFlag::IgnoreWhitespace) {
        "\n"
    } else {
        ""
    };

    let whole = options
        .to_engine_builder(&format!("{}\\A(?:{}{})\\z", flags, text, terminator))
        .build()
        .map_err(ReadableRegexError::PatternSyntax)?;

    Ok(CompiledRegex { search, whole })
}

/// Checks whether the text only ever matches a position: an anchor, a
/// boundary, a lookaround or nothing at all. The engine refuses to repeat
/// such an expression.
///
/// Text the engine cannot parse on its own (e.g. a half-open group) is not
/// zero-width.
pub fn is_zero_width(text: &str) -> bool {
    matches!(
        Expr::parse_tree(text).map(|tree| tree.expr),
        Ok(Expr::Empty | Expr::Assertion(_) | Expr::LookAround(..))
    )
}
