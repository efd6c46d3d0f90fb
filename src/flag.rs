// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

/// Matching modes selectable when a pattern is built.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PatternFlag {
    CaseInsensitive,

    /// `^` and `$` match at line boundaries instead of the input boundaries.
    Multiline,

    /// `.` also matches `\n`.
    DotMatchesNewLine,

    /// Whitespace and `#` comments in the pattern text are ignored.
    IgnoreWhitespace,

    /// Greedy quantifiers become lazy and vice versa.
    SwapGreed,
}

impl PatternFlag {
    // in rendering order
    const ALL: [PatternFlag; 5] = [
        PatternFlag::CaseInsensitive,
        PatternFlag::Multiline,
        PatternFlag::DotMatchesNewLine,
        PatternFlag::IgnoreWhitespace,
        PatternFlag::SwapGreed,
    ];

    fn bit(self) -> u8 {
        match self {
            PatternFlag::CaseInsensitive => 0b0_0001,
            PatternFlag::Multiline => 0b0_0010,
            PatternFlag::DotMatchesNewLine => 0b0_0100,
            PatternFlag::IgnoreWhitespace => 0b0_1000,
            PatternFlag::SwapGreed => 0b1_0000,
        }
    }

    /// The inline flag letter understood by the regex engine.
    pub fn letter(self) -> char {
        match self {
            PatternFlag::CaseInsensitive => 'i',
            PatternFlag::Multiline => 'm',
            PatternFlag::DotMatchesNewLine => 's',
            PatternFlag::IgnoreWhitespace => 'x',
            PatternFlag::SwapGreed => 'U',
        }
    }
}

impl Display for PatternFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternFlag::CaseInsensitive => f.write_str("case_insensitive"),
            PatternFlag::Multiline => f.write_str("multiline"),
            PatternFlag::DotMatchesNewLine => f.write_str("dot_matches_new_line"),
            PatternFlag::IgnoreWhitespace => f.write_str("ignore_whitespace"),
            PatternFlag::SwapGreed => f.write_str("swap_greed"),
        }
    }
}

/// A set of [`PatternFlag`]s.
///
/// The set is handed to the engine as an inline flag group placed in front
/// of the pattern text, e.g. `(?im)`. An empty set renders as nothing.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct FlagSet {
    bits: u8,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_flags(flags: &[PatternFlag]) -> Self {
        let mut flag_set = Self::new();
        for flag in flags {
            flag_set.insert(*flag);
        }
        flag_set
    }

    pub fn insert(&mut self, flag: PatternFlag) {
        self.bits |= flag.bit();
    }

    pub fn contains(&self, flag: PatternFlag) -> bool {
        self.bits & flag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = PatternFlag> + '_ {
        PatternFlag::ALL
            .iter()
            .copied()
            .filter(|flag| self.contains(*flag))
    }
}

impl Display for FlagSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        let letters: String = self.iter().map(PatternFlag::letter).collect();
        write!(f, "(?{})", letters)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{FlagSet, PatternFlag};

    #[test]
    fn test_empty_flag_set_renders_nothing() {
        let flags = FlagSet::new();
        assert!(flags.is_empty());
        assert_eq!(flags.to_string(), "");
    }

    #[test]
    fn test_flag_set_renders_inline_group_in_fixed_order() {
        let flags = FlagSet::from_flags(&[
            PatternFlag::SwapGreed,
            PatternFlag::Multiline,
            PatternFlag::CaseInsensitive,
        ]);

        assert_eq!(flags.to_string(), "(?imU)");
        assert!(flags.contains(PatternFlag::Multiline));
        assert!(!flags.contains(PatternFlag::DotMatchesNewLine));
    }

    #[test]
    fn test_flag_set_insert_is_idempotent() {
        let mut flags = FlagSet::new();
        flags.insert(PatternFlag::Multiline);
        flags.insert(PatternFlag::Multiline);

        assert_eq!(flags.iter().collect::<Vec<_>>(), vec![PatternFlag::Multiline]);
        assert_eq!(flags, FlagSet::from_flags(&[PatternFlag::Multiline]));
    }
}
