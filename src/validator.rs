// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::fmt::Display;

use crate::ReadableRegexError;

/// The kind of the fragment an operation is about to emit.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FragmentKind {
    /// A self-contained, quantifiable piece: a class, a wrapped literal,
    /// an embedded pattern etc.
    Atom,

    /// Matches a position instead of characters: anchors, boundaries,
    /// closed lookaround groups and empty literals. The engine refuses to
    /// repeat these.
    ZeroWidth,

    GroupOpen,
    GroupClose,

    /// `?`, `+`, `*` and `{n,m}`.
    Quantifier,

    /// The reluctant or possessive suffix of a quantifier.
    Modifier,
}

impl Display for FragmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FragmentKind::Atom => f.write_str("atom"),
            FragmentKind::ZeroWidth => f.write_str("zero-width element"),
            FragmentKind::GroupOpen => f.write_str("group open"),
            FragmentKind::GroupClose => f.write_str("group close"),
            FragmentKind::Quantifier => f.write_str("quantifier"),
            FragmentKind::Modifier => f.write_str("quantifier modifier"),
        }
    }
}

/// The kind of the most recently emitted fragment.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GrammarState {
    Start,
    Quantifiable,
    ZeroWidth,
    GroupOpen,
    Quantifier,
    Modified,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum GrammarMode {
    /// Rejects quantifiers that have nothing to bind to.
    #[default]
    Strict,

    /// Only the arguments of the operations are checked.
    Lenient,
}

/// Tracks the adjacency of emitted fragments.
///
/// | from \ kind  | Atom, GroupClose | ZeroWidth | GroupOpen | Quantifier | Modifier |
/// |--------------|------------------|-----------|-----------|------------|----------|
/// | Start        | Quantifiable     | ZeroWidth | GroupOpen | -          | -        |
/// | Quantifiable | Quantifiable     | ZeroWidth | GroupOpen | Quantifier | -        |
/// | ZeroWidth    | Quantifiable     | ZeroWidth | GroupOpen | -          | -        |
/// | GroupOpen    | Quantifiable     | ZeroWidth | GroupOpen | -          | -        |
/// | Quantifier   | Quantifiable     | ZeroWidth | GroupOpen | -          | Modified |
/// | Modified     | Quantifiable     | ZeroWidth | GroupOpen | -          | -        |
///
/// In lenient mode every transition is accepted, a misplaced quantifier or
/// modifier leaves the grammar in the `Quantifier` state.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Grammar {
    mode: GrammarMode,
    state: GrammarState,
}

impl Grammar {
    pub fn new(mode: GrammarMode) -> Self {
        Self {
            mode,
            state: GrammarState::Start,
        }
    }

    pub fn mode(&self) -> GrammarMode {
        self.mode
    }

    pub fn state(&self) -> GrammarState {
        self.state
    }

    fn transition(state: GrammarState, kind: FragmentKind) -> Option<GrammarState> {
        match (state, kind) {
            (_, FragmentKind::Atom | FragmentKind::GroupClose) => Some(GrammarState::Quantifiable),
            (_, FragmentKind::ZeroWidth) => Some(GrammarState::ZeroWidth),
            (_, FragmentKind::GroupOpen) => Some(GrammarState::GroupOpen),
            (GrammarState::Quantifiable, FragmentKind::Quantifier) => {
                Some(GrammarState::Quantifier)
            }
            (GrammarState::Quantifier, FragmentKind::Modifier) => Some(GrammarState::Modified),
            _ => None,
        }
    }

    /// Computes the state after emitting a fragment of the given kind,
    /// without changing the current state.
    pub fn check(&self, kind: FragmentKind) -> Result<GrammarState, ReadableRegexError> {
        match Self::transition(self.state, kind) {
            Some(next) => Ok(next),
            None if self.mode == GrammarMode::Lenient => Ok(GrammarState::Quantifier),
            None => Err(ReadableRegexError::IncorrectConstruction(match self.state {
                GrammarState::Start => {
                    format!("A {} cannot be the first element of an expression.", kind)
                }
                GrammarState::GroupOpen => {
                    format!("A {} cannot directly follow the start of a group.", kind)
                }
                GrammarState::Quantifier | GrammarState::Modified
                    if kind == FragmentKind::Quantifier =>
                {
                    "A quantifier cannot directly follow another quantifier.".to_owned()
                }
                GrammarState::ZeroWidth if kind == FragmentKind::Quantifier => {
                    "A quantifier cannot follow a zero-width element.".to_owned()
                }
                _ => format!("A {} can only directly follow a quantifier.", kind),
            })),
        }
    }

    pub fn advance(&mut self, next: GrammarState) {
        self.state = next;
    }

    /// Records an atom, a zero-width element or a group boundary, which are
    /// legal in every state.
    pub fn accept(&mut self, kind: FragmentKind) {
        debug_assert!(!matches!(
            kind,
            FragmentKind::Quantifier | FragmentKind::Modifier
        ));

        if let Some(next) = Self::transition(self.state, kind) {
            self.state = next;
        }
    }
}

/// Checks that a group name starts with an ASCII letter and only contains
/// ASCII letters and digits.
pub fn check_group_name(name: &str) -> Result<(), ReadableRegexError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            first.is_ascii_alphabetic() && chars.all(|c| c.is_ascii_alphanumeric())
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ReadableRegexError::InvalidGroupName(name.to_owned()))
    }
}

/// Checks that the boundaries form a non-empty list of `lo, hi` pairs.
pub fn check_range_boundaries(boundaries: &[char]) -> Result<(), ReadableRegexError> {
    if boundaries.is_empty() {
        Err(ReadableRegexError::InvalidRange(
            "An empty range is pointless, please supply boundaries.".to_owned(),
        ))
    } else if boundaries.len() % 2 != 0 {
        Err(ReadableRegexError::InvalidRange(format!(
            "Expect an even amount of boundaries, actual {}.",
            boundaries.len()
        )))
    } else {
        Ok(())
    }
}

pub fn check_character_set(characters: &str) -> Result<(), ReadableRegexError> {
    if characters.is_empty() {
        Err(ReadableRegexError::InvalidArgument(
            "An empty character set is pointless, please supply characters.".to_owned(),
        ))
    } else {
        Ok(())
    }
}

/// Checks `{min,max}`, where `None` stands for an unbounded upper limit.
pub fn check_repetition_bounds(min: usize, max: Option<usize>) -> Result<(), ReadableRegexError> {
    match max {
        Some(max) if max == 0 || min > max => {
            Err(ReadableRegexError::InvalidRepetitionBounds { min, max })
        }
        _ => Ok(()),
    }
}
