// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use log::trace;

use crate::{
    compiler::{is_zero_width, CompileOptions},
    flag::{FlagSet, PatternFlag},
    pattern::Pattern,
    validator::{
        check_character_set, check_group_name, check_range_boundaries, check_repetition_bounds,
        FragmentKind, Grammar, GrammarMode,
    },
    ReadableRegexError,
};

/// Create a new builder with strict construction checks.
pub fn regex() -> ReadableRegex {
    ReadableRegex::new()
}

/// Assembles a regular expression from named operations.
///
/// Every operation appends one self-contained fragment to the pattern text.
/// Multi-token fragments (literals, embedded patterns, alternations) are
/// wrapped in a non-capturing group so that a following quantifier binds to
/// the whole fragment. Zero-width fragments (anchors, boundaries, lookaround
/// groups) cannot be quantified.
///
/// Operations that can reject their input return a `Result`, the builder is
/// left untouched when they fail.
///
/// e.g.
///
/// ```
/// use readable_regex::regex;
///
/// let pattern = regex()
///     .literal("0x")
///     .start_named_group("red")?
///     .range(&['0', '9', 'a', 'f'])?
///     .exactly_n_times(2)?
///     .end_group()
///     .build()?;
///
/// assert_eq!(pattern.as_str(), "(?:0x)(?<red>[0-9a-f]{2,2})");
/// assert!(pattern.matches_exactly("0xff")?);
/// # Ok::<(), readable_regex::ReadableRegexError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ReadableRegex {
    text: String,
    multiline_requested: bool,
    group_names: Vec<Option<String>>,

    // the kind each open group turns into when it is closed.
    open_groups: Vec<FragmentKind>,
    grammar: Grammar,
}

impl Default for ReadableRegex {
    fn default() -> Self {
        Self::with_mode(GrammarMode::Strict)
    }
}

impl ReadableRegex {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder that does not check the adjacency of the operations,
    /// misplaced quantifiers are reported by the engine when building.
    pub fn lenient() -> Self {
        Self::with_mode(GrammarMode::Lenient)
    }

    pub fn with_mode(mode: GrammarMode) -> Self {
        Self {
            text: String::new(),
            multiline_requested: false,
            group_names: vec![],
            open_groups: vec![],
            grammar: Grammar::new(mode),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn group_names(&self) -> &[Option<String>] {
        &self.group_names
    }

    pub fn is_multiline_requested(&self) -> bool {
        self.multiline_requested
    }

    pub fn mode(&self) -> GrammarMode {
        self.grammar.mode()
    }

    // The text is only ever appended to, never rewritten.
    fn append(
        &mut self,
        kind: FragmentKind,
        fragment: &str,
    ) -> Result<&mut Self, ReadableRegexError> {
        let next = self.grammar.check(kind)?;
        trace!("append {} \"{}\"", kind, fragment);
        self.text.push_str(fragment);
        self.grammar.advance(next);
        Ok(self)
    }

    // For atoms, zero-width elements and group boundaries, which every
    // grammar state accepts.
    fn append_always(&mut self, kind: FragmentKind, fragment: &str) -> &mut Self {
        trace!("append {} \"{}\"", kind, fragment);
        self.text.push_str(fragment);
        self.grammar.accept(kind);
        self
    }

    // raw, literal and embedding

    /// Append the text unchanged, the caller is responsible for its correctness.
    pub fn regex_from_string(&mut self, regex: &str) -> &mut Self {
        self.append_always(block_kind(regex), regex)
    }

    /// Embed another builder as a single block.
    ///
    /// The other builder is built first. Its group names are not merged into
    /// this builder, its multiline requirement is.
    pub fn add(&mut self, other: &ReadableRegex) -> Result<&mut Self, ReadableRegexError> {
        let pattern = other.build()?;
        Ok(self.add_pattern(&pattern))
    }

    /// Embed a compiled pattern as a single block.
    pub fn add_pattern(&mut self, pattern: &Pattern) -> &mut Self {
        if pattern.flags().contains(PatternFlag::Multiline) {
            self.multiline_requested = true;
        }

        let fragment = format!("(?:{})", pattern.as_str());
        self.append_always(block_kind(&fragment), &fragment)
    }

    /// Match the text verbatim, meta characters included.
    pub fn literal(&mut self, value: &str) -> &mut Self {
        let fragment = format!("(?:{})", quote(value));
        let kind = if value.is_empty() {
            FragmentKind::ZeroWidth
        } else {
            FragmentKind::Atom
        };
        self.append_always(kind, &fragment)
    }

    // character classes

    pub fn digit(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\d")
    }

    pub fn non_digit(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\D")
    }

    pub fn whitespace(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\s")
    }

    pub fn non_whitespace(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\S")
    }

    pub fn tab(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\t")
    }

    pub fn newline(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\n")
    }

    pub fn word_character(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\w")
    }

    pub fn non_word_character(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, "\\W")
    }

    /// Any character except `\n`, unless [`PatternFlag::DotMatchesNewLine`] is set.
    pub fn any_character(&mut self) -> &mut Self {
        self.append_always(FragmentKind::Atom, ".")
    }

    /// A character within one of the ranges, the boundaries are
    /// consecutive `lo, hi` pairs, e.g. `&['a', 'z', '0', '9']`.
    pub fn range(&mut self, boundaries: &[char]) -> Result<&mut Self, ReadableRegexError> {
        check_range_boundaries(boundaries)?;
        let fragment = format!("[{}]", render_ranges(boundaries));
        Ok(self.append_always(FragmentKind::Atom, &fragment))
    }

    pub fn not_in_range(&mut self, boundaries: &[char]) -> Result<&mut Self, ReadableRegexError> {
        check_range_boundaries(boundaries)?;
        let fragment = format!("[^{}]", render_ranges(boundaries));
        Ok(self.append_always(FragmentKind::Atom, &fragment))
    }

    pub fn any_character_of(&mut self, characters: &str) -> Result<&mut Self, ReadableRegexError> {
        check_character_set(characters)?;
        let fragment = format!("[{}]", characters);
        Ok(self.append_always(FragmentKind::Atom, &fragment))
    }

    pub fn any_character_except(
        &mut self,
        characters: &str,
    ) -> Result<&mut Self, ReadableRegexError> {
        check_character_set(characters)?;
        let fragment = format!("[^{}]", characters);
        Ok(self.append_always(FragmentKind::Atom, &fragment))
    }

    // boundaries

    pub fn word_boundary(&mut self) -> &mut Self {
        self.append_always(FragmentKind::ZeroWidth, "\\b")
    }

    pub fn non_word_boundary(&mut self) -> &mut Self {
        self.append_always(FragmentKind::ZeroWidth, "\\B")
    }

    /// The start of a line, turns on the multiline mode when building.
    pub fn start_of_line(&mut self) -> &mut Self {
        self.multiline_requested = true;
        self.append_always(FragmentKind::ZeroWidth, "(?:^)")
    }

    /// The end of a line, turns on the multiline mode when building.
    pub fn end_of_line(&mut self) -> &mut Self {
        self.multiline_requested = true;
        self.append_always(FragmentKind::ZeroWidth, "(?:$)")
    }

    pub fn start_of_input(&mut self) -> &mut Self {
        self.append_always(FragmentKind::ZeroWidth, "\\A")
    }

    pub fn end_of_input(&mut self) -> &mut Self {
        self.append_always(FragmentKind::ZeroWidth, "\\z")
    }

    // quantifiers

    pub fn one_or_more(&mut self) -> Result<&mut Self, ReadableRegexError> {
        self.append(FragmentKind::Quantifier, "+")
    }

    pub fn optional(&mut self) -> Result<&mut Self, ReadableRegexError> {
        self.append(FragmentKind::Quantifier, "?")
    }

    pub fn zero_or_more(&mut self) -> Result<&mut Self, ReadableRegexError> {
        self.append(FragmentKind::Quantifier, "*")
    }

    pub fn exactly_n_times(&mut self, n: usize) -> Result<&mut Self, ReadableRegexError> {
        self.count_range(n, Some(n))
    }

    pub fn at_least_n_times(&mut self, n: usize) -> Result<&mut Self, ReadableRegexError> {
        self.count_range(n, None)
    }

    pub fn between_n_and_m_times(
        &mut self,
        n: usize,
        m: usize,
    ) -> Result<&mut Self, ReadableRegexError> {
        self.count_range(n, Some(m))
    }

    fn count_range(
        &mut self,
        min: usize,
        max: Option<usize>,
    ) -> Result<&mut Self, ReadableRegexError> {
        check_repetition_bounds(min, max)?;
        let fragment = match max {
            Some(max) => format!("{{{},{}}}", min, max),
            None => format!("{{{},}}", min),
        };
        self.append(FragmentKind::Quantifier, &fragment)
    }

    /// Make the preceding quantifier match as few times as possible.
    pub fn reluctant(&mut self) -> Result<&mut Self, ReadableRegexError> {
        self.append(FragmentKind::Modifier, "?")
    }

    /// Make the preceding quantifier never give back what it matched.
    pub fn possessive(&mut self) -> Result<&mut Self, ReadableRegexError> {
        self.append(FragmentKind::Modifier, "+")
    }

    // groups

    fn open_group(&mut self, closes_as: FragmentKind, fragment: &str) -> &mut Self {
        self.open_groups.push(closes_as);
        self.append_always(FragmentKind::GroupOpen, fragment)
    }

    pub fn start_group(&mut self) -> &mut Self {
        self.group_names.push(None);
        self.open_group(FragmentKind::GroupClose, "(")
    }

    /// Start a capture group that can be looked up by name after matching.
    ///
    /// The name must start with an ASCII letter and contain only ASCII
    /// letters and digits.
    pub fn start_named_group(&mut self, name: &str) -> Result<&mut Self, ReadableRegexError> {
        check_group_name(name)?;
        self.group_names.push(Some(name.to_owned()));
        let fragment = format!("(?<{}>", name);
        Ok(self.open_group(FragmentKind::GroupClose, &fragment))
    }

    pub fn start_unnamed_group(&mut self) -> &mut Self {
        self.open_group(FragmentKind::GroupClose, "(?:")
    }

    pub fn start_positive_lookahead(&mut self) -> &mut Self {
        self.open_group(FragmentKind::ZeroWidth, "(?=")
    }

    pub fn start_negative_lookahead(&mut self) -> &mut Self {
        self.open_group(FragmentKind::ZeroWidth, "(?!")
    }

    pub fn start_positive_lookbehind(&mut self) -> &mut Self {
        self.open_group(FragmentKind::ZeroWidth, "(?<=")
    }

    pub fn start_negative_lookbehind(&mut self) -> &mut Self {
        self.open_group(FragmentKind::ZeroWidth, "(?<!")
    }

    /// Close the most recently opened group of any kind.
    ///
    /// Closing more groups than were opened is not rejected here, an
    /// unbalanced pattern is rejected by the engine when building.
    pub fn end_group(&mut self) -> &mut Self {
        let kind = self.open_groups.pop().unwrap_or(FragmentKind::GroupClose);
        self.append_always(kind, ")")
    }

    /// A capture group around the other builder.
    pub fn group(&mut self, other: &ReadableRegex) -> Result<&mut Self, ReadableRegexError> {
        let pattern = other.build()?;
        Ok(self.start_group().add_pattern(&pattern).end_group())
    }

    /// A named capture group around the other builder.
    pub fn named_group(
        &mut self,
        name: &str,
        other: &ReadableRegex,
    ) -> Result<&mut Self, ReadableRegexError> {
        check_group_name(name)?;
        let pattern = other.build()?;
        Ok(self.start_named_group(name)?.add_pattern(&pattern).end_group())
    }

    // alternation

    /// Match any one of the builders.
    ///
    /// Each builder is built on its own first. No builder yields an empty
    /// alternative and a single builder behaves like embedding it.
    pub fn one_of(&mut self, others: &[&ReadableRegex]) -> Result<&mut Self, ReadableRegexError> {
        let patterns = others
            .iter()
            .map(|other| other.build())
            .collect::<Result<Vec<Pattern>, ReadableRegexError>>()?;

        if patterns
            .iter()
            .any(|pattern| pattern.flags().contains(PatternFlag::Multiline))
        {
            self.multiline_requested = true;
        }

        let alternatives: Vec<&str> = patterns.iter().map(|pattern| pattern.as_str()).collect();
        let fragment = format!("(?:{})", alternatives.join("|"));
        Ok(self.append_always(block_kind(&fragment), &fragment))
    }

    // build

    pub fn build(&self) -> Result<Pattern, ReadableRegexError> {
        self.build_with_options(&[], &CompileOptions::default())
    }

    pub fn build_with_flags(&self, flags: &[PatternFlag]) -> Result<Pattern, ReadableRegexError> {
        self.build_with_options(flags, &CompileOptions::default())
    }

    /// Compile the assembled text.
    ///
    /// The multiline flag is added when a line anchor was used.
    pub fn build_with_options(
        &self,
        flags: &[PatternFlag],
        options: &CompileOptions,
    ) -> Result<Pattern, ReadableRegexError> {
        let mut flag_set = FlagSet::from_flags(flags);
        if self.multiline_requested {
            flag_set.insert(PatternFlag::Multiline);
        }

        Pattern::compile(
            self.text.clone(),
            flag_set,
            self.group_names.clone(),
            options,
        )
    }
}

// Whitespace is escaped as well, it would be dropped when the engine
// ignores whitespace in the pattern.
fn quote(value: &str) -> String {
    regex::escape(value)
        .chars()
        .map(|c| {
            if c.is_whitespace() {
                format!("\\x{{{:X}}}", c as u32)
            } else {
                c.to_string()
            }
        })
        .collect()
}

fn block_kind(fragment: &str) -> FragmentKind {
    if is_zero_width(fragment) {
        FragmentKind::ZeroWidth
    } else {
        FragmentKind::Atom
    }
}

fn render_ranges(boundaries: &[char]) -> String {
    boundaries
        .chunks(2)
        .map(|pair| format!("{}-{}", pair[0], pair[1]))
        .collect()
}
