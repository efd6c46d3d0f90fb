// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{fmt::Display, ops::Index};

use log::debug;

use crate::{
    compiler::{compile, CompileOptions, CompiledRegex},
    flag::FlagSet,
    ReadableRegexError,
};

/// A compiled pattern.
///
/// Pairs the assembled text with the flags it was compiled under and the
/// names of the capture groups opened by the builder, in opening order
/// (`None` for an unnamed group).
///
/// Names are resolved to capture indices through the engine, so groups
/// carried by embedded patterns or raw text do not shift them. Only the
/// names registered by the builder can be looked up.
#[derive(Debug)]
pub struct Pattern {
    text: String,
    flags: FlagSet,
    group_names: Vec<Option<String>>,

    // indexed by capture index, index 0 is the whole match.
    index_names: Vec<Option<String>>,
    compiled: CompiledRegex,
}

impl Pattern {
    pub(crate) fn compile(
        text: String,
        flags: FlagSet,
        group_names: Vec<Option<String>>,
        options: &CompileOptions,
    ) -> Result<Self, ReadableRegexError> {
        debug!("compiling pattern \"{}\" with flags \"{}\"", text, flags);

        let compiled = compile(&text, flags, options)?;

        let index_names: Vec<Option<String>> = compiled
            .search
            .capture_names()
            .map(|name| {
                name.filter(|name| {
                    group_names
                        .iter()
                        .any(|item| item.as_deref() == Some(*name))
                })
                .map(|name| name.to_owned())
            })
            .collect();

        // capture groups written through the raw passthrough or carried by
        // embedded sub-patterns are unknown to the builder.
        if index_names.len() - 1 != group_names.len() {
            debug!(
                "pattern \"{}\" contains {} capture groups, {} of them opened by the builder",
                text,
                index_names.len() - 1,
                group_names.len()
            );
        }

        Ok(Pattern {
            text,
            flags,
            group_names,
            index_names,
            compiled,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    pub fn group_names(&self) -> &[Option<String>] {
        &self.group_names
    }

    /// The capture index (starting from 1) of the group with the given name.
    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.index_names
            .iter()
            .position(|item| item.as_deref() == Some(name))
    }

    fn group_name_by_index(&self, index: usize) -> Option<&str> {
        self.index_names
            .get(index)
            .and_then(|name| name.as_deref())
    }

    pub fn is_match(&self, text: &str) -> Result<bool, ReadableRegexError> {
        self.compiled
            .search
            .is_match(text)
            .map_err(ReadableRegexError::Execution)
    }

    /// Checks whether the pattern matches the entire text.
    pub fn matches_exactly(&self, text: &str) -> Result<bool, ReadableRegexError> {
        self.compiled
            .whole
            .is_match(text)
            .map_err(ReadableRegexError::Execution)
    }

    pub fn find<'a, 'b>(
        &'a self,
        text: &'b str,
    ) -> Result<Option<Match<'a, 'b>>, ReadableRegexError> {
        let found = self
            .compiled
            .search
            .find(text)
            .map_err(ReadableRegexError::Execution)?;

        Ok(found.map(|m| Match::new(m.start(), m.end(), None, m.as_str())))
    }

    pub fn find_iter<'a, 'b>(
        &'a self,
        text: &'b str,
    ) -> impl Iterator<Item = Result<Match<'a, 'b>, ReadableRegexError>> {
        self.compiled.search.find_iter(text).map(|item| {
            item.map(|m| Match::new(m.start(), m.end(), None, m.as_str()))
                .map_err(ReadableRegexError::Execution)
        })
    }

    pub fn captures<'a, 'b>(
        &'a self,
        text: &'b str,
    ) -> Result<Option<Captures<'a, 'b>>, ReadableRegexError> {
        let captures = match self
            .compiled
            .search
            .captures(text)
            .map_err(ReadableRegexError::Execution)?
        {
            Some(captures) => captures,
            None => return Ok(None),
        };

        let matches = (0..captures.len())
            .map(|idx| {
                captures.get(idx).map(|m| {
                    Match::new(
                        m.start(),
                        m.end(),
                        self.group_name_by_index(idx),
                        m.as_str(),
                    )
                })
            })
            .collect();

        Ok(Some(Captures { matches }))
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// The groups of a single match.
///
/// Index 0 is the whole match, a group that did not participate in the
/// match is `None`.
#[derive(Debug, PartialEq, Clone)]
pub struct Captures<'a, 'b> {
    pub matches: Vec<Option<Match<'a, 'b>>>,
}

impl Captures<'_, '_> {
    pub fn get(&self, index: usize) -> Option<&Match> {
        self.matches.get(index).and_then(|item| item.as_ref())
    }

    pub fn name(&self, name: &str) -> Option<&Match> {
        self.matches
            .iter()
            .flatten()
            .find(|item| item.name == Some(name))
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<usize> for Captures<'_, '_> {
    type Output = str;

    /// Panics when the group does not exist or did not participate in the match.
    fn index(&self, index: usize) -> &Self::Output {
        match self.get(index) {
            Some(item) => item.as_str(),
            None => panic!("No capture group {} in this match.", index),
        }
    }
}

impl Index<&str> for Captures<'_, '_> {
    type Output = str;

    /// Panics when no registered group with the name took part in the match.
    fn index(&self, name: &str) -> &Self::Output {
        match self.name(name) {
            Some(item) => item.as_str(),
            None => panic!("No capture group named \"{}\" in this match.", name),
        }
    }
}

/// A matched span, `start` and `end` are byte offsets into the text.
#[derive(Debug, PartialEq, Clone)]
pub struct Match<'a, 'b> {
    pub start: usize,
    pub end: usize,
    pub name: Option<&'a str>,
    pub value: &'b str,
}

impl<'a, 'b> Match<'a, 'b> {
    pub fn new(start: usize, end: usize, name: Option<&'a str>, value: &'b str) -> Self {
        Match {
            start,
            end,
            name,
            value,
        }
    }

    pub fn as_str(&self) -> &'b str {
        self.value
    }
}
