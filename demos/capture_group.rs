// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use readable_regex::{regex, ReadableRegex, ReadableRegexError};

pub fn main() -> Result<(), ReadableRegexError> {
    // two hex digits
    let mut channel = regex();
    channel.range(&['0', '9', 'a', 'f', 'A', 'F'])?.exactly_n_times(2)?;

    let pattern = color(&channel)?.build()?;

    println!("Pattern: {}", pattern);

    let text = "The color is #ffbb33 and the background is #bbdd99.";

    // capture groups once
    if let Some(m) = pattern.captures(text)? {
        println!("Found match: {}", &m[0]);
        println!("Red: {}", &m["red"]);
        println!("Green: {}", &m["green"]);
        println!("Blue: {}", &m["blue"]);
    } else {
        println!("No match found");
    }

    // all matches
    for m in pattern.find_iter(text) {
        println!("Found match: {}", m?.as_str());
    }

    Ok(())
}

fn color(channel: &ReadableRegex) -> Result<ReadableRegex, ReadableRegexError> {
    let mut builder = regex();
    builder
        .literal("#")
        .named_group("red", channel)?
        .named_group("green", channel)?
        .named_group("blue", channel)?;
    Ok(builder)
}
