// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use crate::gff::line::LineError;
use crate::gff::record::Attributes;

pub const PAIR_SEPARATOR: char = ';';
pub const TAG_VALUE_SEPARATOR: char = '=';

// Decodes column 9. Every ';'-separated piece must contain an '='; only the first '=' splits, so
// values may contain further '=' characters. A repeated tag keeps its last value. No unescaping
// is done: percent-encoded text stays as it is.

pub fn parse_attributes(blob: &str) -> Result<Attributes, LineError> {
    let mut attributes = Attributes::new();
    for pair in blob.split(PAIR_SEPARATOR) {
        let (tag, value) = pair
            .split_once(TAG_VALUE_SEPARATOR)
            .ok_or_else(|| LineError::Attribute {
                pair: pair.to_string(),
            })?;
        attributes.insert(tag.to_string(), value.to_string());
    }
    Ok(attributes)
}
