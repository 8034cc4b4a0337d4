// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use crate::gff::attributes::parse_attributes;
use crate::gff::record::{FeatureRecord, Score};

pub const NUM_COLUMNS: usize = 9;
pub const COLUMN_SEPARATOR: char = '\t';

/// How column 6 is decoded.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ScoreMode {
    /// Keep the text (`Score::Raw`). Never fails.
    #[default]
    Verbatim,
    /// Parse as `f64` (`Score::Value`). The `.` placeholder is not special-cased and fails.
    Numeric,
}

/// The columns that undergo numeric conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Column {
    Start,
    End,
    Score,
}

impl Column {
    /// 1-based, as in the GFF3 documentation.
    pub fn number(&self) -> usize {
        match self {
            Column::Start => 4,
            Column::End => 5,
            Column::Score => 6,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Column::Start => "start",
            Column::End => "end",
            Column::Score => "score",
        };
        write!(f, "{} (column {})", name, self.number())
    }
}

// Decoding failures for a single line, without positional context (see
// Gff3Error::at_line() for that).

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    Columns { found: usize },
    Numeric { column: Column, value: String },
    Attribute { pair: String },
}

fn parse_coordinate(text: &str, column: Column) -> Result<u64, LineError> {
    text.parse::<u64>().map_err(|_| LineError::Numeric {
        column,
        value: text.to_string(),
    })
}

fn parse_score(text: &str, mode: ScoreMode) -> Result<Score, LineError> {
    match mode {
        ScoreMode::Verbatim => Ok(Score::Raw(text.to_string())),
        ScoreMode::Numeric => text
            .parse::<f64>()
            .map(Score::Value)
            .map_err(|_| LineError::Numeric {
                column: Column::Score,
                value: text.to_string(),
            }),
    }
}

/// Decodes one non-comment GFF3 line into a record.
///
/// The line must split on tabs into exactly nine fields. No field is trimmed, and strand and
/// phase are not checked against their usual value sets.
pub fn decode_line(line: &str, mode: ScoreMode) -> Result<FeatureRecord, LineError> {
    let fields: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
    let &[seqid, source, feature_type, start, end, score, strand, phase, attributes] =
        fields.as_slice()
    else {
        return Err(LineError::Columns {
            found: fields.len(),
        });
    };

    Ok(FeatureRecord {
        seqid: seqid.to_string(),
        source: source.to_string(),
        feature_type: feature_type.to_string(),
        start: parse_coordinate(start, Column::Start)?,
        end: parse_coordinate(end, Column::End)?,
        score: parse_score(score, mode)?,
        strand: strand.to_string(),
        phase: phase.to_string(),
        attributes: parse_attributes(attributes)?,
    })
}
