// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{fmt, io};

use crate::gff::line::{Column, LineError, NUM_COLUMNS};

/// Where in the input a decoding error happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    /// File path, or `<stdin>` for standard input.
    pub source: String,
    /// 1-based, counting comment lines too.
    pub line_number: usize,
    pub line: String,
}

impl fmt::Display for LineContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: [{}]", self.source, self.line_number, self.line)
    }
}

#[derive(Debug)]
pub enum Gff3Error {
    Io {
        source: String,
        /// Set when the failure happened while reading a line (bad UTF-8, corrupt gzip data).
        line_number: Option<usize>,
        error: io::Error,
    },
    Columns {
        at: LineContext,
        found: usize,
    },
    Numeric {
        at: LineContext,
        column: Column,
        value: String,
    },
    Attribute {
        at: LineContext,
        pair: String,
    },
}

impl Gff3Error {
    pub fn io(source: &str, line_number: Option<usize>, error: io::Error) -> Self {
        Gff3Error::Io {
            source: source.to_string(),
            line_number,
            error,
        }
    }

    /// Attaches a position to an error from the line decoder.
    pub fn at_line(err: LineError, at: LineContext) -> Self {
        match err {
            LineError::Columns { found } => Gff3Error::Columns { at, found },
            LineError::Numeric { column, value } => Gff3Error::Numeric { at, column, value },
            LineError::Attribute { pair } => Gff3Error::Attribute { at, pair },
        }
    }

    pub fn context(&self) -> Option<&LineContext> {
        match self {
            Gff3Error::Io { .. } => None,
            Gff3Error::Columns { at, .. }
            | Gff3Error::Numeric { at, .. }
            | Gff3Error::Attribute { at, .. } => Some(at),
        }
    }

    /// File path (or `<stdin>`) the error refers to.
    pub fn source_name(&self) -> &str {
        match self {
            Gff3Error::Io { source, .. } => source,
            Gff3Error::Columns { at, .. }
            | Gff3Error::Numeric { at, .. }
            | Gff3Error::Attribute { at, .. } => &at.source,
        }
    }

    pub fn line_number(&self) -> Option<usize> {
        match self {
            Gff3Error::Io { line_number, .. } => *line_number,
            _ => self.context().map(|at| at.line_number),
        }
    }
}

impl fmt::Display for Gff3Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gff3Error::Io {
                source,
                line_number: Some(n),
                error,
            } => write!(f, "{}:{}: I/O error: {}", source, n, error),
            Gff3Error::Io {
                source,
                line_number: None,
                error,
            } => write!(f, "{}: I/O error: {}", source, error),
            Gff3Error::Columns { at, found } => {
                write!(
                    f,
                    "{}: expected {} tab-separated columns, found {}",
                    at, NUM_COLUMNS, found
                )
            }
            Gff3Error::Numeric { at, column, value } => {
                write!(f, "{}: cannot parse {} from '{}'", at, column, value)
            }
            Gff3Error::Attribute { at, pair } => {
                write!(f, "{}: attribute '{}' is not in tag=value format", at, pair)
            }
        }
    }
}

impl std::error::Error for Gff3Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Gff3Error::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> LineContext {
        LineContext {
            source: String::from("genes.gff3"),
            line_number: 3,
            line: String::from("chr1\ttest"),
        }
    }

    #[test]
    fn test_display_columns() {
        let err = Gff3Error::at_line(LineError::Columns { found: 2 }, ctx());
        insta::assert_snapshot!(
            err.to_string(),
            @"genes.gff3:3: [chr1\ttest]: expected 9 tab-separated columns, found 2"
        );
    }

    #[test]
    fn test_display_numeric() {
        let err = Gff3Error::at_line(
            LineError::Numeric {
                column: Column::Start,
                value: String::from("abc"),
            },
            ctx(),
        );
        insta::assert_snapshot!(
            err.to_string(),
            @"genes.gff3:3: [chr1\ttest]: cannot parse start (column 4) from 'abc'"
        );
    }

    #[test]
    fn test_context_kept() {
        let err = Gff3Error::at_line(
            LineError::Attribute {
                pair: String::from("IDgene1"),
            },
            ctx(),
        );
        assert_eq!(err.context(), Some(&ctx()));
        assert!(matches!(err, Gff3Error::Attribute { ref pair, .. } if pair == "IDgene1"));
    }

    #[test]
    fn test_io_names_source() {
        let err = Gff3Error::io(
            "genes.gff3",
            None,
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.context().is_none());
        assert_eq!(err.source_name(), "genes.gff3");
        assert_eq!(err.line_number(), None);
        assert_eq!(err.to_string(), "genes.gff3: I/O error: gone");
    }

    #[test]
    fn test_io_with_line_number() {
        let err = Gff3Error::io(
            "genes.gff3.gz",
            Some(12),
            io::Error::new(io::ErrorKind::InvalidData, "corrupt deflate stream"),
        );
        assert_eq!(err.line_number(), Some(12));
        insta::assert_snapshot!(
            err.to_string(),
            @"genes.gff3.gz:12: I/O error: corrupt deflate stream"
        );
    }

    #[test]
    fn test_line_number_from_context() {
        let err = Gff3Error::at_line(LineError::Columns { found: 2 }, ctx());
        assert_eq!(err.line_number(), Some(3));
        assert_eq!(err.source_name(), "genes.gff3");
    }
}
