// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fs::File;
use std::io::BufRead;
use std::path::Path;

use log::{debug, info};

use crate::errors::{Gff3Error, LineContext};
use crate::gff::compression::{decoding_reader, Compression};
use crate::gff::line::{decode_line, ScoreMode};
use crate::gff::record::Gff3File;

pub const COMMENT_PREFIX: char = '#';

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub score_mode: ScoreMode,
    pub compression: Compression,
}

/// Reads a whole GFF3 file with the default options (verbatim score, automatic gzip detection).
pub fn read_gff3_file<P: AsRef<Path>>(path: P) -> Result<Gff3File, Gff3Error> {
    read_gff3_file_with(path, &ParseOptions::default())
}

pub fn read_gff3_file_with<P: AsRef<Path>>(
    path: P,
    options: &ParseOptions,
) -> Result<Gff3File, Gff3Error> {
    let path = path.as_ref();
    let name = path.display().to_string();
    info!("Reading GFF3 file {}", name);
    let file = File::open(path).map_err(|e| Gff3Error::io(&name, None, e))?;
    let reader = decoding_reader(file, &name, options.compression)
        .map_err(|e| Gff3Error::io(&name, None, e))?;
    read_gff3(reader, &name, options)
}

// Lines starting with '#' (comments, pragmas, '##FASTA') are skipped without further checks.
// Every other line, blank ones included, must decode; the first one that doesn't aborts the read
// and nothing is returned.

pub fn read_gff3<R: BufRead>(
    reader: R,
    source: &str,
    options: &ParseOptions,
) -> Result<Gff3File, Gff3Error> {
    let mut result: Gff3File = Vec::new();
    let mut comments = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let l = line.map_err(|e| Gff3Error::io(source, Some(idx + 1), e))?;
        if l.starts_with(COMMENT_PREFIX) {
            comments += 1;
            continue;
        }
        let record = decode_line(&l, options.score_mode).map_err(|e| {
            Gff3Error::at_line(
                e,
                LineContext {
                    source: source.to_string(),
                    line_number: idx + 1,
                    line: l.clone(),
                },
            )
        })?;
        result.push(record);
    }

    debug!("{}: skipped {} comment line(s)", source, comments);
    info!("{}: read {} feature(s)", source, result.len());
    Ok(result)
}
