// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::io::{self, BufRead, BufReader, Read};

use flate2::bufread::MultiGzDecoder;
use log::debug;

pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
pub const GZIP_SUFFIX: &str = ".gz";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Gzip if the name ends in ".gz" or the data starts with the gzip magic bytes.
    #[default]
    Auto,
    Gzip,
    Plain,
}

impl Compression {
    pub fn name(&self) -> &str {
        match self {
            Compression::Auto => "auto",
            Compression::Gzip => "gzip",
            Compression::Plain => "none",
        }
    }
}

pub fn has_gzip_suffix(name: &str) -> bool {
    name.ends_with(GZIP_SUFFIX)
}

// Looks at the buffered data without consuming it.
fn starts_with_gzip_magic<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let buf = reader.fill_buf()?;
    Ok(buf.starts_with(&GZIP_MAGIC))
}

/// Wraps `inner` so that reading it yields decompressed text.
///
/// `name` is only used for suffix detection under `Compression::Auto`. Multi-member gzip
/// streams (e.g. from bgzip) are read to the end, not just the first member.
pub fn decoding_reader<R: Read + 'static>(
    inner: R,
    name: &str,
    compression: Compression,
) -> io::Result<Box<dyn BufRead>> {
    let mut buffered = BufReader::new(inner);
    let gzip = match compression {
        Compression::Gzip => true,
        Compression::Plain => false,
        Compression::Auto => has_gzip_suffix(name) || starts_with_gzip_magic(&mut buffered)?,
    };
    debug!(
        "{}: compression {} -> {}",
        name,
        compression.name(),
        if gzip { "gzip" } else { "none" }
    );

    if gzip {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(buffered))))
    } else {
        Ok(Box::new(buffered))
    }
}
