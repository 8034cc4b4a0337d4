// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

//! Reads GFF3 annotation files into `FeatureRecord`s.
//!
//! ```no_run
//! let records = gff3parse::read_gff3_file("genes.gff3.gz")?;
//! for rec in &records {
//!     println!("{}\t{}\t{}-{}", rec.seqid, rec.feature_type, rec.start, rec.end);
//! }
//! # Ok::<(), gff3parse::Gff3Error>(())
//! ```

pub mod errors;
pub mod gff;
mod runner;

pub use crate::errors::{Gff3Error, LineContext};
pub use crate::gff::compression::Compression;
pub use crate::gff::line::{decode_line, ScoreMode};
pub use crate::gff::reader::{read_gff3, read_gff3_file, read_gff3_file_with, ParseOptions};
pub use crate::gff::record::{Attributes, FeatureRecord, Gff3File, Score};

pub fn run() -> Result<(), Gff3Error> {
    runner::run()
}
