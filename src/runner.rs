// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fmt,
    io::{self, Write},
};

use clap::{Parser, ValueEnum};
use itertools::Itertools;
use log::info;

use crate::errors::Gff3Error;
use crate::gff::compression::{decoding_reader, Compression};
use crate::gff::line::ScoreMode;
use crate::gff::reader::{read_gff3, read_gff3_file_with, ParseOptions};
use crate::gff::record::Gff3File;

const STDIN_NAME: &str = "<stdin>";
const STDOUT_NAME: &str = "<stdout>";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None) ]
struct Cli {
    /// GFF3 file, plain or gzip-compressed ("-" reads standard input)
    gff_fname: String,

    /// Parse the score column as a number ('.' is then an error)
    #[arg(short, long = "numeric-score")]
    numeric_score: bool,

    /// Input compression
    #[arg(short, long = "compression", default_value_t = CompressionArg::Auto,
        help = "Input compression [auto|gzip|plain] (or just a|g|p); default: auto",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    compression: CompressionArg,

    /// Output format
    #[arg(short, long = "format", default_value_t = OutputFormat::Summary,
        help = "Output format [summary|json] (or just s|j); default: summary",
        hide_default_value = true,
        hide_possible_values = true,
    )]
    format: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum CompressionArg {
    #[clap(name = "auto")]
    #[clap(alias = "a")]
    Auto,
    #[clap(name = "gzip")]
    #[clap(alias = "g")]
    Gzip,
    #[clap(name = "plain")]
    #[clap(alias = "p")]
    Plain,
}

impl fmt::Display for CompressionArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CompressionArg::Auto => "auto",
            CompressionArg::Gzip => "gzip",
            CompressionArg::Plain => "plain",
        };
        write!(f, "{}", s)
    }
}

impl From<CompressionArg> for Compression {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::Auto => Compression::Auto,
            CompressionArg::Gzip => Compression::Gzip,
            CompressionArg::Plain => Compression::Plain,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    #[clap(name = "summary")]
    #[clap(alias = "s")]
    Summary,
    #[clap(name = "json")]
    #[clap(alias = "j")]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Summary => "summary",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", s)
    }
}

impl Cli {
    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            score_mode: if self.numeric_score {
                ScoreMode::Numeric
            } else {
                ScoreMode::Verbatim
            },
            compression: self.compression.into(),
        }
    }
}

// Feature count, then counts per seqid and per type, each sorted by name.
fn summary(records: &Gff3File) -> String {
    let mut lines = vec![format!("features: {}", records.len())];

    lines.push(String::from("seqids:"));
    for (seqid, n) in records
        .iter()
        .map(|r| r.seqid.as_str())
        .counts()
        .into_iter()
        .sorted()
    {
        lines.push(format!("  {}: {}", seqid, n));
    }

    lines.push(String::from("types:"));
    for (feature_type, n) in records
        .iter()
        .map(|r| r.feature_type.as_str())
        .counts()
        .into_iter()
        .sorted()
    {
        lines.push(format!("  {}: {}", feature_type, n));
    }

    lines.join("\n")
}

fn read_input(cli: &Cli) -> Result<Gff3File, Gff3Error> {
    let options = cli.parse_options();
    if cli.gff_fname == "-" {
        info!("Reading GFF3 from standard input");
        let reader = decoding_reader(io::stdin().lock(), STDIN_NAME, options.compression)
            .map_err(|e| Gff3Error::io(STDIN_NAME, None, e))?;
        read_gff3(reader, STDIN_NAME, &options)
    } else {
        read_gff3_file_with(&cli.gff_fname, &options)
    }
}

pub fn run() -> Result<(), Gff3Error> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();
    let records = read_input(&cli)?;

    write_output(&records, cli.format).map_err(|e| Gff3Error::io(STDOUT_NAME, None, e))
}

fn write_output(records: &Gff3File, format: OutputFormat) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Summary => writeln!(out, "{}", summary(records))?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, records)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
