// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use flate2::{write::GzEncoder, Compression};

pub fn write_plain(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, text).expect("write plain fixture");
    path
}

pub fn write_gzip(dir: &Path, name: &str, text: &str) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).expect("create gzip fixture");
    let mut enc = GzEncoder::new(file, Compression::default());
    enc.write_all(text.as_bytes()).expect("compress fixture");
    enc.finish().expect("finish gzip fixture");
    path
}
