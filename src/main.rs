// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use gff3parse::Gff3Error;

fn main() -> Result<(), Gff3Error> {
    gff3parse::run()
}
