// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod attributes;
pub mod compression;
pub mod line;
pub mod reader;
pub mod record;
