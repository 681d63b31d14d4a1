// SPDX-License-Identifier: MIT
// Project: decomment
// Description: A program to remove comments from source files.
// File: src/lib.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

pub mod stream;
pub mod strip;
pub mod tabs;

pub use stream::Filter;
pub use strip::{strip_chars, strip_comments, Stripper};
pub use tabs::{Detab, Entab, DEFAULT_TABSTOP};
