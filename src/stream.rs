// SPDX-License-Identifier: MIT
// Project: decomment
// Description: A program to remove comments from source files.
// File: src/stream.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A character-at-a-time stream filter. `feed` may emit zero or more
/// characters per input character; `finish` is called exactly once after the
/// last character so a filter can flush anything it is still holding.
pub trait Filter {
    fn feed(&mut self, c: char, out: &mut String);

    fn finish(&mut self, _out: &mut String) {}
}

/// Drives `filter` over `reader` line by line, writing each processed
/// segment as soon as it is produced. Filter state carries across lines, so
/// constructs spanning lines (block comments, columns) behave as if the
/// input were one stream.
pub fn run<F: Filter>(
    filter: &mut F,
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<()> {
    let mut line_buffer = String::new();
    let mut out_buffer = String::new();

    loop {
        line_buffer.clear();
        let n = reader
            .read_line(&mut line_buffer)
            .context("Failed to read input line")?;
        if n == 0 {
            break;
        }
        out_buffer.clear();
        for c in line_buffer.chars() {
            filter.feed(c, &mut out_buffer);
        }
        writer
            .write_all(out_buffer.as_bytes())
            .context("Failed to write processed line")?;
    }

    out_buffer.clear();
    filter.finish(&mut out_buffer);
    writer
        .write_all(out_buffer.as_bytes())
        .context("Failed to write final segment")?;
    writer.flush().context("Failed to flush output")?;
    Ok(())
}

/// Opens the input source: a path, or stdin for `None` / `"-"`.
pub fn open_input(input: Option<&str>) -> Result<Box<dyn BufRead>> {
    match input {
        None | Some("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path_str) => {
            let path = Path::new(path_str);
            if !path.exists() {
                bail!("Input file '{}' does not exist.", path_str);
            }
            if !path.is_file() {
                bail!("Input path '{}' is not a file.", path_str);
            }
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file '{}'", path_str))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Opens the output sink: a path, or stdout for `None` / `"-"`.
pub fn open_output(output: Option<&str>) -> Result<Box<dyn Write>> {
    match output {
        None | Some("-") => Ok(Box::new(BufWriter::new(io::stdout()))),
        Some(path_str) => {
            let file = File::create(path_str)
                .with_context(|| format!("Failed to create output file '{}'", path_str))?;
            Ok(Box::new(BufWriter::new(file)))
        }
    }
}
