// SPDX-License-Identifier: MIT
// Project: decomment
// Description: A program to remove comments from source files.
// File: src/bin/detab.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use anyhow::{bail, Result};
use clap::Parser;
use decomment::stream::{open_input, open_output, run};
use decomment::tabs::{Detab, DEFAULT_TABSTOP};

#[derive(Parser, Debug)]
#[clap(name = "detab", author = "Volker Schwaberow <volker@schwaberow.de>", version, about = "Detab: Replaces tabs with the blanks needed to reach the next tab stop.", long_about = None)]
struct Args {
    /// Input file; reads standard input when omitted or '-'
    #[clap(value_parser)]
    input: Option<String>,

    /// Output file; writes standard output when omitted or '-'
    #[clap(short, long)]
    output: Option<String>,

    /// Tab stop interval in columns
    #[clap(short, long, default_value_t = DEFAULT_TABSTOP)]
    tabstop: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.tabstop == 0 {
        bail!("Tab stop must be at least 1.");
    }

    let mut reader = open_input(args.input.as_deref())?;
    let mut writer = open_output(args.output.as_deref())?;
    let mut filter = Detab::new(args.tabstop);
    run(&mut filter, reader.as_mut(), writer.as_mut())
}
