// SPDX-License-Identifier: MIT
// Project: decomment
// Description: A program to remove comments from source files.
// File: src/main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use anyhow::Result;
use clap::Parser;
use decomment::stream::{open_input, open_output, run};
use decomment::strip::Stripper;

#[derive(Parser, Debug)]
#[clap(name = "decomment", author = "Volker Schwaberow <volker@schwaberow.de>", version, about = "Decomment: Removes comments from source text, preserving string and char literals.", long_about = None)]
struct Args {
    /// Input file; reads standard input when omitted or '-'
    #[clap(value_parser)]
    input: Option<String>,

    /// Output file; writes standard output when omitted or '-'
    #[clap(short, long)]
    output: Option<String>,

    #[clap(short, long, action = clap::ArgAction::SetTrue)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut reader = open_input(args.input.as_deref())?;
    let mut writer = open_output(args.output.as_deref())?;

    let mut stripper = Stripper::new();
    run(&mut stripper, reader.as_mut(), writer.as_mut())?;
    drop(writer);

    if args.verbose {
        let line = stripper.line_comments();
        let block = stripper.block_comments();
        if line + block > 0 {
            eprintln!("Decomment Statistics:");
            eprintln!("- Total line comments removed: {}", line);
            eprintln!("- Total block comments removed: {}", block);
        } else {
            eprintln!("Decomment: No comments found to remove.");
        }
        if let Some(output_path) = &args.output {
            eprintln!("Decomment: Output written to {}", output_path);
        }
    }

    Ok(())
}
