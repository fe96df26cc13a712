// Copyright (c) 2025 Hemashushu <hippospark@gmail.com>, All rights reserved.
//
// This Source Code Form is subject to the terms of
// the Mozilla Public License version 2.0 and additional exceptions.
// For more details, see the LICENSE, LICENSE.additional, and CONTRIBUTING files.

use std::{
    io::{self, BufRead, Write},
    process,
};

use bitcalc::{ast_printer::Postfix, error::CalcError, parse_from_str, render};
use clap::Parser;

/// bitcalc is a visual calculator for bitwise expressions. Every operator
/// application is shown as aligned binary columns, followed by the decimal result.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Also print each expression in postfix (reverse Polish) notation.
    #[arg(short, long)]
    postfix: bool,

    /// Evaluate this expression and exit, instead of starting the interactive loop.
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    match &args.expression {
        Some(expression) => match run(expression, args.postfix) {
            Ok(output) => println!("{output}"),
            Err(e) => {
                eprintln!("{}", e.with_source(expression));
                process::exit(1);
            }
        },
        None => {
            let mut input = io::stdin().lock();
            let mut output = io::stdout();
            let mut diagnostics = io::stderr();
            if let Err(e) = start_repl(&mut input, &mut output, &mut diagnostics, args.postfix) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    }
}

fn run(expression: &str, postfix: bool) -> Result<String, CalcError> {
    let output = render(expression)?;
    if postfix {
        let tree = parse_from_str(expression)?;
        Ok(format!("postfix: {}\n\n{}", Postfix(&tree), output))
    } else {
        Ok(output)
    }
}

/// Reads one expression per line until the end of `input`.
///
/// Results go to `output` and diagnostics to `diagnostics`, an error in
/// one line does not stop the loop.
fn start_repl(
    input: &mut impl BufRead,
    output: &mut impl Write,
    diagnostics: &mut impl Write,
    postfix: bool,
) -> io::Result<()> {
    writeln!(
        output,
        "bitcalc {} - a visual calculator for bitwise expressions",
        env!("CARGO_PKG_VERSION")
    )?;
    writeln!(output, "Use Ctrl+D to quit.\n")?;

    let mut line = String::new();

    loop {
        write!(output, ">>> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input.
            writeln!(output)?;
            return Ok(());
        }

        let expression = line.trim();
        if expression.is_empty() {
            continue;
        }

        match run(expression, postfix) {
            Ok(text) => writeln!(output, "\n{text}\n")?,
            Err(e) => writeln!(diagnostics, "{}", e.with_source(expression))?,
        }
    }
}
