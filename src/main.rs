use clap::Parser;
use deskcalc::engine::CalculatorEngine;
use deskcalc::reader::TokenReader;
use deskcalc::writer::TraceWriter;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input key-tape CSV file
    input: PathBuf,

    /// Emit a per-keystroke CSV trace instead of just the final display
    #[arg(long)]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = TokenReader::new(file);
    let mut engine = CalculatorEngine::new();

    let stdout = io::stdout();
    let mut trace = if cli.trace {
        let mut writer = TraceWriter::new(stdout.lock());
        writer.write_header().into_diagnostic()?;
        Some(writer)
    } else {
        None
    };

    for key_result in reader.keys() {
        match key_result {
            Ok(key) => {
                engine.press(key);
                if let Some(writer) = trace.as_mut() {
                    writer.write_step(key, &engine).into_diagnostic()?;
                }
            }
            Err(e) => {
                eprintln!("Error reading key: {}", e);
            }
        }
    }

    match trace.as_mut() {
        Some(writer) => writer.flush().into_diagnostic()?,
        None => println!("{}", engine.display()),
    }

    Ok(())
}
