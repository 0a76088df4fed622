// ABOUTME: CLI for minimizing markdown converted from PDF/HTML sources.
// ABOUTME: Prints to stdout, writes to a named file, or rewrites files in place.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::Parser;
use mdmin_core::minimize;

/// Strip conversion artifacts from markdown files.
#[derive(Parser, Debug)]
#[command(name = "mdmin")]
#[command(about = "Strip PDF/HTML conversion artifacts from markdown", long_about = None)]
struct Args {
    /// Rewrite each input file in place, reporting the size reduction.
    #[arg(long = "in-place")]
    in_place: bool,

    /// Input file, or an input/output pair. Use "-" to read one document from stdin.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.in_place {
        for path in &args.paths {
            rewrite_in_place(path)?;
        }
        return Ok(());
    }

    match args.paths.as_slice() {
        [input] => {
            let text = load_text(input)?;
            print!("{}", minimize(&text));
        }
        [input, output] => {
            let text = load_text(input)?;
            fs::write(output, minimize(&text))?;
            println!("{} -> {}", input.display(), output.display());
        }
        _ => bail!("use --in-place for multiple files"),
    }

    Ok(())
}

/// Read a whole document as UTF-8, treating "-" as stdin.
fn load_text(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    Ok(fs::read_to_string(path)?)
}

/// Minimize one file on disk, writing only when the content changed.
fn rewrite_in_place(path: &Path) -> Result<()> {
    let original = fs::read_to_string(path)?;
    let minimized = minimize(&original);
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    if minimized == original {
        println!("{}: no changes", name);
        return Ok(());
    }

    fs::write(path, &minimized)?;

    let saved = original.len() as i64 - minimized.len() as i64;
    let pct = if original.is_empty() {
        0.0
    } else {
        saved as f64 / original.len() as f64 * 100.0
    };
    println!(
        "{}: {} -> {} bytes ({:.0}% smaller)",
        name,
        group_thousands(original.len()),
        group_thousands(minimized.len()),
        pct
    );
    Ok(())
}

/// Format a byte count with thousands separators: 1234567 -> "1,234,567".
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
