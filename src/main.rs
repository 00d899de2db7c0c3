//! rainbow-delim - print a file with matching delimiters colored by depth

use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};

use rainbow_delim::config::Config;
use rainbow_delim::render::{marker_spans, Span};
use rainbow_delim::scan::scan_with_config;
use rainbow_delim::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut listing = false;
    let mut file: Option<PathBuf> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--no-color" => listing = true,
            other if !other.starts_with('-') => file = Some(PathBuf::from(other)),
            other => {
                eprintln!("Unknown option: {}", other);
                print_usage();
                process::exit(2);
            }
        }
    }

    let Some(path) = file else {
        print_usage();
        process::exit(2);
    };

    let text = fs::read_to_string(&path)?;
    let config = Config::load()?;
    let pairs = scan_with_config(&text, &config);

    if listing {
        print_listing(&pairs);
    } else {
        let spans = marker_spans(&pairs, &config.palette);
        render(&text, &spans)?;
    }

    Ok(())
}

/// Print each pair as one line: offsets, delimiter, color index
fn print_listing(pairs: &[rainbow_delim::DelimiterPair]) {
    for pair in pairs {
        let kind = if pair.is_quote { "quote" } else { "bracket" };
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            pair.open, pair.close, pair.delimiter, pair.color_index, kind, pair.quote_length
        );
    }
}

/// Write the document to stdout, coloring the marker spans
fn render(text: &str, spans: &[Span]) -> Result<()> {
    let mut stdout = io::stdout();
    // Spans are sorted by start and only cover marker characters, so a
    // forward cursor into the list is enough
    let mut next = 0;

    for (i, ch) in text.chars().enumerate() {
        while next < spans.len() && spans[next].end <= i {
            next += 1;
        }
        let styled = spans[next..]
            .iter()
            .take_while(|s| s.start <= i)
            .find(|s| s.contains(i));

        match styled {
            Some(span) => {
                let fg = span.style.fg;
                queue!(
                    stdout,
                    SetForegroundColor(Color::Rgb {
                        r: fg.r,
                        g: fg.g,
                        b: fg.b
                    })
                )?;
                if span.style.bold {
                    queue!(stdout, SetAttribute(Attribute::Bold))?;
                }
                queue!(
                    stdout,
                    Print(ch),
                    SetAttribute(Attribute::NormalIntensity),
                    ResetColor
                )?;
            }
            None => queue!(stdout, Print(ch))?,
        }
    }

    stdout.flush()?;
    Ok(())
}

fn print_usage() {
    println!(
        "rainbow-delim {} - color matching delimiters by nesting depth",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: rainbow-delim [OPTIONS] FILE");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!("      --no-color Print a tab-separated pair listing instead");
    println!();
    println!("Configuration is read from ~/.rainbow-delim.toml if present.");
}

fn print_version() {
    println!("rainbow-delim {}", env!("CARGO_PKG_VERSION"));
}
