//! Demo: A Small Parsing Pipeline
//!
//! Parses a list of `key=value` lines into a config, showing:
//! 1. Building results with `Ok(..)` / `Err(..)` markers
//! 2. Chaining with `map`, `and_then`, `or_else`, `&` and `|`
//! 3. Capability probing with `probe!`
//! 4. Integer rendering of enum error codes

use tola_result::{probe, Err, Ok, Report, Result};

// =============================================================================
// Domain
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Report)]
#[repr(u8)]
enum ParseError {
    MissingSeparator = 1,
    EmptyKey = 2,
    BadNumber = 3,
}

#[derive(Debug, Default, PartialEq)]
struct Config {
    workers: u32,
    retries: u32,
}

fn split(line: &str) -> Result<(&str, &str), ParseError> {
    match line.split_once('=') {
        Some((key, _)) if key.trim().is_empty() => Err(ParseError::EmptyKey).into(),
        Some((key, value)) => Ok((key.trim(), value.trim())).into(),
        None => Err(ParseError::MissingSeparator).into(),
    }
}

fn number(raw: &str) -> Result<u32, ParseError> {
    Result::<u32, std::num::ParseIntError>::from(raw.parse::<u32>()).map_err(|_| ParseError::BadNumber)
}

fn apply(mut config: Config, line: &str) -> Result<Config, ParseError> {
    split(line).and_then(|(key, value)| {
        number(value).map(|n| {
            match key {
                "workers" => config.workers = n,
                "retries" => config.retries = n,
                _ => {}
            }
            config
        })
    })
}

// =============================================================================
// Main
// =============================================================================

fn main() {
    println!("--- Result Pipeline ---\n");

    // Part 1: fold lines, stopping at the first error
    let lines = ["workers = 4", "retries=2"];
    let config = lines
        .iter()
        .fold(Result::<Config, ParseError>::default(), |acc, line| {
            acc.and_then(|c| apply(c, line))
        });
    println!("parsed: {config:?}");
    assert_eq!(config, Ok(Config { workers: 4, retries: 2 }));

    let broken = apply(Config::default(), "workers: 4");
    println!("broken: {broken:?}");
    assert!(broken.contains_err(&ParseError::MissingSeparator));

    // Part 2: fall back to defaults
    let workers = number("eight").or_else(|_| number("8")).unwrap_or(1);
    println!("workers with fallback: {workers}");
    assert_eq!(workers, 8);

    let first = number("x") | number("16");
    let both = number("1") & split("a=b");
    println!("or: {first:?}, and: {both:?}");

    // Part 3: what the payload types can do
    println!("\n=== Capabilities ===");
    println!("ParseError: Copy & Report      = {}", probe!(ParseError: Copy & Report));
    println!("Config: Default & !Clone       = {}", probe!(Config: Default & !Clone));
    println!("Result<Config, _>: Default     = {}", probe!(Result<Config, ParseError>: Default));
    assert!(probe!(Result<Config, ParseError>: Default & !Clone));

    // Part 4: error codes render as integers on the fatal path
    let code = number("-1").unwrap_err();
    assert_eq!(code, ParseError::BadNumber);
    println!("\nBadNumber renders as {}", tola_result::probe::Rendered(&code));

    println!("\n--- done ---");
}
