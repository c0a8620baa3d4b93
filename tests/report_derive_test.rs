//! Tests for `#[derive(Report)]`.

#![allow(dead_code)]

use std::fmt;

use tola_result::probe::Rendered;
use tola_result::Report;

fn render<R: Report + ?Sized>(value: &R) -> String {
    Rendered(value).to_string()
}

// =============================================================================
// Field-less enums: underlying integer
// =============================================================================

#[derive(Report)]
enum Implicit {
    First,
    Second,
    Third,
}

#[derive(Report)]
#[repr(u16)]
enum HttpStatus {
    NotFound = 404,
    Teapot = 418,
}

#[derive(Report)]
#[repr(i8)]
enum Signed {
    Negative = -3,
    Zero = 0,
}

#[derive(Report)]
#[repr(u32)]
enum Aligned {
    Only = 9,
}

#[test]
fn test_implicit_discriminants() {
    assert_eq!(render(&Implicit::First), "0");
    assert_eq!(render(&Implicit::Second), "1");
    assert_eq!(render(&Implicit::Third), "2");
}

#[test]
fn test_explicit_repr() {
    assert_eq!(render(&HttpStatus::NotFound), "404");
    assert_eq!(render(&HttpStatus::Teapot), "418");
    assert_eq!(render(&Signed::Negative), "-3");
    assert_eq!(render(&Signed::Zero), "0");
    assert_eq!(render(&Aligned::Only), "9");
}

// =============================================================================
// Structs and data-carrying enums
// =============================================================================

#[derive(Report)]
struct Code(u32);

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.0)
    }
}

#[derive(Debug, Report)]
#[report(debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Report)]
#[report(debug)]
enum Failure {
    Io(u8),
    Parse { line: usize },
}

#[derive(Report)]
#[report(display)]
enum Shown {
    Word(&'static str),
}

impl fmt::Display for Shown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shown::Word(w) => f.write_str(w),
        }
    }
}

#[derive(Debug, Report)]
#[report(debug)]
struct Wrapper<T>(T);

#[test]
fn test_struct_defaults_to_display() {
    assert_eq!(render(&Code(42)), "E0042");
}

#[test]
fn test_debug_mode() {
    assert_eq!(render(&Point { x: 1, y: -2 }), "Point { x: 1, y: -2 }");
    assert_eq!(render(&Failure::Io(5)), "Io(5)");
    assert_eq!(render(&Failure::Parse { line: 7 }), "Parse { line: 7 }");
}

#[test]
fn test_display_mode_on_enum() {
    assert_eq!(render(&Shown::Word("hi")), "hi");
}

#[test]
fn test_generic_struct() {
    assert_eq!(render(&Wrapper(3u8)), "Wrapper(3)");
    assert_eq!(render(&Wrapper("s")), "Wrapper(\"s\")");
}

#[test]
fn test_derived_payloads_carry_information() {
    assert!(<Implicit as Report>::HAS_PAYLOAD);
    assert!(<Point as Report>::HAS_PAYLOAD);
}
