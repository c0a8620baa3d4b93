//! Tests for `probe!` and the detection table behind it.

use tola_result::probe::{Detect, DetectPair};
use tola_result::{probe, Report, Result};

struct NoDefault;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Report)]
enum Level {
    #[default]
    Low,
    High,
}

// =============================================================================
// Single capabilities
// =============================================================================

#[test]
fn test_single_capabilities() {
    assert!(probe!(String: Clone));
    assert!(!probe!(String: Copy));
    assert!(probe!(i32: Copy));
    assert!(probe!(String: Debug));
    assert!(probe!(String: Default));
    assert!(!probe!(NoDefault: Default));
    assert!(probe!(String: Send & Sync));
    assert!(!probe!(std::rc::Rc<u8>: Send));
}

#[test]
fn test_report_capability() {
    assert!(probe!(u32: Report));
    assert!(probe!(String: Report));
    assert!(probe!(Level: Report));
    assert!(!probe!(NoDefault: Report));
}

#[test]
fn test_unit_is_reportable_but_carries_nothing() {
    assert!(probe!((): Report));
    assert!(!<() as Report>::HAS_PAYLOAD);
    assert!(<u8 as Report>::HAS_PAYLOAD);
}

// =============================================================================
// Boolean expressions
// =============================================================================

#[test]
fn test_boolean_expressions() {
    assert!(probe!(String: Clone & !Copy));
    assert!(probe!(String: Clone | Copy));
    assert!(probe!(i32: (Clone | Debug) & Copy));
    assert!(!probe!(NoDefault: Clone | Debug | Default));
    assert!(probe!(NoDefault: !(Clone & Copy)));
}

#[test]
fn test_multiple_checks() {
    assert!(probe!(String: Clone, i32: Copy));
    assert!(!probe!(String: Clone, String: Copy));
    assert!(probe!(Level: Copy & Hash, u8: Eq,));
}

// =============================================================================
// Relationships
// =============================================================================

#[test]
fn test_pair_capabilities() {
    assert!(probe!(String: PartialEq<str>));
    assert!(probe!(String: PartialEq<&str>));
    assert!(!probe!(u32: PartialEq<u64>));
    assert!(probe!(u64: From<u8>));
    assert!(!probe!(u8: From<u64>));
    assert!(probe!(u8: Into<u64>));
}

#[test]
fn test_detect_consts_directly() {
    assert!(Detect::<Level>::IS_DEFAULT);
    assert!(DetectPair::<String, str>::IS_PARTIAL_EQ_WITH);
}

// =============================================================================
// Result capabilities follow its payloads
// =============================================================================

#[test]
fn test_result_capabilities() {
    assert!(probe!(Result<u32, String>: Clone & Default & PartialEq & Debug));
    assert!(!probe!(Result<u32, String>: Copy));
    assert!(!probe!(Result<NoDefault, String>: Default));
    assert!(!probe!(Result<NoDefault, String>: Clone));
    assert!(probe!(Result<u32, Level>: Report & Hash & Eq));
    assert!(probe!(Result<String, String>: PartialEq<Result<&'static str, &'static str>>));
}

// =============================================================================
// Traits outside the table
// =============================================================================

#[allow(dead_code)]
trait Tagged {}
impl Tagged for String {}

#[test]
fn test_custom_trait() {
    assert!(probe!(String: Tagged));
    assert!(!probe!(u32: Tagged));
    assert!(probe!(String: Tagged & Clone));
}
