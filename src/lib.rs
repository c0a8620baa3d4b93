#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, stderr + abort fatal channel
// - alloc: Report impls for alloc types in no_std
// - derive: re-export the proc-macros
// - detect: concrete-type capability detection
// - tracing: structured event on the fatal path

//! # tola-result
//!
//! A success-or-failure value with a fluent combinator algebra.
//!
//! **Tagged storage, compile-time gating, no sentinels.**
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capability Probe                                        |
//! |  - Report (diagnostic rendering, unit-error gate)                 |
//! |  - Detect / DetectPair + probe! (concrete-type detection)         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Tagged Storage                                          |
//! |  - Slot<T, E>: union of ManuallyDrop<T> / ManuallyDrop<E> + tag   |
//! |  - construct / destroy / take, 8 copy/move transfer cases         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Result Value                                            |
//! |  - Ok / Err markers, Result<T, E>                                 |
//! |  - queries, extraction, combinators, equality                     |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Fatal channel: diagnostic line, then abort                       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! Capabilities are checked by the type system only. An operation whose
//! requirement is not met (`unwrap_or_default` without `T: Default`,
//! `contains` without `T: PartialEq<U>`, an `Err` of unit type) fails to
//! build; nothing is decided at runtime.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tola_result::{Err, Ok, Report, Result};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Report)]
//! enum Code { Empty, Overflow }
//!
//! fn parse(raw: &str) -> Result<u32, Code> {
//!     if raw.is_empty() {
//!         return Err(Code::Empty).into();
//!     }
//!     raw.parse::<u32>()
//!         .map_or_else(|_| Err(Code::Overflow).into(), |v| Ok(v).into())
//! }
//!
//! let doubled = parse("21").map(|v| v * 2);
//! assert_eq!(doubled, Ok(42));
//! assert_eq!(parse("").unwrap_or(0), 0);
//! ```

// Allow `::tola_result` to work inside the crate itself
extern crate self as tola_result;

#[cfg(feature = "alloc")]
extern crate alloc;

// Re-export paste for the detection macros
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Capability Probe
// =============================================================================
pub mod probe;

// =============================================================================
// Layer 1: Tagged Storage
// =============================================================================
mod storage;

// =============================================================================
// Layer 2: Result Value
// =============================================================================
pub mod result;

// =============================================================================
// Process Error Channel
// =============================================================================
pub mod fatal;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use probe::{Debugged, Displayed, Report};
pub use result::{Err, Ok, Result, UNWRAP_ERR_MESSAGE, UNWRAP_OK_MESSAGE};

// Re-export proc-macros
#[cfg(feature = "derive")]
pub use macros::{probe, Report};

/// Common items for working with results.
pub mod prelude {
    pub use crate::probe::{Debugged, Displayed, Report, Detect, DetectPair};
    pub use crate::result::{Err, Ok, Result};
    #[cfg(feature = "derive")]
    pub use macros::{probe, Report};
}
