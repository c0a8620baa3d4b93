//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `probe!` | function macro | Capability expression over concrete types |
//! | `#[derive(Report)]` | on struct/enum | Diagnostic rendering for payloads |

mod probe;
mod report;

pub use probe::{expand_probe, ProbeInput};
pub use report::expand_derive_report;
