//! Process error channel.
//!
//! Reached only when a state-specific extractor is called on the wrong state.
//! One line of text is emitted, then the process stops. Control never
//! returns to the caller.
//!
//! | build             | channel                                  |
//! |-------------------|------------------------------------------|
//! | `std`             | line on stderr, flush, `process::abort`  |
//! | `no_std`          | `panic!` with the same line              |
//! | `+ tracing`       | additionally an `error` event first      |

use core::fmt;
use core::panic::Location;

#[cfg(feature = "tracing")]
use crate::probe::Rendered;
use crate::probe::Report;

/// The diagnostic line: `"{msg}: {payload}"`, or `"{msg}"` for a unit payload.
pub struct Diagnostic<'a, R: ?Sized> {
    msg: &'a str,
    payload: &'a R,
}

impl<'a, R: Report + ?Sized> Diagnostic<'a, R> {
    pub fn new(msg: &'a str, payload: &'a R) -> Self {
        Self { msg, payload }
    }
}

impl<R: Report + ?Sized> fmt::Display for Diagnostic<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.msg)?;
        if R::HAS_PAYLOAD {
            f.write_str(": ")?;
            self.payload.report(f)?;
        }
        fmt::Result::Ok(())
    }
}

/// Report a contract violation and terminate.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn contract_violation<R: Report + ?Sized>(msg: &str, payload: &R) -> ! {
    let diagnostic = Diagnostic::new(msg, payload);
    let location = Location::caller();

    #[cfg(feature = "tracing")]
    tracing::error!(
        target: "tola_result",
        file = location.file(),
        line = location.line(),
        reason = msg,
        payload = %Rendered(payload),
        "result contract violated"
    );

    terminate(&diagnostic, location)
}

#[cfg(feature = "std")]
fn terminate(diagnostic: &dyn fmt::Display, _location: &Location<'_>) -> ! {
    use std::io::Write;

    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    // Nothing useful can be done if stderr is gone; terminate regardless.
    let _ = writeln!(out, "{diagnostic}");
    let _ = out.flush();
    std::process::abort()
}

#[cfg(not(feature = "std"))]
fn terminate(diagnostic: &dyn fmt::Display, location: &Location<'_>) -> ! {
    panic!("{diagnostic} (at {location})")
}
