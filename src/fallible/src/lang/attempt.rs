use std::panic::{catch_unwind, AssertUnwindSafe};

use super::{outcome::Outcome, thrown::Thrown};

// === Capture === //

/// Runs `computation` once, turning a panic raised during the call into a [`Thrown`] failure.
///
/// The computation is asserted to be unwind safe: a panicking computation never hands its
/// partially updated state back to the caller, only the raised payload.
pub(crate) fn capture<R>(computation: impl FnOnce() -> R) -> Outcome<R> {
	match catch_unwind(AssertUnwindSafe(computation)) {
		Ok(value) => Outcome::Success(value),
		Err(payload) => {
			let thrown = Thrown::from_panic(payload);
			log::debug!("Captured a panic raised by an attempted computation: {thrown}");
			Outcome::Failure(thrown)
		}
	}
}

// === attempt === //

/// Runs an immediate computation and reports its single outcome as a value.
///
/// A panic raised by `computation` is captured as [`Outcome::Failure`] instead of unwinding
/// into the caller. The panic hook still runs first, so with the default hook every captured
/// failure also prints a "thread panicked at" line to stderr.
///
/// Computations that produce a future become the success value themselves here.
#[cfg_attr(
	feature = "deferred",
	doc = "Use [`attempt_deferred`](super::deferred::attempt_deferred) or \
	       [`attempt_with`](super::deferred::attempt_with) to wait on them instead."
)]
pub fn attempt<T>(computation: impl FnOnce() -> T) -> Outcome<T> {
	capture(computation)
}

// === Tests === //
