//! Absence and failure as ordinary typed values.
//!
//! [`Maybe`] holds a value or nothing, [`Outcome`] holds a success or a failure, and the
//! `attempt` family runs a computation (immediate or deferred) and reports anything it raises as
//! an [`Outcome::Failure`] instead of letting the panic unwind into the caller.
//!
//! Raised values are captured with unwinding, so this crate does nothing useful under
//! `panic = "abort"`.

pub mod debug;
pub mod lang;

pub use lang::{
	attempt::attempt,
	maybe::Maybe,
	outcome::Outcome,
	thrown::Thrown,
};

#[cfg(feature = "deferred")]
pub use lang::deferred::{attempt_deferred, attempt_with, Attempt, Deferred, Invocation};
