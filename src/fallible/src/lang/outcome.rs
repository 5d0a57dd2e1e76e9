use std::fmt;

use crate::debug::error::{ContractViolation, ErrorFormatExt};

use super::{maybe::Maybe, thrown::Thrown};

// === Outcome === //

/// The result of an operation: exactly one success value or exactly one failure value.
///
/// Instances only come from [`Outcome::success`], [`Outcome::failure`] (or their variants),
/// the adapters in [`attempt`](super::attempt), or a conversion from [`Result`]. The failure type
/// defaults to [`Thrown`], which can hold any raised value.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub enum Outcome<T, E = Thrown> {
	Success(T),
	Failure(E),
}

impl<T, E> Outcome<T, E> {
	pub const fn success(value: T) -> Self {
		Self::Success(value)
	}

	pub const fn failure(error: E) -> Self {
		Self::Failure(error)
	}

	pub const fn is_ok(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	pub const fn is_err(&self) -> bool {
		!self.is_ok()
	}

	/// Returns the success value.
	///
	/// ## Panics
	///
	/// Raises a [`ContractViolation`] carrying the failure payload if this is a
	/// [`Failure`](Outcome::Failure).
	#[track_caller]
	pub fn unwrap(self) -> T
	where
		E: fmt::Debug,
	{
		match self.try_unwrap() {
			Ok(value) => value,
			Err(violation) => violation.raise(),
		}
	}

	pub fn unwrap_or(self, fallback: T) -> T {
		match self {
			Self::Success(value) => value,
			Self::Failure(_) => fallback,
		}
	}

	/// Returns the failure value.
	///
	/// ## Panics
	///
	/// Raises a [`ContractViolation`] carrying the success payload if this is a
	/// [`Success`](Outcome::Success).
	#[track_caller]
	pub fn unwrap_err(self) -> E
	where
		T: fmt::Debug,
	{
		match self.try_unwrap_err() {
			Ok(error) => error,
			Err(violation) => violation.raise(),
		}
	}

	pub fn try_unwrap(self) -> Result<T, ContractViolation>
	where
		E: fmt::Debug,
	{
		match self {
			Self::Success(value) => Ok(value),
			Self::Failure(error) => Err(ContractViolation::new(
				"Outcome::unwrap()",
				"a `Failure` value",
			)
			.with_payload(&error)),
		}
	}

	pub fn try_unwrap_err(self) -> Result<E, ContractViolation>
	where
		T: fmt::Debug,
	{
		match self {
			Self::Success(value) => Err(ContractViolation::new(
				"Outcome::unwrap_err()",
				"a `Success` value",
			)
			.with_payload(&value)),
			Self::Failure(error) => Ok(error),
		}
	}

	pub fn ok(self) -> Maybe<T> {
		match self {
			Self::Success(value) => Maybe::Present(value),
			Self::Failure(_) => Maybe::Absent,
		}
	}

	pub fn err(self) -> Maybe<E> {
		match self {
			Self::Success(_) => Maybe::Absent,
			Self::Failure(error) => Maybe::Present(error),
		}
	}

	pub const fn as_ref(&self) -> Outcome<&T, &E> {
		match self {
			Self::Success(value) => Outcome::Success(value),
			Self::Failure(error) => Outcome::Failure(error),
		}
	}

	pub fn as_mut(&mut self) -> Outcome<&mut T, &mut E> {
		match self {
			Self::Success(value) => Outcome::Success(value),
			Self::Failure(error) => Outcome::Failure(error),
		}
	}
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	fn from(value: Result<T, E>) -> Self {
		match value {
			Ok(value) => Self::Success(value),
			Err(error) => Self::Failure(error),
		}
	}
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
	fn from(value: Outcome<T, E>) -> Self {
		match value {
			Outcome::Success(value) => Ok(value),
			Outcome::Failure(error) => Err(error),
		}
	}
}

// === Tests === //
