//! Error reporting built off the Rust standard library [Error] trait.

use std::{error::Error, fmt};

use derive_where::derive_where;

// === Error formatting === //

pub trait ErrorFormatExt: Error {
	fn format_error(&self) -> FormattedError<'_, Self> {
		FormattedError(self)
	}

	#[track_caller]
	fn raise(&self) -> ! {
		panic!("{}", self.format_error());
	}

	fn log(&self) {
		log::error!("{}", self.format_error());
	}
}

impl<T: ?Sized + Error> ErrorFormatExt for T {}

#[derive_where(Copy, Clone)]
pub struct FormattedError<'a, T: ?Sized>(pub &'a T);

impl<T: ?Sized + Error> fmt::Display for FormattedError<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let target = self.0;

		// Write context
		write!(f, "Error: {}", target)?;

		// Write cause chain
		let mut cause_iter = target.source();
		if cause_iter.is_some() {
			writeln!(f, "\n\nCaused by:")?;
		}

		while let Some(cause) = cause_iter {
			for line in cause.to_string().lines() {
				writeln!(f, "\t{}", line)?;
			}
			cause_iter = cause.source();
		}

		Ok(())
	}
}

// === ContractViolation === //

/// Raised when a container's payload is taken without first checking its discriminant.
///
/// This is a programmer error. Unwrapping methods raise it as a panic through
/// [`ErrorFormatExt::raise`]; the `try_*` variants hand it back as a value instead.
#[derive(Debug, Clone)]
pub struct ContractViolation {
	operation: &'static str,
	found: &'static str,
	payload: Option<String>,
}

impl ContractViolation {
	pub const fn new(operation: &'static str, found: &'static str) -> Self {
		Self {
			operation,
			found,
			payload: None,
		}
	}

	/// Attaches the `Debug` rendering of the payload the caller did not expect to find.
	pub fn with_payload(mut self, payload: &dyn fmt::Debug) -> Self {
		self.payload = Some(format!("{payload:?}"));
		self
	}

	pub fn operation(&self) -> &'static str {
		self.operation
	}

	pub fn found(&self) -> &'static str {
		self.found
	}

	pub fn payload(&self) -> Option<&str> {
		self.payload.as_deref()
	}
}

impl fmt::Display for ContractViolation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "called `{}` on {}", self.operation, self.found)?;

		if let Some(payload) = &self.payload {
			write!(f, ": {payload}")?;
		}

		Ok(())
	}
}

impl Error for ContractViolation {}

// === Tests === //
