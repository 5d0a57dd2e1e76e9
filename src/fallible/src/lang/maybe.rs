use crate::debug::error::{ContractViolation, ErrorFormatExt};

// === Maybe === //

/// Either exactly one value of type `T` or nothing.
///
/// Presence is the enum discriminant itself, so a stored `()`, `0` or empty string is still
/// [`Present`](Maybe::Present). Matching on the variants narrows the value statically.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub enum Maybe<T> {
	Present(T),
	Absent,
}

impl<T> Maybe<T> {
	/// The shared absent instance.
	pub const ABSENT: Self = Self::Absent;

	pub const fn present(value: T) -> Self {
		Self::Present(value)
	}

	pub const fn absent() -> Self {
		Self::ABSENT
	}

	pub const fn is_present(&self) -> bool {
		matches!(self, Self::Present(_))
	}

	pub const fn is_absent(&self) -> bool {
		!self.is_present()
	}

	/// Returns the held value.
	///
	/// ## Panics
	///
	/// Raises a [`ContractViolation`] if the value is [`Absent`](Maybe::Absent).
	#[track_caller]
	pub fn unwrap(self) -> T {
		match self.try_unwrap() {
			Ok(value) => value,
			Err(violation) => violation.raise(),
		}
	}

	pub fn unwrap_or(self, fallback: T) -> T {
		match self {
			Self::Present(value) => value,
			Self::Absent => fallback,
		}
	}

	pub fn try_unwrap(self) -> Result<T, ContractViolation> {
		match self {
			Self::Present(value) => Ok(value),
			Self::Absent => Err(ContractViolation::new(
				"Maybe::unwrap()",
				"an `Absent` value",
			)),
		}
	}

	pub const fn as_ref(&self) -> Maybe<&T> {
		match self {
			Self::Present(value) => Maybe::Present(value),
			Self::Absent => Maybe::Absent,
		}
	}

	pub fn as_mut(&mut self) -> Maybe<&mut T> {
		match self {
			Self::Present(value) => Maybe::Present(value),
			Self::Absent => Maybe::Absent,
		}
	}
}

impl<T> Default for Maybe<T> {
	fn default() -> Self {
		Self::ABSENT
	}
}

impl<T> From<Option<T>> for Maybe<T> {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => Self::Present(value),
			None => Self::Absent,
		}
	}
}

impl<T> From<Maybe<T>> for Option<T> {
	fn from(value: Maybe<T>) -> Self {
		match value {
			Maybe::Present(value) => Some(value),
			Maybe::Absent => None,
		}
	}
}

// === Tests === //

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn present_holds_value() {
		let value = Maybe::present(42);

		assert!(value.is_present());
		assert!(!value.is_absent());
		assert_eq!(value.unwrap(), 42);
	}

	#[test]
	fn absent_holds_nothing() {
		let value = Maybe::<u32>::absent();

		assert!(!value.is_present());
		assert!(value.is_absent());
		assert!(Maybe::<String>::ABSENT.is_absent());
		assert!(Maybe::<String>::default().is_absent());
	}

	#[test]
	#[should_panic(expected = "called `Maybe::unwrap()` on an `Absent` value")]
	fn unwrap_absent_raises() {
		Maybe::<u32>::absent().unwrap();
	}

	#[test]
	fn try_unwrap_reports_violation() {
		let violation = Maybe::<u32>::absent().try_unwrap().unwrap_err();
		assert_eq!(violation.operation(), "Maybe::unwrap()");
		assert_eq!(violation.payload(), None);

		assert_eq!(Maybe::present("a").try_unwrap().unwrap(), "a");
	}

	#[test]
	fn unwrap_or_prefers_held_value() {
		assert_eq!(Maybe::present(1).unwrap_or(2), 1);
		assert_eq!(Maybe::absent().unwrap_or(2), 2);
	}

	#[test]
	fn falsy_payloads_are_present() {
		assert!(Maybe::present(()).is_present());
		assert!(Maybe::present(0).is_present());
		assert!(Maybe::present(false).is_present());
		assert!(Maybe::present(String::new()).is_present());
		assert!(Maybe::present(None::<u8>).is_present());
		assert!(Maybe::present(Maybe::<u8>::absent()).is_present());
	}

	#[test]
	fn queries_are_stable() {
		let value = Maybe::present(String::from("x"));

		for _ in 0..3 {
			assert!(value.is_present());
			assert_eq!(value.as_ref().unwrap(), "x");
		}
	}

	#[test]
	fn narrowing_by_match() {
		let value = Maybe::present(vec![1, 2, 3]);

		let Maybe::Present(inner) = &value else {
			panic!("expected a present value");
		};
		assert_eq!(inner.len(), 3);
	}

	#[test]
	fn as_mut_edits_in_place() {
		let mut value = Maybe::present(1);
		if let Maybe::Present(inner) = value.as_mut() {
			*inner += 1;
		}
		assert_eq!(value.unwrap(), 2);

		let mut absent = Maybe::<u32>::absent();
		assert!(absent.as_mut().is_absent());
	}

	#[test]
	fn option_interop() {
		assert_eq!(Maybe::from(Some(3)).unwrap(), 3);
		assert!(Maybe::<u8>::from(None).is_absent());
		assert_eq!(Option::from(Maybe::present(4)), Some(4));
		assert_eq!(Option::<u8>::from(Maybe::absent()), None);
	}
}
