use std::{any::Any, error::Error, fmt, panic};

// === Thrown === //

/// An opaque envelope around a raised value, usually a captured panic payload.
///
/// Nothing is coerced when a value is captured. [`Thrown::message`] and the `downcast` family
/// recover the payload in whatever shape it was raised with.
pub struct Thrown {
	payload: Box<dyn Any + Send>,
}

impl Thrown {
	pub fn new<P: Any + Send>(payload: P) -> Self {
		Self::from_panic(Box::new(payload))
	}

	/// Adopts a payload produced by [`std::panic::catch_unwind`] without re-boxing it.
	pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
		Self { payload }
	}

	pub fn is<P: Any>(&self) -> bool {
		self.payload.is::<P>()
	}

	pub fn downcast_ref<P: Any>(&self) -> Option<&P> {
		self.payload.downcast_ref()
	}

	pub fn downcast<P: Any>(self) -> Result<P, Self> {
		match self.payload.downcast() {
			Ok(payload) => Ok(*payload),
			Err(payload) => Err(Self { payload }),
		}
	}

	/// The message of a `panic!`, which is a `&'static str` for literals and a `String` for
	/// formatted messages.
	pub fn message(&self) -> Option<&str> {
		if let Some(message) = self.downcast_ref::<&'static str>() {
			Some(*message)
		} else if let Some(message) = self.downcast_ref::<String>() {
			Some(message.as_str())
		} else {
			None
		}
	}

	pub fn into_payload(self) -> Box<dyn Any + Send> {
		self.payload
	}

	/// Raises the payload again on the current thread.
	pub fn resume(self) -> ! {
		panic::resume_unwind(self.payload)
	}

	pub fn into_anyhow(self) -> anyhow::Error {
		let message = match self.downcast::<anyhow::Error>() {
			Ok(err) => return err,
			Err(me) => me.message().map(str::to_owned),
		};

		match message {
			Some(message) => anyhow::Error::msg(message),
			None => anyhow::Error::msg("<opaque thrown payload>"),
		}
	}
}

impl fmt::Debug for Thrown {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Thrown").field(&format_args!("{self}")).finish()
	}
}

impl fmt::Display for Thrown {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(message) = self.message() {
			f.write_str(message)
		} else if let Some(err) = self.downcast_ref::<anyhow::Error>() {
			fmt::Display::fmt(err, f)
		} else {
			f.write_str("<opaque thrown payload>")
		}
	}
}

impl Error for Thrown {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		self.downcast_ref::<anyhow::Error>()
			.and_then(|err| err.source())
	}
}

// === Tests === //

#[cfg(test)]
mod tests {
	use std::panic::{catch_unwind, AssertUnwindSafe};

	use super::*;

	#[test]
	fn literal_panic_message() {
		let payload = catch_unwind(|| panic!("boom")).unwrap_err();
		let thrown = Thrown::from_panic(payload);

		assert!(thrown.is::<&'static str>());
		assert_eq!(thrown.message(), Some("boom"));
		assert_eq!(thrown.to_string(), "boom");
		assert_eq!(format!("{thrown:?}"), "Thrown(boom)");
	}

	#[test]
	fn formatted_panic_message() {
		let code = 7;
		let payload = catch_unwind(|| panic!("exit code {code}")).unwrap_err();
		let thrown = Thrown::from_panic(payload);

		assert!(thrown.is::<String>());
		assert_eq!(thrown.message(), Some("exit code 7"));
	}

	#[test]
	fn custom_payload_survives() {
		#[derive(Debug, PartialEq)]
		struct Code(u16);

		let thrown = Thrown::new(Code(404));
		assert_eq!(thrown.message(), None);
		assert_eq!(thrown.to_string(), "<opaque thrown payload>");
		assert_eq!(thrown.downcast_ref::<Code>(), Some(&Code(404)));

		let thrown = thrown.downcast::<String>().unwrap_err();
		assert_eq!(thrown.downcast::<Code>().unwrap(), Code(404));
	}

	#[test]
	fn anyhow_round_trip() {
		let thrown = Thrown::new(anyhow::anyhow!("connection reset"));
		assert_eq!(thrown.to_string(), "connection reset");
		assert_eq!(thrown.into_anyhow().to_string(), "connection reset");

		assert_eq!(Thrown::new("boom").into_anyhow().to_string(), "boom");
		assert_eq!(
			Thrown::new(5u8).into_anyhow().to_string(),
			"<opaque thrown payload>",
		);
	}

	#[test]
	fn source_follows_anyhow_context() {
		let inner = std::io::Error::new(std::io::ErrorKind::Other, "socket closed");
		let thrown = Thrown::new(anyhow::Error::new(inner).context("failed to fetch"));

		assert_eq!(thrown.to_string(), "failed to fetch");
		assert_eq!(thrown.source().map(|err| err.to_string()).as_deref(), Some("socket closed"));
	}

	#[test]
	fn resume_raises_same_payload() {
		let payload = catch_unwind(AssertUnwindSafe(|| Thrown::new(17u32).resume())).unwrap_err();
		assert_eq!(payload.downcast_ref::<u32>(), Some(&17));
	}
}
