use std::{
	fmt,
	future::{Future, IntoFuture},
	panic::AssertUnwindSafe,
	pin::Pin,
	task::{Context, Poll},
};

use derive_where::derive_where;
use dummy_waker::dummy_waker;
use futures::future::{self, CatchUnwind, Either, FusedFuture, FutureExt, Ready};

use super::{attempt::capture, maybe::Maybe, outcome::Outcome, thrown::Thrown};

// === Invocation === //

/// What a computation handed to [`attempt_with`] produced when it was called: a value it already
/// has, or a future that will produce one later.
#[derive(Debug, Clone, Copy)]
pub enum Invocation<T, F> {
	Immediate(T),
	Deferred(F),
}

// === Deferred === //

/// A future resolving to the [`Outcome`] of a deferred computation.
///
/// A panic raised while the wrapped future is polled resolves this future to
/// [`Outcome::Failure`] instead of unwinding into the executor. It resolves exactly once;
/// polling it again afterwards panics.
///
/// The panic hook still runs before the rejection is captured, so the default hook prints a
/// "thread panicked at" line to stderr for every rejection this absorbs.
#[derive_where(Debug)]
#[must_use = "futures do nothing unless you `.await` or poll them"]
pub struct Deferred<F> {
	state: DeferredState<F>,
}

#[derive_where(Debug)]
enum DeferredState<F> {
	Running(#[derive_where(skip)] CatchUnwind<AssertUnwindSafe<F>>),
	Rejected(Option<Thrown>),
	Settled,
}

impl<F: Future> Deferred<F> {
	fn running(future: F) -> Self {
		Self {
			state: DeferredState::Running(AssertUnwindSafe(future).catch_unwind()),
		}
	}

	fn rejected(thrown: Thrown) -> Self {
		Self {
			state: DeferredState::Rejected(Some(thrown)),
		}
	}

	pub fn is_settled(&self) -> bool {
		matches!(self.state, DeferredState::Settled)
	}

	/// Polls once without a real waker and reports the outcome if it is already available.
	///
	/// The wrapped future is never woken by this call so synchronous drivers must keep polling
	/// until a value appears.
	pub fn poll_settled(self: Pin<&mut Self>) -> Maybe<Outcome<F::Output>> {
		let waker = dummy_waker();
		let mut context = Context::from_waker(&waker);

		match self.poll(&mut context) {
			Poll::Ready(outcome) => Maybe::Present(outcome),
			Poll::Pending => Maybe::Absent,
		}
	}
}

impl<F: Future> Future for Deferred<F> {
	type Output = Outcome<F::Output>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		// Safety: `state` is structurally pinned. The running future is only ever polled through
		// a pinned reference and dropped in place when we overwrite it with `Settled`.
		let me = unsafe { self.get_unchecked_mut() };

		let outcome = match &mut me.state {
			DeferredState::Running(future) => {
				// Safety: `future` lives inside the pinned `state` and is never moved out of it.
				let future = unsafe { Pin::new_unchecked(future) };

				match future.poll(cx) {
					Poll::Ready(Ok(value)) => Outcome::Success(value),
					Poll::Ready(Err(payload)) => {
						let thrown = Thrown::from_panic(payload);
						log::debug!("Captured a deferred computation's rejection: {thrown}");
						Outcome::Failure(thrown)
					}
					Poll::Pending => return Poll::Pending,
				}
			}
			DeferredState::Rejected(thrown) => match thrown.take() {
				Some(thrown) => Outcome::Failure(thrown),
				None => unreachable!("`Rejected` is replaced with `Settled` once taken"),
			},
			DeferredState::Settled => {
				panic!("`Deferred` polled after it already settled");
			}
		};

		me.state = DeferredState::Settled;
		Poll::Ready(outcome)
	}
}

impl<F: Future> FusedFuture for Deferred<F> {
	fn is_terminated(&self) -> bool {
		self.is_settled()
	}
}

// === Attempt === //

/// The result of [`attempt_with`]: either settled during the call or still deferred.
#[derive_where(Debug; T)]
#[must_use]
pub enum Attempt<T, F> {
	Settled(Outcome<T>),
	Deferred(Deferred<F>),
}

impl<T, F> Attempt<T, F> {
	pub fn is_settled(&self) -> bool {
		matches!(self, Self::Settled(_))
	}

	pub fn is_deferred(&self) -> bool {
		matches!(self, Self::Deferred(_))
	}
}

impl<T: fmt::Debug, F> fmt::Display for Attempt<T, F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Settled(Outcome::Success(value)) => write!(f, "settled with {value:?}"),
			Self::Settled(Outcome::Failure(thrown)) => write!(f, "settled with failure: {thrown}"),
			Self::Deferred(_) => f.write_str("deferred"),
		}
	}
}

impl<T, F: Future<Output = T>> IntoFuture for Attempt<T, F> {
	type Output = Outcome<T>;
	type IntoFuture = Either<Ready<Outcome<T>>, Deferred<F>>;

	fn into_future(self) -> Self::IntoFuture {
		match self {
			Self::Settled(outcome) => Either::Left(future::ready(outcome)),
			Self::Deferred(deferred) => Either::Right(deferred),
		}
	}
}

// === Adapters === //

/// Invokes a computation that produces a future and captures every failure it can raise.
///
/// The computation is called right away and this function returns without waiting on the
/// future. A panic raised by the call itself yields a [`Deferred`] that is already rejected.
pub fn attempt_deferred<F: Future>(computation: impl FnOnce() -> F) -> Deferred<F> {
	match capture(computation) {
		Outcome::Success(future) => Deferred::running(future),
		Outcome::Failure(thrown) => Deferred::rejected(thrown),
	}
}

/// Invokes a computation whose result may be immediate or deferred and reports its outcome.
///
/// Which one it is gets decided by the [`Invocation`] the computation returns, so the same
/// computation may settle immediately on one call and defer on the next.
pub fn attempt_with<T, F>(computation: impl FnOnce() -> Invocation<T, F>) -> Attempt<T, F>
where
	F: Future<Output = T>,
{
	match capture(computation) {
		Outcome::Success(Invocation::Immediate(value)) => Attempt::Settled(Outcome::Success(value)),
		Outcome::Success(Invocation::Deferred(future)) => {
			Attempt::Deferred(Deferred::running(future))
		}
		Outcome::Failure(thrown) => Attempt::Settled(Outcome::Failure(thrown)),
	}
}

// === Tests === //
