//! Discrete-event signals and the stateless combinators over them.
//!
//! A [`Signal<T>`] is the value a channel carries during one poll cycle:
//! either one event or nothing. Signals are rebuilt every poll and never
//! stored; anything that has to survive between polls lives in a
//! [`StateCell`](crate::cell::StateCell) owned by the caller and handed to
//! the combinators in [`stateful`].
//!
//! Combinators here take their signal by value and return a fresh one.

pub mod node;
pub mod stateful;

use serde::{Deserialize, Serialize};

use crate::list::BoundedList;
use crate::variant::Either;

pub use stateful::{drop_repeats, fold_p, latch, map2, record, toggle, zip};

/// One poll cycle's worth of a channel: at most one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal<T>(pub Option<T>);

impl<T> Signal<T> {
    pub const fn present(value: T) -> Self {
        Self(Some(value))
    }

    pub const fn absent() -> Self {
        Self(None)
    }

    pub const fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub const fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub const fn value(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.0
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Signal<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

impl<T> From<Signal<T>> for Option<T> {
    fn from(signal: Signal<T>) -> Self {
        signal.0
    }
}

// ---------------------------------------------------------------------------
// Stateless combinators
// ---------------------------------------------------------------------------

/// Apply `f` to the event, if there is one.
pub fn map<T, U>(f: impl FnOnce(T) -> U, s: Signal<T>) -> Signal<U> {
    Signal(s.0.map(f))
}

/// Drop the event when `pred` returns **true**.
///
/// The polarity is the reverse of `Iterator::filter`: `pred` names the
/// events to discard, not the ones to keep.
pub fn filter<T>(pred: impl FnOnce(&T) -> bool, s: Signal<T>) -> Signal<T> {
    let Some(v) = s.0 else {
        return Signal::absent();
    };
    if pred(&v) { Signal::absent() } else { Signal::present(v) }
}

/// `a` when it carries an event, otherwise `b`.
pub fn merge<T>(a: Signal<T>, b: Signal<T>) -> Signal<T> {
    Signal(a.0.or(b.0))
}

/// Merge a list of signals; among those carrying an event the one with the
/// highest index wins.
pub fn merge_many<T: Clone, const N: usize>(signals: &BoundedList<Signal<T>, N>) -> Signal<T> {
    signals.foldl(Signal::absent(), |s, acc| match &s.0 {
        Some(v) => Signal::present(v.clone()),
        None => acc,
    })
}

/// Tag the event with the side it came from; `a` wins when both fire.
pub fn join<A, B>(a: Signal<A>, b: Signal<B>) -> Signal<Either<A, B>> {
    match (a.0, b.0) {
        (Some(v), _) => Signal::present(Either::Left(v)),
        (None, Some(v)) => Signal::present(Either::Right(v)),
        (None, None) => Signal::absent(),
    }
}

/// Always fires with `value`.
pub fn constant<T>(value: T) -> Signal<T> {
    Signal::present(value)
}

/// Always fires, carrying whether `s` fired.
pub fn meta<T>(s: Signal<T>) -> Signal<Option<T>> {
    Signal::present(s.0)
}

/// Inverse of [`meta`].
pub fn unmeta<T>(s: Signal<Option<T>>) -> Signal<T> {
    Signal(s.0.flatten())
}

/// Split a signal of pairs; both halves fire together or not at all.
pub fn unzip<A, B>(s: Signal<(A, B)>) -> (Signal<A>, Signal<B>) {
    match s.0 {
        Some((a, b)) => (Signal::present(a), Signal::present(b)),
        None => (Signal::absent(), Signal::absent()),
    }
}

/// Run `f` for its side effect when the signal fires.
pub fn sink<T>(f: impl FnOnce(T), s: Signal<T>) {
    if let Some(v) = s.0 {
        f(v);
    }
}

/// Forget the payload, keep the timing.
pub fn to_unit<T>(s: Signal<T>) -> Signal<()> {
    Signal(s.0.map(|_| ()))
}
