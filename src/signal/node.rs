//! Reusable signal nodes.
//!
//! A node stores its transformation as a [`Closure`] beside the
//! [`StateCell`] it folds into, so a chain can be assembled once at startup
//! and polled every cycle without re-supplying either. Cloning a node shares
//! both the function and the state.

use crate::cell::StateCell;
use crate::closure::Closure;

use super::{Signal, fold_p, map, map2};

/// Stateless transform.
pub struct Lift<I, O> {
    f: Closure<I, O>,
}

impl<I, O> Lift<I, O> {
    pub fn new(f: impl Fn(I) -> O + 'static) -> Self {
        Self { f: Closure::new(f) }
    }

    pub fn from_closure(f: Closure<I, O>) -> Self {
        Self { f }
    }

    pub fn poll(&self, incoming: Signal<I>) -> Signal<O> {
        map(|v| self.f.call(v), incoming)
    }
}

impl<I, O> Clone for Lift<I, O> {
    fn clone(&self) -> Self {
        Self { f: self.f.clone() }
    }
}

/// Past-dependent fold; see [`fold_p`].
pub struct Fold<I, S> {
    f: Closure<(I, S), S>,
    state: StateCell<S>,
}

impl<I: 'static, S: Clone + 'static> Fold<I, S> {
    /// `f(event, state)` computes the next state.
    pub fn new(initial: S, f: impl Fn(I, S) -> S + 'static) -> Self {
        Self {
            f: Closure::new(move |(i, s): (I, S)| f(i, s)),
            state: StateCell::new(initial),
        }
    }

    pub fn poll(&self, incoming: Signal<I>) -> Signal<S> {
        fold_p(|v, s: &S| self.f.call2(v, s.clone()), &self.state, incoming)
    }

    /// Handle to the folded state.
    pub fn state(&self) -> StateCell<S> {
        self.state.clone()
    }
}

impl<I, S> Clone for Fold<I, S> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            state: self.state.clone(),
        }
    }
}

/// Two-input combination with last-value fill; see [`map2`].
pub struct Map2<A, B, R> {
    f: Closure<(A, B), R>,
    state: StateCell<(A, B)>,
}

impl<A: Clone + 'static, B: Clone + 'static, R: 'static> Map2<A, B, R> {
    pub fn new(initial: (A, B), f: impl Fn(A, B) -> R + 'static) -> Self {
        Self {
            f: Closure::new(move |(a, b): (A, B)| f(a, b)),
            state: StateCell::new(initial),
        }
    }

    pub fn poll(&self, a: Signal<A>, b: Signal<B>) -> Signal<R> {
        map2(|x, y| self.f.call2(x, y), a, b, &self.state)
    }

    pub fn state(&self) -> StateCell<(A, B)> {
        self.state.clone()
    }
}

impl<A, B, R> Clone for Map2<A, B, R> {
    fn clone(&self) -> Self {
        Self {
            f: self.f.clone(),
            state: self.state.clone(),
        }
    }
}
