//! Type-erased, shareable functions.
//!
//! [`Closure<A, R>`] wraps any `Fn(A) -> R` behind an `Rc`, so one
//! transformation can be stored inside a signal node and cloned cheaply into
//! several chains. Captures are immutable; a closure that needs to remember
//! something does it through a [`StateCell`](crate::cell::StateCell).
//!
//! There is no empty closure. Combinators that need initial behaviour take
//! an explicit initial value instead.

use core::fmt;
use std::rc::Rc;

pub struct Closure<A, R> {
    f: Rc<dyn Fn(A) -> R>,
}

impl<A, R> Closure<A, R> {
    pub fn new(f: impl Fn(A) -> R + 'static) -> Self {
        Self { f: Rc::new(f) }
    }

    pub fn call(&self, arg: A) -> R {
        (self.f)(arg)
    }
}

impl<A, B, R> Closure<(A, B), R> {
    /// Call a tupled two-argument closure with separate arguments.
    pub fn call2(&self, a: A, b: B) -> R {
        (self.f)((a, b))
    }
}

impl<A, R> Clone for Closure<A, R> {
    fn clone(&self) -> Self {
        Self { f: Rc::clone(&self.f) }
    }
}

impl<A, R> fmt::Debug for Closure<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("holders", &Rc::strong_count(&self.f))
            .finish_non_exhaustive()
    }
}

// ── Prelude helpers ────────────────────────────────────────

pub fn identity<A: 'static>() -> Closure<A, A> {
    Closure::new(|a| a)
}

/// `compose(f, g)(x) == f(g(x))`.
pub fn compose<A, B, C>(f: Closure<B, C>, g: Closure<A, B>) -> Closure<A, C>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Closure::new(move |a| f.call(g.call(a)))
}

/// Turn a tupled two-argument closure into one returning a partially
/// applied closure.
pub fn curry<A, B, R>(f: Closure<(A, B), R>) -> Closure<A, Closure<B, R>>
where
    A: Clone + 'static,
    B: 'static,
    R: 'static,
{
    Closure::new(move |a: A| {
        let f = f.clone();
        Closure::new(move |b| f.call2(a.clone(), b))
    })
}

/// Inverse of [`curry`].
pub fn uncurry<A, B, R>(f: Closure<A, Closure<B, R>>) -> Closure<(A, B), R>
where
    A: 'static,
    B: 'static,
    R: 'static,
{
    Closure::new(move |(a, b): (A, B)| f.call(a).call(b))
}
