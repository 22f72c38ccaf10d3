//! Combinators that remember something between polls.
//!
//! Each takes the [`StateCell`] it reads and writes as an explicit argument.
//! The caller creates the cell once at startup and passes the same handle on
//! every poll; two chains sharing a cell share the state.

use crate::cell::StateCell;
use crate::list::BoundedList;

use super::{Signal, filter};

/// Fold events into the cell's state and emit the new state.
///
/// An absent input emits nothing and leaves the cell untouched. `f` sees a
/// snapshot of the state, so it may itself write through another holder of
/// the cell; the folded result then overwrites that write.
pub fn fold_p<I, S: Clone>(f: impl FnOnce(I, &S) -> S, cell: &StateCell<S>, incoming: Signal<I>) -> Signal<S> {
    match incoming.0 {
        Some(v) => {
            let state = cell.get();
            let next = f(v, &state);
            cell.set(next.clone());
            Signal::present(next)
        }
        None => Signal::absent(),
    }
}

/// Suppress an event equal to the last one passed through.
pub fn drop_repeats<T: PartialEq + Clone>(incoming: Signal<T>, cell: &StateCell<Option<T>>) -> Signal<T> {
    filter(
        |v| {
            let repeated = cell.with(|prev| prev.as_ref() == Some(v));
            if !repeated {
                cell.set(Some(v.clone()));
            }
            repeated
        },
        incoming,
    )
}

/// Fire every poll with the most recent event, starting from the cell's
/// initial value.
pub fn latch<T: Clone>(incoming: Signal<T>, cell: &StateCell<T>) -> Signal<T> {
    match incoming.0 {
        Some(v) => {
            cell.set(v.clone());
            Signal::present(v)
        }
        None => Signal::present(cell.get()),
    }
}

/// Combine two signals, substituting the last seen value for a side that did
/// not fire. Emits nothing only when neither side fired.
pub fn map2<A: Clone, B: Clone, R>(
    f: impl FnOnce(A, B) -> R,
    a: Signal<A>,
    b: Signal<B>,
    cell: &StateCell<(A, B)>,
) -> Signal<R> {
    let fired = a.is_present() || b.is_present();
    let (prev_a, prev_b) = cell.get();
    let va = a.0.unwrap_or(prev_a);
    let vb = b.0.unwrap_or(prev_b);
    cell.set((va.clone(), vb.clone()));
    if fired { Signal::present(f(va, vb)) } else { Signal::absent() }
}

/// Keep the last `N` events, most recent first.
pub fn record<T: Clone, const N: usize>(
    incoming: Signal<T>,
    cell: &StateCell<BoundedList<T, N>>,
) -> Signal<BoundedList<T, N>> {
    fold_p(
        |v, past: &BoundedList<T, N>| {
            let mut next = past.clone();
            next.push_off_front(v);
            next
        },
        cell,
        incoming,
    )
}

/// Flip the cell between `val1` and `val2` on every event and emit the new
/// value. Anything other than `val1` flips to `val1`.
pub fn toggle<T: PartialEq + Clone, E>(val1: T, val2: T, cell: &StateCell<T>, incoming: Signal<E>) -> Signal<T> {
    fold_p(|_, prev: &T| if *prev == val1 { val2 } else { val1 }, cell, incoming)
}

/// Pair two signals, filling a silent side from the cell.
pub fn zip<A: Clone, B: Clone>(a: Signal<A>, b: Signal<B>, cell: &StateCell<(A, B)>) -> Signal<(A, B)> {
    map2(|x, y| (x, y), a, b, cell)
}
