//! Fixed-capacity ordered list.
//!
//! [`BoundedList<T, N>`] owns exactly `N` slots (a `heapless::Vec`, so no
//! heap) and tracks how many of them are live. Indices `[0, len)` are valid;
//! `len` never exceeds `N`.
//!
//! Operations that build a new list (`map`, `append`, `resize`, `zip`,
//! `flatten_safe`) clone elements into fresh storage, so an output list never
//! aliases its input. Operations that can overflow or index past the end
//! return an [`Error`]; nothing truncates silently except `resize`, whose
//! whole point is to reinterpret under a smaller capacity.

use heapless::Vec;
use num_traits::{Num, NumCast};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Ordered container with static capacity `N`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoundedList<T, const N: usize> {
    items: Vec<T, N>,
}

impl<T, const N: usize> Default for BoundedList<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedList<T, N> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build from an iterator known to yield at most `N` items. Anything past
    /// the capacity is ignored.
    fn filled_from(iter: impl IntoIterator<Item = T>) -> Self {
        let mut items = Vec::new();
        for item in iter.into_iter().take(N) {
            // take(N) leaves a free slot for every item
            let _ = items.push(item);
        }
        Self { items }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    // ── Element access ────────────────────────────────────────

    /// Element at `index`.
    pub fn nth(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// Final live element.
    pub fn last(&self) -> Result<&T> {
        self.items.last().ok_or(Error::EmptyCollection)
    }

    /// Largest element; the first one wins a tie.
    pub fn max(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        let (first, rest) = self.items.split_first().ok_or(Error::EmptyCollection)?;
        Ok(rest.iter().fold(first, |best, x| if x > best { x } else { best }))
    }

    /// Smallest element; the first one wins a tie.
    pub fn min(&self) -> Result<&T>
    where
        T: PartialOrd,
    {
        let (first, rest) = self.items.split_first().ok_or(Error::EmptyCollection)?;
        Ok(rest.iter().fold(first, |best, x| if x < best { x } else { best }))
    }

    pub fn member(&self, elem: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(elem)
    }

    // ── In-place mutation ─────────────────────────────────────

    /// Append at the back.
    pub fn push_back(&mut self, elem: T) -> Result<()> {
        self.items.push(elem).map_err(|_| Error::CapacityExceeded {
            capacity: N,
            required: N + 1,
        })
    }

    /// Insert at the front, shifting everything back by one. When the list is
    /// full the last element falls off and is returned, so the list behaves as
    /// a sliding window with the most recent element first.
    pub fn push_off_front(&mut self, elem: T) -> Option<T> {
        if N == 0 {
            return None;
        }
        let evicted = if self.is_full() { self.items.pop() } else { None };
        // a slot is always free after the eviction above
        let _ = self.items.insert(0, elem);
        evicted
    }

    /// Replace the element at `index`.
    pub fn set_nth(&mut self, index: usize, elem: T) -> Result<()> {
        let len = self.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *slot = elem;
        Ok(())
    }

    /// Remove the first element equal to `elem`, shifting the tail down.
    /// Leaves the list untouched when nothing matches.
    pub fn remove(&mut self, elem: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let index = self.items.iter().position(|x| x == elem)?;
        Some(self.items.remove(index))
    }

    /// Drop the final element.
    pub fn drop_last(&mut self) -> Result<T> {
        self.items.pop().ok_or(Error::EmptyCollection)
    }

    // ── Scans ─────────────────────────────────────────────────

    /// Left fold, index 0 upward. `f` receives the element and the accumulator.
    pub fn foldl<S>(&self, init: S, mut f: impl FnMut(&T, S) -> S) -> S {
        self.items.iter().fold(init, |acc, x| f(x, acc))
    }

    /// Right fold, last index downward.
    pub fn foldr<S>(&self, init: S, mut f: impl FnMut(&T, S) -> S) -> S {
        self.items.iter().rev().fold(init, |acc, x| f(x, acc))
    }

    pub fn all(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().all(pred)
    }

    pub fn any(&self, pred: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().any(pred)
    }

    pub fn for_each(&self, f: impl FnMut(&T)) {
        self.items.iter().for_each(f);
    }

    /// Elementwise transform; the result keeps this list's length and capacity.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> BoundedList<U, N> {
        BoundedList::filled_from(self.items.iter().map(f))
    }
}

impl<T: Clone, const N: usize> BoundedList<T, N> {
    /// Copy `items` into a new list.
    pub fn from_slice(items: &[T]) -> Result<Self> {
        let mut list = Self::new();
        list.extend_cloned(items)?;
        Ok(list)
    }

    /// `n` copies of `elem`. Asking for more than `N` is an error rather than
    /// a clamp.
    pub fn replicate(n: usize, elem: T) -> Result<Self> {
        let mut items = Vec::new();
        items.resize(n, elem).map_err(|()| Error::CapacityExceeded {
            capacity: N,
            required: n,
        })?;
        Ok(Self { items })
    }

    fn extend_cloned(&mut self, src: &[T]) -> Result<()> {
        let required = self.len() + src.len();
        self.items
            .extend_from_slice(src)
            .map_err(|()| Error::CapacityExceeded { capacity: N, required })
    }

    /// Concatenate into a list of capacity `D`, failing when the combined
    /// length does not fit.
    pub fn append<const M: usize, const D: usize>(
        &self,
        other: &BoundedList<T, M>,
    ) -> Result<BoundedList<T, D>> {
        let mut out = BoundedList::new();
        out.extend_cloned(self.as_slice())?;
        out.extend_cloned(other.as_slice())?;
        Ok(out)
    }

    /// Concatenate into a list whose capacity `D` is checked at compile time
    /// to cover both operands, so the call cannot fail.
    pub fn concat<const M: usize, const D: usize>(&self, other: &BoundedList<T, M>) -> BoundedList<T, D> {
        const { assert!(D >= N + M, "destination capacity must cover both operands") };
        BoundedList::filled_from(self.iter().chain(other.iter()).cloned())
    }

    /// The first `min(len, M)` elements under capacity `M`.
    pub fn resize<const M: usize>(&self) -> BoundedList<T, M> {
        BoundedList::filled_from(self.iter().cloned())
    }

    /// Pair elements positionally, stopping at the shorter list.
    pub fn zip<U: Clone>(&self, other: &BoundedList<U, N>) -> BoundedList<(T, U), N> {
        BoundedList::filled_from(
            self.iter()
                .zip(other.iter())
                .map(|(a, b)| (a.clone(), b.clone())),
        )
    }
}

impl<A: Clone, B: Clone, const N: usize> BoundedList<(A, B), N> {
    pub fn unzip(&self) -> (BoundedList<A, N>, BoundedList<B, N>) {
        (
            BoundedList::filled_from(self.iter().map(|(a, _)| a.clone())),
            BoundedList::filled_from(self.iter().map(|(_, b)| b.clone())),
        )
    }
}

impl<T: Clone, const M: usize, const K: usize> BoundedList<BoundedList<T, M>, K> {
    /// Concatenate every inner list, outer order first. `D` must be at least
    /// `M * K`, checked at compile time, so the result can never overflow.
    pub fn flatten_safe<const D: usize>(&self) -> BoundedList<T, D> {
        const { assert!(D >= M * K, "destination capacity must be at least M * K") };
        BoundedList::filled_from(self.iter().flat_map(|inner| inner.iter().cloned()))
    }
}

impl<T: Num + Copy, const N: usize> BoundedList<T, N> {
    pub fn sum(&self) -> T {
        self.foldl(T::zero(), |x, acc| acc + *x)
    }

    /// Arithmetic mean; integer element types divide with truncation.
    pub fn average(&self) -> Result<T>
    where
        T: NumCast,
    {
        if self.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let count = <T as NumCast>::from(self.len()).ok_or(Error::Overflow)?;
        Ok(self.sum() / count)
    }
}

impl<T, const N: usize> AsRef<[T]> for BoundedList<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedList<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
