//! Shared mutable state that outlives a single poll.
//!
//! A [`StateCell`] is a reference-counted handle to exactly one `T`. Every
//! clone refers to the same slot, so a stateful combinator can write the
//! cell during one poll and read the result back on the next. The slot is
//! freed when the last handle drops.
//!
//! Handles are `!Send` and `!Sync`: the loop that owns them is the only
//! writer, and the type system keeps it that way.

use core::cell::{Ref, RefCell};
use core::fmt;
use std::rc::Rc;

pub struct StateCell<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Read access without cloning. Drop the guard before writing.
    pub fn borrow(&self) -> Ref<'_, T> {
        self.inner.borrow()
    }

    /// Overwrite the value in place.
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Overwrite the value, returning the previous one.
    pub fn replace(&self, value: T) -> T {
        self.inner.replace(value)
    }

    /// Mutate in place. `f` runs under the borrow and must not reach the
    /// cell through another handle.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut());
    }

    /// Run `f` against the current value, under the same restriction as
    /// [`StateCell::update`] for writes.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Number of live handles to this cell.
    pub fn holders(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Whether both handles refer to the same slot.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Clone> StateCell<T> {
    /// Clone the current value out.
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T> Clone for StateCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for StateCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for StateCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateCell")
            .field("value", &*self.inner.borrow())
            .field("holders", &self.holders())
            .finish()
    }
}
