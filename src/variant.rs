//! Tagged sum types shared by the combinators.
//!
//! `Option<T>` is the language's own; this module adds [`Either`] and a few
//! helpers over `Option` that control-loop code reaches for often enough to
//! deserve names.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of two alternatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

impl<L, R> Either<L, R> {
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    pub fn map_left<M>(self, f: impl FnOnce(L) -> M) -> Either<M, R> {
        match self {
            Self::Left(l) => Either::Left(f(l)),
            Self::Right(r) => Either::Right(r),
        }
    }

    pub fn map_right<M>(self, f: impl FnOnce(R) -> M) -> Either<L, M> {
        match self {
            Self::Left(l) => Either::Left(l),
            Self::Right(r) => Either::Right(f(r)),
        }
    }

    /// Collapse both sides into one value.
    pub fn either<T>(self, f: impl FnOnce(L) -> T, g: impl FnOnce(R) -> T) -> T {
        match self {
            Self::Left(l) => f(l),
            Self::Right(r) => g(r),
        }
    }

    pub fn flip(self) -> Either<R, L> {
        match self {
            Self::Left(l) => Either::Right(l),
            Self::Right(r) => Either::Left(r),
        }
    }
}

/// Extra operations on `Option` used by signal code.
pub trait MaybeExt<T> {
    /// 1 when present, 0 when absent.
    fn count(&self) -> usize;

    /// `f(value, init)` when present, `init` otherwise.
    fn fold<S>(self, init: S, f: impl FnOnce(T, S) -> S) -> S;

    /// The value, or [`Error::EmptyCollection`] when absent.
    fn get_or_fail(self) -> Result<T>;
}

impl<T> MaybeExt<T> for Option<T> {
    fn count(&self) -> usize {
        usize::from(self.is_some())
    }

    fn fold<S>(self, init: S, f: impl FnOnce(T, S) -> S) -> S {
        match self {
            Some(v) => f(v, init),
            None => init,
        }
    }

    fn get_or_fail(self) -> Result<T> {
        self.ok_or(Error::EmptyCollection)
    }
}
