use core::ops::Deref;

use crate::error::MaybeError;

/// A value that is either present or absent.
///
/// Every combinator consumes the receiver and hands back either a new `Maybe`
/// or the receiver itself, moved through untouched. Nothing is mutated in
/// place except by the explicit `&mut self` helpers (`take`, `replace`,
/// `insert`, `get_or_insert_with`).
///
/// `Absent` orders before any `Present`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    Absent,
    Present(T),
}

impl<T> Maybe<T> {
    /// Constructs a `Maybe::Present(value)` variant.
    #[inline]
    pub const fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// Constructs a `Maybe::Absent` variant.
    #[inline]
    pub const fn absent() -> Self {
        Maybe::Absent
    }

    /// Returns true if the value is `Present`.
    #[inline]
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// Returns true if the value is `Absent`.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// Returns true if the value is `Present` and `predicate` holds for it.
    #[inline]
    pub fn is_present_and<P: FnOnce(&T) -> bool>(&self, predicate: P) -> bool {
        match self {
            Maybe::Present(value) => predicate(value),
            Maybe::Absent => false,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T::Target>`.
    #[inline]
    pub fn as_deref(&self) -> Maybe<&T::Target>
    where
        T: Deref,
    {
        self.as_ref().map(|value| value.deref())
    }

    /// Returns the held value, or the [`MaybeError::UnwrapOnAbsent`] error.
    #[inline]
    pub fn try_unwrap(self) -> Result<T, MaybeError> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(MaybeError::UnwrapOnAbsent),
        }
    }

    /// Returns the held value.
    ///
    /// # Panics
    /// Panics with the [`MaybeError::UnwrapOnAbsent`] message if the value is
    /// `Absent`. Use [`try_unwrap`](Self::try_unwrap) to get the error instead.
    #[inline]
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("{}", MaybeError::UnwrapOnAbsent),
        }
    }

    /// Returns the held value, panicking with `msg` if `Absent`.
    #[inline]
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => panic!("{}", msg),
        }
    }

    #[inline]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => fallback,
        }
    }

    /// Returns the held value, or calls `produce` once if `Absent`.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, produce: F) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => produce(),
        }
    }

    #[inline]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.unwrap_or_else(T::default)
    }

    /// Maps `Maybe<T>` to `Maybe<U>` by applying `transform` to the held value.
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, transform: F) -> Maybe<U> {
        match self {
            Maybe::Present(value) => Maybe::Present(transform(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Applies `transform` to the held value, or returns `fallback`.
    #[inline]
    pub fn map_or<U, F: FnOnce(T) -> U>(self, fallback: U, transform: F) -> U {
        match self {
            Maybe::Present(value) => transform(value),
            Maybe::Absent => fallback,
        }
    }

    /// Applies `transform` to the held value, or calls `produce_fallback`.
    /// Exactly one of the two closures runs.
    #[inline]
    pub fn map_or_else<U, D, F>(self, produce_fallback: D, transform: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Present(value) => transform(value),
            Maybe::Absent => produce_fallback(),
        }
    }

    /// Calls `f` with a reference to the held value, then returns `self`.
    #[inline]
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Maybe::Present(value) = &self {
            f(value);
        }
        self
    }

    /// Returns `other` if `self` is `Present`, otherwise `Absent`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Present(_) => other,
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Monadic bind: feeds the held value to `bind`, short-circuiting on `Absent`.
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, bind: F) -> Maybe<U> {
        match self {
            Maybe::Present(value) => bind(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Keeps `self` when it is `Present` and `predicate` holds for its value.
    #[inline]
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        self.and_then(|value| {
            if predicate(&value) {
                Maybe::Present(value)
            } else {
                Maybe::Absent
            }
        })
    }

    /// Returns `self` if `Present`, otherwise `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Present(_) => self,
            Maybe::Absent => other,
        }
    }

    /// Returns `self` if `Present`, otherwise calls `produce`.
    #[inline]
    pub fn or_else<F: FnOnce() -> Maybe<T>>(self, produce: F) -> Maybe<T> {
        match self {
            Maybe::Present(_) => self,
            Maybe::Absent => produce(),
        }
    }

    /// Returns whichever of `self` and `other` is `Present` when exactly one is,
    /// otherwise `Absent`.
    #[inline]
    pub fn xor(self, other: Maybe<T>) -> Maybe<T> {
        match (self, other) {
            (present @ Maybe::Present(_), Maybe::Absent) => present,
            (Maybe::Absent, present @ Maybe::Present(_)) => present,
            _ => Maybe::Absent,
        }
    }

    /// Pairs the held values of `self` and `other` when both are `Present`.
    #[inline]
    pub fn zip<U>(self, other: Maybe<U>) -> Maybe<(T, U)> {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => Maybe::Present((a, b)),
            _ => Maybe::Absent,
        }
    }

    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(err),
        }
    }

    #[inline]
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            Maybe::Present(value) => Ok(value),
            Maybe::Absent => Err(err()),
        }
    }

    /// Moves the held value out, leaving `Absent` in its place.
    #[inline]
    pub fn take(&mut self) -> Maybe<T> {
        core::mem::take(self)
    }

    /// Stores `value`, returning whatever was held before.
    #[inline]
    pub fn replace(&mut self, value: T) -> Maybe<T> {
        core::mem::replace(self, Maybe::Present(value))
    }

    /// Stores the result of `produce` if `Absent`, then borrows the held value.
    #[inline]
    pub fn get_or_insert_with<F: FnOnce() -> T>(&mut self, produce: F) -> &mut T {
        if let Maybe::Absent = self {
            *self = Maybe::Present(produce());
        }
        self.filled_mut()
    }

    /// Stores `value`, dropping any previous content, and borrows it.
    #[inline]
    pub fn insert(&mut self, value: T) -> &mut T {
        *self = Maybe::Present(value);
        self.filled_mut()
    }

    /// Borrows the held value of a slot the caller has just filled.
    #[inline]
    fn filled_mut(&mut self) -> &mut T {
        self.as_mut().expect("slot was filled before borrowing")
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting. `Present(Absent)` flattens to `Absent`.
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        match self {
            Maybe::Present(inner) => inner,
            Maybe::Absent => Maybe::Absent,
        }
    }
}

impl<T, E> Maybe<Result<T, E>> {
    /// `Present(Ok(v))` becomes `Ok(Present(v))`, `Present(Err(e))` becomes
    /// `Err(e)` and `Absent` becomes `Ok(Absent)`.
    #[inline]
    pub fn transpose(self) -> Result<Maybe<T>, E> {
        match self {
            Maybe::Present(Ok(value)) => Ok(Maybe::Present(value)),
            Maybe::Present(Err(err)) => Err(err),
            Maybe::Absent => Ok(Maybe::Absent),
        }
    }
}

impl<T: Copy> Maybe<&T> {
    #[inline]
    pub fn copied(self) -> Maybe<T> {
        self.map(|value| *value)
    }
}

impl<T: Clone> Maybe<&T> {
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(T::clone)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Maybe::Absent
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Maybe::Present(value)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

/// Collects into `Present` only if every item is `Present`; stops at the
/// first `Absent`.
impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        let collected: Option<V> = iter.into_iter().map(Option::from).collect();
        collected.into()
    }
}
