#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub use error::MaybeError;

// Maybe module
pub mod maybe;
pub use maybe::Maybe;

pub mod iter;
pub use iter::{IntoIter, Iter, IterMut};

pub mod codec;
pub use codec::{DecodeField, EncodeField};

#[cfg(feature = "serde")]
mod serde_impls;

/// Wraps `value` in [`Maybe::Present`].
#[inline]
pub fn present<T>(value: T) -> Maybe<T> {
    Maybe::Present(value)
}

/// Produces [`Maybe::Absent`].
#[inline]
pub fn absent<T>() -> Maybe<T> {
    Maybe::Absent
}
