//! Zero-or-one item iterators over a [`Maybe`].

use core::iter::FusedIterator;

use crate::Maybe;

/// Iterator over a borrowed held value. Created by [`Maybe::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: Maybe<&'a T>,
}

impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Iter { inner: self.inner }
    }
}

/// Iterator over a mutably borrowed held value. Created by [`Maybe::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: Maybe<&'a mut T>,
}

/// Owning iterator. Created by `Maybe::into_iter`.
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: Maybe<T>,
}

impl<T> Maybe<T> {
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref() }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { inner: self.as_mut() }
    }
}

// All three iterators yield at most once, so the bodies are identical.
macro_rules! impl_single_item_iter {
    ($name:ident<$($lt:lifetime,)? $t:ident>, $item:ty) => {
        impl<$($lt,)? $t> Iterator for $name<$($lt,)? $t> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.take().into()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let n = self.inner.is_present() as usize;
                (n, Some(n))
            }
        }

        impl<$($lt,)? $t> DoubleEndedIterator for $name<$($lt,)? $t> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.take().into()
            }
        }

        impl<$($lt,)? $t> ExactSizeIterator for $name<$($lt,)? $t> {}
        impl<$($lt,)? $t> FusedIterator for $name<$($lt,)? $t> {}
    };
}

impl_single_item_iter!(Iter<'a, T>, &'a T);
impl_single_item_iter!(IterMut<'a, T>, &'a mut T);
impl_single_item_iter!(IntoIter<T>, T);

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Maybe<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
