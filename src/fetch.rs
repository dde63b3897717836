//! Source adapters.
//!
//! Every pipeline starts here: these functions turn a range, a container, a
//! borrowed slice, a pull closure or a capability object into a
//! [`Sequence`]. Nothing is read from the source until a terminal operation
//! runs.

use crate::{Enumerator, Sequence};

/// Walks a bounded range, yielding each element and stepping past it.
///
/// Any [`Iterator`] stands in for a begin/end cursor pair. The cursor is
/// owned, so its progress is private to the sequence built over it.
#[derive(Debug, Clone)]
pub struct Cursor<I>(I);

impl<I: Iterator> Cursor<I> {
    pub fn new(range: I) -> Self {
        Cursor(range)
    }
}

impl<I: Iterator> Enumerator<I::Item> for Cursor<I> {
    fn get_current(&mut self) -> Option<I::Item> {
        self.0.next()
    }
}

/// A capability object backed by a pull closure.
pub struct FromFn<F>(F);

impl<T, F> Enumerator<T> for FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    fn get_current(&mut self) -> Option<T> {
        (self.0)()
    }
}

/// Wrap a pull closure as an [`Enumerator`].
///
/// ```rust
/// use sequencer::prelude::*;
///
/// let mut n = 0;
/// let mut naturals = from_fn(move || {
///     n += 1;
///     Some(n)
/// });
/// assert_eq!(naturals.get_current(), Some(1));
/// assert_eq!(naturals.get_current(), Some(2));
/// ```
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Option<T>,
{
    FromFn(f)
}

/// Build a sequence over a bounded range.
///
/// ```rust
/// use sequencer::prelude::*;
///
/// let total = fetch_range(1..=4).combine(0, |acc, n| acc + n);
/// assert_eq!(total, 10);
/// ```
pub fn fetch_range<'a, I>(range: I) -> Sequence<'a, I::Item>
where
    I: Iterator + 'a,
    I::Item: 'a,
{
    Sequence::new(Cursor::new(range))
}

/// Build a sequence over everything a container hands out.
///
/// Works for owned containers as well as borrowed ones; a borrowed `Vec<T>`
/// yields `&T`.
pub fn fetch<'a, C>(container: C) -> Sequence<'a, C::Item>
where
    C: IntoIterator,
    C::IntoIter: 'a,
    C::Item: 'a,
{
    fetch_range(container.into_iter())
}

/// Build a sequence that copies elements out of a borrowed slice.
///
/// Each call builds an independent cursor, so two sequences over the same
/// slice do not share progress.
///
/// ```rust
/// use sequencer::prelude::*;
///
/// let numbers = [1, 2, 3];
/// let first = fetch_slice(&numbers);
/// let second = fetch_slice(&numbers);
///
/// assert_eq!(first.limit(2).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(second.collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn fetch_slice<'a, T>(slice: &'a [T]) -> Sequence<'a, T>
where
    T: Clone + 'a,
{
    fetch_range(slice.iter().cloned())
}

/// Build a sequence that forwards every pull to an external capability
/// object.
///
/// The sequence borrows `source` and cannot outlive it. Progress made
/// through the sequence is visible on `source` afterwards.
pub fn fetch_enumerator<'a, T, E>(source: &'a mut E) -> Sequence<'a, T>
where
    T: 'a,
    E: Enumerator<T> + ?Sized,
{
    Sequence::new(source)
}
