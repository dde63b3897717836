//! The sequence core.
//!
//! A [`Sequence`] is a lazy plan: a shared handle around exactly one pull
//! function. Combinators wrap the handle in a new pull function, and terminal
//! operations drive the outermost one until it runs dry. Each pull advances
//! the whole chain by one element; nothing is buffered in between.

use std::{cell::RefCell, fmt, iter::FusedIterator, rc::Rc};

use crate::{Enumerator, SequenceError, combinators, fetch::from_fn};

/// A lazy, pull-based sequence of `T`.
///
/// The handle is shared: cloning a `Sequence`, or deriving one through a
/// combinator, does not copy its progress. Every handle advances the same
/// underlying state, and that state lives for as long as any handle does.
/// Build a second sequence from the source when independent progress is
/// wanted.
///
/// Exhaustion is permanent. The first time the pull function reports `None`
/// it is dropped, and every later pull returns `None` without touching it.
///
/// ```rust
/// use sequencer::prelude::*;
///
/// let numbers = [1, 2, 3, 4, 5, 6, 7, 8, 9];
/// let squares: Vec<_> = fetch_slice(&numbers)
///     .choose(|n| n % 2 == 1)
///     .transform(|n| n * n)
///     .collect();
///
/// assert_eq!(squares, vec![1, 9, 25, 49, 81]);
/// ```
pub struct Sequence<'a, T> {
    core: Rc<RefCell<Core<'a, T>>>,
}

struct Core<'a, T> {
    source: Option<Box<dyn Enumerator<T> + 'a>>,
}

impl<T> Core<'_, T> {
    fn pull(&mut self) -> Option<T> {
        let next = self.source.as_mut()?.get_current();
        if next.is_none() {
            // exhausted sources are released right away
            self.source = None;
        }
        next
    }
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// Wrap a capability object as a sequence, taking ownership of it.
    pub fn new<E>(source: E) -> Self
    where
        E: Enumerator<T> + 'a,
    {
        Sequence {
            core: Rc::new(RefCell::new(Core {
                source: Some(Box::new(source)),
            })),
        }
    }

    /// Wrap a pull closure as a sequence.
    ///
    /// ```rust
    /// use sequencer::Sequence;
    ///
    /// let mut state = 1;
    /// let powers = Sequence::from_fn(move || {
    ///     let current = state;
    ///     state *= 2;
    ///     Some(current)
    /// });
    /// assert_eq!(powers.limit(5).collect::<Vec<_>>(), vec![1, 2, 4, 8, 16]);
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut() -> Option<T> + 'a,
    {
        Sequence::new(from_fn(f))
    }

    /// A sequence with no elements.
    pub fn empty() -> Self {
        Sequence {
            core: Rc::new(RefCell::new(Core { source: None })),
        }
    }

    /// Keep only the elements `predicate` accepts.
    ///
    /// The result shares progress with `self`: every element it pulls, kept
    /// or not, is gone from `self` too.
    pub fn choose<P>(&self, predicate: P) -> Sequence<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        Sequence::new(combinators::choose(self.clone(), predicate))
    }

    /// Like [`choose`](Self::choose), with a predicate that may fail.
    ///
    /// A predicate error takes the place of the element it was raised for.
    pub fn try_choose<E, P>(&self, predicate: P) -> Sequence<'a, Result<T, E>>
    where
        E: 'a,
        P: FnMut(&T) -> Result<bool, E> + 'a,
    {
        Sequence::new(combinators::try_choose(self.clone(), predicate))
    }

    /// Yield at most `count` elements.
    ///
    /// `limit(0)` is empty and never pulls from `self`.
    pub fn limit(&self, count: usize) -> Sequence<'a, T> {
        Sequence::new(combinators::limit(self.clone(), count))
    }

    /// Like [`limit`](Self::limit), for counts that arrive as signed integers.
    ///
    /// ```rust
    /// use sequencer::prelude::*;
    ///
    /// let seq = fetch_range(0..10);
    /// assert!(seq.try_limit(-3).is_err());
    /// assert_eq!(seq.try_limit(2)?.collect::<Vec<_>>(), vec![0, 1]);
    /// # Ok::<(), SequenceError>(())
    /// ```
    pub fn try_limit(&self, count: i64) -> crate::Result<Sequence<'a, T>> {
        if count < 0 {
            tracing::debug!(count, "rejected negative limit");
            return Err(SequenceError::NegativeLimit { count });
        }
        Ok(self.limit(usize::try_from(count).unwrap_or(usize::MAX)))
    }

    /// Map every element through `transformer`, naming the result type.
    pub fn transform_to<R, F>(&self, transformer: F) -> Sequence<'a, R>
    where
        R: 'a,
        F: FnMut(T) -> R + 'a,
    {
        Sequence::new(combinators::transform(self.clone(), transformer))
    }

    /// Map every element through `transformer`.
    pub fn transform<F, R>(&self, transformer: F) -> Sequence<'a, R>
    where
        R: 'a,
        F: FnMut(T) -> R + 'a,
    {
        self.transform_to(transformer)
    }

    /// Map every element through a fallible `transformer`.
    pub fn try_transform<R, E, F>(&self, transformer: F) -> Sequence<'a, Result<R, E>>
    where
        R: 'a,
        E: 'a,
        F: FnMut(T) -> Result<R, E> + 'a,
    {
        self.transform_to(transformer)
    }
}

impl<T> Sequence<'_, T> {
    /// Advance the pipeline by one element.
    ///
    /// # Panics
    ///
    /// Panics when called from inside one of this sequence's own callbacks.
    pub fn pull(&self) -> Option<T> {
        self.core.borrow_mut().pull()
    }

    /// Returns `true` once the sequence has reported exhaustion.
    ///
    /// Apart from [`Sequence::empty`], a sequence is only known to be
    /// exhausted after a pull has come back empty.
    pub fn is_exhausted(&self) -> bool {
        self.core.borrow().source.is_none()
    }
}

impl<T> Clone for Sequence<'_, T> {
    /// Copy the handle; the clone shares progress with `self`.
    fn clone(&self) -> Self {
        Sequence {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("handles", &Rc::strong_count(&self.core))
            .field("exhausted", &self.core.try_borrow().map(|c| c.source.is_none()).ok())
            .finish()
    }
}

impl<T> Enumerator<T> for Sequence<'_, T> {
    fn get_current(&mut self) -> Option<T> {
        self.pull()
    }
}

impl<T> Iterator for Sequence<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.pull()
    }
}

impl<T> FusedIterator for Sequence<'_, T> {}
