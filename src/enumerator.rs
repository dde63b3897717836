//! The capability interface for custom data sources.
//!
//! [`Enumerator<T>`] is the one contract a producer has to honor to become a
//! [`Sequence`](crate::Sequence) source: hand out the next element, or `None`
//! once there is nothing left. Streams, generator-like objects and
//! hand-rolled stateful cursors all fit behind it without the core knowing
//! their concrete types.
//!
//! # Examples
//!
//! ```rust
//! use sequencer::prelude::*;
//!
//! struct Countdown(u32);
//!
//! impl Enumerator<u32> for Countdown {
//!     fn get_current(&mut self) -> Option<u32> {
//!         let current = self.0;
//!         self.0 = current.checked_sub(1)?;
//!         Some(current)
//!     }
//! }
//!
//! let mut source = Countdown(3);
//! let values: Vec<_> = fetch_enumerator(&mut source).collect();
//! assert_eq!(values, vec![3, 2, 1]);
//! ```

use std::{cell::RefCell, rc::Rc};

/// A producer that can be asked for its next element.
///
/// Returning `None` signals exhaustion. Implementations are expected to keep
/// returning `None` afterwards; the sequence core enforces this anyway by
/// dropping the source at its first `None`.
pub trait Enumerator<T> {
    /// Produce the next element, or `None` when the source is exhausted.
    fn get_current(&mut self) -> Option<T>;
}

impl<T, E> Enumerator<T> for &'_ mut E
where
    E: Enumerator<T> + ?Sized,
{
    fn get_current(&mut self) -> Option<T> {
        (**self).get_current()
    }
}

impl<T, E> Enumerator<T> for Box<E>
where
    E: Enumerator<T> + ?Sized,
{
    fn get_current(&mut self) -> Option<T> {
        (**self).get_current()
    }
}

impl<T, E> Enumerator<T> for Rc<RefCell<E>>
where
    E: Enumerator<T> + ?Sized,
{
    fn get_current(&mut self) -> Option<T> {
        self.borrow_mut().get_current()
    }
}

/// An absent source is an empty one.
impl<T, E> Enumerator<T> for Option<E>
where
    E: Enumerator<T>,
{
    fn get_current(&mut self) -> Option<T> {
        self.as_mut().and_then(Enumerator::get_current)
    }
}

impl<T, L, R> Enumerator<T> for either::Either<L, R>
where
    L: Enumerator<T>,
    R: Enumerator<T>,
{
    fn get_current(&mut self) -> Option<T> {
        match self {
            either::Either::Left(l) => l.get_current(),
            either::Either::Right(r) => r.get_current(),
        }
    }
}
