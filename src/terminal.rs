//! Terminal operations: drive a sequence until it runs dry.
//!
//! These are the only places evaluation happens. Each one pulls the
//! outermost pull function in a loop; every pull advances the whole chain by
//! one element.
//!
//! Errors raised by callbacks are not caught or wrapped. The fallible
//! variants stop at the first `Err` and return it as is, leaving whatever
//! was not pulled yet in the sequence.

use tracing::trace;

use crate::Sequence;

impl<T> Sequence<'_, T> {
    /// Invoke `action` on every remaining element, in order.
    ///
    /// Driving an exhausted sequence is a no-op.
    ///
    /// ```rust
    /// use sequencer::prelude::*;
    ///
    /// let mut out = Vec::new();
    /// fetch_range(1..=3).perform(|n| out.push(n * 2));
    /// assert_eq!(out, vec![2, 4, 6]);
    /// ```
    pub fn perform<F>(&self, mut action: F)
    where
        F: FnMut(T),
    {
        let mut observed = 0usize;
        while let Some(entry) = self.pull() {
            observed += 1;
            action(entry);
        }
        trace!(observed, "perform finished");
    }

    /// Fold the remaining elements into an accumulator.
    ///
    /// Returns `initial` unchanged when there is nothing left to pull.
    ///
    /// ```rust
    /// use sequencer::prelude::*;
    ///
    /// let longest = fetch_slice(&["a", "abc", "ab"]).combine(0, |acc, s| acc.max(s.len()));
    /// assert_eq!(longest, 3);
    /// ```
    pub fn combine<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, T) -> A,
    {
        let mut observed = 0usize;
        let mut result = initial;
        while let Some(entry) = self.pull() {
            observed += 1;
            result = combine(result, entry);
        }
        trace!(observed, "combine finished");
        result
    }

    /// Like [`perform`](Self::perform), with an action that may fail.
    ///
    /// Stops at the first error and returns it.
    pub fn try_perform<E, F>(&self, mut action: F) -> Result<(), E>
    where
        F: FnMut(T) -> Result<(), E>,
    {
        let mut observed = 0usize;
        while let Some(entry) = self.pull() {
            observed += 1;
            if let Err(e) = action(entry) {
                trace!(observed, "try_perform stopped by action error");
                return Err(e);
            }
        }
        trace!(observed, "try_perform finished");
        Ok(())
    }

    /// Like [`combine`](Self::combine), with a combiner that may fail.
    ///
    /// ```rust
    /// use sequencer::prelude::*;
    ///
    /// let sum = fetch_range(250u8..=255).try_combine(0u8, |acc, n| acc.checked_add(n).ok_or(n));
    /// assert_eq!(sum, Err(251));
    /// ```
    pub fn try_combine<A, E, F>(&self, initial: A, mut combine: F) -> Result<A, E>
    where
        F: FnMut(A, T) -> Result<A, E>,
    {
        let mut observed = 0usize;
        let mut result = initial;
        while let Some(entry) = self.pull() {
            observed += 1;
            result = match combine(result, entry) {
                Ok(next) => next,
                Err(e) => {
                    trace!(observed, "try_combine stopped by combiner error");
                    return Err(e);
                }
            };
        }
        trace!(observed, "try_combine finished");
        Ok(result)
    }
}

impl<T, E> Sequence<'_, Result<T, E>> {
    /// Invoke `action` on every `Ok` element, stopping at the first `Err`.
    pub fn perform_ok<F>(&self, mut action: F) -> Result<(), E>
    where
        F: FnMut(T),
    {
        self.try_perform(|entry| entry.map(&mut action))
    }

    /// Fold the `Ok` elements, stopping at the first `Err`.
    ///
    /// ```rust
    /// use sequencer::prelude::*;
    ///
    /// let total = fetch_slice(&["4", "5", "6"])
    ///     .try_transform(|s| s.parse::<u32>())
    ///     .combine_ok(0, |acc, n| acc + n);
    /// assert_eq!(total, Ok(15));
    /// ```
    pub fn combine_ok<A, F>(&self, initial: A, mut combine: F) -> Result<A, E>
    where
        F: FnMut(A, T) -> A,
    {
        self.try_combine(initial, |acc, entry| entry.map(|value| combine(acc, value)))
    }
}
