use crate::{Enumerator, Sequence};

/// Passes on only the upstream elements a predicate accepts.
///
/// Rejected elements are dropped inside the pull; nothing downstream ever
/// sees them.
pub struct Choose<'a, T, P> {
    upstream: Sequence<'a, T>,
    predicate: P,
}

/// Create a filter over `upstream`.
pub fn choose<'a, T, P>(upstream: Sequence<'a, T>, predicate: P) -> Choose<'a, T, P>
where
    P: FnMut(&T) -> bool,
{
    Choose {
        upstream,
        predicate,
    }
}

impl<T, P> Enumerator<T> for Choose<'_, T, P>
where
    P: FnMut(&T) -> bool,
{
    fn get_current(&mut self) -> Option<T> {
        loop {
            let entry = self.upstream.pull()?;
            if (self.predicate)(&entry) {
                return Some(entry);
            }
        }
    }
}

/// Filter with a fallible predicate.
///
/// A predicate error is handed downstream as `Err` in place of the element
/// it was raised for.
pub struct TryChoose<'a, T, P> {
    upstream: Sequence<'a, T>,
    predicate: P,
}

/// Create a filter over `upstream` whose predicate may fail.
pub fn try_choose<'a, T, E, P>(upstream: Sequence<'a, T>, predicate: P) -> TryChoose<'a, T, P>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    TryChoose {
        upstream,
        predicate,
    }
}

impl<T, E, P> Enumerator<Result<T, E>> for TryChoose<'_, T, P>
where
    P: FnMut(&T) -> Result<bool, E>,
{
    fn get_current(&mut self) -> Option<Result<T, E>> {
        loop {
            let entry = self.upstream.pull()?;
            match (self.predicate)(&entry) {
                Ok(true) => return Some(Ok(entry)),
                Ok(false) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::fetch::{fetch_range, fetch_slice};
    use std::cell::RefCell;

    #[test]
    fn test_choose_keeps_matching_elements_in_order() {
        let evens: Vec<_> = fetch_range(1..=10).choose(|n| n % 2 == 0).collect();
        assert_eq!(evens, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_choose_hides_rejected_elements_from_downstream() {
        let seen = RefCell::new(Vec::new());
        fetch_range(1..=6)
            .choose(|n| *n > 3)
            .transform(|n| {
                seen.borrow_mut().push(n);
                n
            })
            .perform(drop);

        assert_eq!(seen.into_inner(), vec![4, 5, 6]);
    }

    #[test]
    fn test_choose_nothing_matches() {
        let seq = fetch_slice(&[1, 3, 5]).choose(|n| n % 2 == 0);
        assert_eq!(seq.pull(), None);
        assert!(seq.is_exhausted());
    }

    #[test]
    fn test_choose_stops_at_first_match_per_pull() {
        let upstream = fetch_range(1..=6);
        let chosen = upstream.choose(|n| n % 3 == 0);

        assert_eq!(chosen.pull(), Some(3));
        // the shared upstream only moved as far as the match
        assert_eq!(upstream.pull(), Some(4));
        assert_eq!(chosen.pull(), Some(6));
    }

    #[test]
    fn test_try_choose_surfaces_predicate_errors() {
        let results: Vec<_> = fetch_range(1..=4)
            .try_choose(|n| if *n == 3 { Err("three") } else { Ok(n % 2 == 0) })
            .collect();

        assert_eq!(results, vec![Ok(2), Err("three"), Ok(4)]);
    }
}
