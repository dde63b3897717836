use crate::{Enumerator, Sequence};

/// Yields at most `remaining` upstream elements.
///
/// The counter is checked before upstream is pulled, so a spent limit never
/// advances its upstream.
pub struct Limit<'a, T> {
    upstream: Sequence<'a, T>,
    remaining: usize,
}

/// Create a take over `upstream`.
pub fn limit<T>(upstream: Sequence<'_, T>, count: usize) -> Limit<'_, T> {
    Limit {
        upstream,
        remaining: count,
    }
}

impl<T> Enumerator<T> for Limit<'_, T> {
    fn get_current(&mut self) -> Option<T> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.pull() {
            Some(entry) => {
                self.remaining -= 1;
                Some(entry)
            }
            None => {
                self.remaining = 0;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{SequenceError, fetch::fetch_range};
    use rstest::rstest;

    #[rstest]
    #[case(0, 5, 0)]
    #[case(3, 5, 3)]
    #[case(5, 5, 5)]
    #[case(8, 5, 5)]
    #[case(4, 0, 0)]
    fn test_limit_yields_min_of_count_and_len(
        #[case] count: usize,
        #[case] len: u32,
        #[case] expected: usize,
    ) {
        let taken: Vec<_> = fetch_range(0..len).limit(count).collect();
        assert_eq!(taken.len(), expected);
        assert!(taken.iter().copied().eq(0..expected as u32));
    }

    #[test]
    fn test_limit_zero_never_pulls_upstream() {
        let upstream = fetch_range(0..3);
        let none = upstream.limit(0);

        assert_eq!(none.pull(), None);
        assert_eq!(none.pull(), None);
        assert_eq!(upstream.pull(), Some(0));
    }

    #[test]
    fn test_limit_stops_pulling_once_spent() {
        let upstream = fetch_range(0..10);
        upstream.limit(3).perform(drop);
        assert_eq!(upstream.pull(), Some(3));
    }

    #[test]
    fn test_try_limit_rejects_negative_count() {
        let err = fetch_range(0..3).try_limit(-1).unwrap_err();
        assert_eq!(err, SequenceError::NegativeLimit { count: -1 });
        assert_eq!(err.to_string(), "limit count must not be negative, got -1");
    }

    #[test]
    fn test_try_limit_accepts_zero_and_positive() {
        let seq = fetch_range(0..3);
        assert_eq!(seq.try_limit(0).unwrap().pull(), None);
        assert_eq!(seq.try_limit(2).unwrap().collect::<Vec<_>>(), vec![0, 1]);
    }
}
