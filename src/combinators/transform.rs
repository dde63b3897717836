use crate::{Enumerator, Sequence};

/// Applies a function to every upstream element.
pub struct Transform<'a, T, F> {
    upstream: Sequence<'a, T>,
    transformer: F,
}

/// Create a map over `upstream`.
pub fn transform<'a, T, R, F>(upstream: Sequence<'a, T>, transformer: F) -> Transform<'a, T, F>
where
    F: FnMut(T) -> R,
{
    Transform {
        upstream,
        transformer,
    }
}

impl<T, R, F> Enumerator<R> for Transform<'_, T, F>
where
    F: FnMut(T) -> R,
{
    fn get_current(&mut self) -> Option<R> {
        self.upstream.pull().map(&mut self.transformer)
    }
}
