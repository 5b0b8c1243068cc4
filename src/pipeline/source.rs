//! Element sources at the head of every pipeline chain.

use super::stage::Stage;
use crate::errors::Result;

/// Where a pipeline's elements come from.
///
/// `Generate` and `Iterate` never run dry; only a downstream `limit` or a
/// short-circuiting terminal stops pulling from them.
pub(crate) enum Source<T> {
    Empty,
    Elements(std::vec::IntoIter<T>),
    Iter(Box<dyn Iterator<Item = T>>),
    Generate(Box<dyn FnMut() -> T>),
    Iterate(Box<dyn FnMut() -> Option<T>>),
}

impl<T: Clone + 'static> Source<T> {
    /// `seed`, `step(seed)`, `step(step(seed))`, ...
    ///
    /// `step` is applied lazily: the n-th call happens only when the
    /// (n+1)-th element is pulled.
    pub(crate) fn iterate(seed: T, mut step: impl FnMut(&T) -> T + 'static) -> Self {
        let mut seed = Some(seed);
        let mut previous: Option<T> = None;
        Source::Iterate(Box::new(move || {
            let current = match previous.take() {
                None => seed.take()?,
                Some(prev) => step(&prev),
            };
            previous = Some(current.clone());
            Some(current)
        }))
    }
}

impl<T: 'static> Stage<T> for Source<T> {
    fn next(&mut self) -> Result<Option<T>> {
        Ok(match self {
            Source::Empty => None,
            Source::Elements(elements) => elements.next(),
            Source::Iter(iter) => iter.next(),
            Source::Generate(supplier) => Some(supplier()),
            Source::Iterate(step) => step(),
        })
    }

    fn name(&self) -> &'static str {
        match self {
            Source::Empty => "empty",
            Source::Elements(_) => "elements",
            Source::Iter(_) => "iterator",
            Source::Generate(_) => "generate",
            Source::Iterate(_) => "iterate",
        }
    }
}
