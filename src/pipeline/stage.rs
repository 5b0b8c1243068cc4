//! Lazy transformation stages.
//!
//! A pipeline is a singly-linked chain of stages. Each stage owns its
//! upstream stage and produces elements only when asked: a terminal operation
//! pulls from the last stage, which pulls from its upstream, down to the
//! source. Nothing is evaluated before that first pull.

use super::Pipeline;
use crate::errors::{Error, Result};
use crate::function::Comparator;
use std::collections::HashSet;
use std::hash::Hash;

/// A pull-based pipeline stage.
///
/// `next` returns `Ok(None)` once the stage is exhausted. Errors raised while
/// pulling (buffer limits, reused inner pipelines) end the evaluation.
pub(crate) trait Stage<T> {
    fn next(&mut self) -> Result<Option<T>>;

    /// Get the stage name for logging.
    fn name(&self) -> &'static str;
}

pub(crate) type BoxedStage<T> = Box<dyn Stage<T>>;

/// Fail once a buffering stage already holding `held` elements would need
/// room for one more than `max_buffered` allows.
fn reserve_buffered(stage: &'static str, held: usize, max_buffered: Option<usize>) -> Result<()> {
    match max_buffered {
        Some(limit) if held >= limit => {
            tracing::warn!(stage, limit, "buffering stage exceeded its limit");
            Err(Error::BufferLimitExceeded { limit })
        }
        _ => Ok(()),
    }
}

pub(crate) struct FilterStage<T, P> {
    upstream: BoxedStage<T>,
    predicate: P,
}

impl<T: 'static, P: FnMut(&T) -> bool + 'static> FilterStage<T, P> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, predicate: P) -> BoxedStage<T> {
        Box::new(Self {
            upstream,
            predicate,
        })
    }
}

impl<T, P: FnMut(&T) -> bool> Stage<T> for FilterStage<T, P> {
    fn next(&mut self) -> Result<Option<T>> {
        while let Some(item) = self.upstream.next()? {
            if (self.predicate)(&item) {
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "filter"
    }
}

pub(crate) struct MapStage<T, F> {
    upstream: BoxedStage<T>,
    mapper: F,
}

impl<T: 'static, F: 'static> MapStage<T, F> {
    pub(crate) fn boxed<U: 'static>(upstream: BoxedStage<T>, mapper: F) -> BoxedStage<U>
    where
        F: FnMut(T) -> U,
    {
        Box::new(Self { upstream, mapper })
    }
}

impl<T, U, F: FnMut(T) -> U> Stage<U> for MapStage<T, F> {
    fn next(&mut self) -> Result<Option<U>> {
        Ok(self.upstream.next()?.map(&mut self.mapper))
    }

    fn name(&self) -> &'static str {
        "map"
    }
}

/// Expands each element into an inner pipeline and drains it before pulling
/// the next upstream element.
pub(crate) struct FlatMapStage<T, U, F> {
    upstream: BoxedStage<T>,
    mapper: F,
    current: Option<BoxedStage<U>>,
}

impl<T: 'static, U: 'static, F: FnMut(T) -> Pipeline<U> + 'static> FlatMapStage<T, U, F> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, mapper: F) -> BoxedStage<U> {
        Box::new(Self {
            upstream,
            mapper,
            current: None,
        })
    }
}

impl<T, U: 'static, F: FnMut(T) -> Pipeline<U>> Stage<U> for FlatMapStage<T, U, F> {
    fn next(&mut self) -> Result<Option<U>> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(item) = inner.next()? {
                    return Ok(Some(item));
                }
                self.current = None;
            }

            match self.upstream.next()? {
                Some(item) => {
                    let inner = (self.mapper)(item);
                    self.current = Some(inner.into_stage("flat_map")?);
                }
                None => return Ok(None),
            }
        }
    }

    fn name(&self) -> &'static str {
        "flat_map"
    }
}

pub(crate) struct PeekStage<T, C> {
    upstream: BoxedStage<T>,
    action: C,
}

impl<T: 'static, C: FnMut(&T) + 'static> PeekStage<T, C> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, action: C) -> BoxedStage<T> {
        Box::new(Self { upstream, action })
    }
}

impl<T, C: FnMut(&T)> Stage<T> for PeekStage<T, C> {
    fn next(&mut self) -> Result<Option<T>> {
        let item = self.upstream.next()?;
        if let Some(ref value) = item {
            (self.action)(value);
        }
        Ok(item)
    }

    fn name(&self) -> &'static str {
        "peek"
    }
}

pub(crate) struct SkipStage<T> {
    upstream: BoxedStage<T>,
    remaining: usize,
}

impl<T: 'static> SkipStage<T> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, count: usize) -> BoxedStage<T> {
        Box::new(Self {
            upstream,
            remaining: count,
        })
    }
}

impl<T> Stage<T> for SkipStage<T> {
    fn next(&mut self) -> Result<Option<T>> {
        while self.remaining > 0 {
            self.remaining -= 1;
            if self.upstream.next()?.is_none() {
                self.remaining = 0;
                return Ok(None);
            }
        }
        self.upstream.next()
    }

    fn name(&self) -> &'static str {
        "skip"
    }
}

/// Passes through at most `remaining` elements and then stops pulling
/// upstream entirely, which is what makes infinite sources finite.
pub(crate) struct LimitStage<T> {
    upstream: BoxedStage<T>,
    remaining: usize,
}

impl<T: 'static> LimitStage<T> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, count: usize) -> BoxedStage<T> {
        Box::new(Self {
            upstream,
            remaining: count,
        })
    }
}

impl<T> Stage<T> for LimitStage<T> {
    fn next(&mut self) -> Result<Option<T>> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        self.upstream.next()
    }

    fn name(&self) -> &'static str {
        "limit"
    }
}

/// Buffers the whole upstream on the first pull, then yields in order.
pub(crate) struct SortedStage<T> {
    upstream: Option<BoxedStage<T>>,
    comparator: Comparator<T>,
    max_buffered: Option<usize>,
    sorted: std::vec::IntoIter<T>,
}

impl<T: 'static> SortedStage<T> {
    pub(crate) fn boxed(
        upstream: BoxedStage<T>,
        comparator: Comparator<T>,
        max_buffered: Option<usize>,
    ) -> BoxedStage<T> {
        Box::new(Self {
            upstream: Some(upstream),
            comparator,
            max_buffered,
            sorted: Vec::new().into_iter(),
        })
    }

    fn fill(&mut self, mut upstream: BoxedStage<T>) -> Result<()> {
        let mut buffer = Vec::new();
        while let Some(item) = upstream.next()? {
            reserve_buffered("sorted", buffer.len(), self.max_buffered)?;
            buffer.push(item);
        }

        // Stable, so equal elements keep their encounter order
        buffer.sort_by(|a, b| self.comparator.compare(a, b));
        tracing::trace!(buffered = buffer.len(), "sorted stage buffered upstream");
        self.sorted = buffer.into_iter();
        Ok(())
    }
}

impl<T: 'static> Stage<T> for SortedStage<T> {
    fn next(&mut self) -> Result<Option<T>> {
        if let Some(upstream) = self.upstream.take() {
            self.fill(upstream)?;
        }
        Ok(self.sorted.next())
    }

    fn name(&self) -> &'static str {
        "sorted"
    }
}

/// Drops elements equal to one already emitted, keeping first-seen order.
pub(crate) struct DistinctStage<T> {
    upstream: BoxedStage<T>,
    seen: HashSet<T>,
    max_buffered: Option<usize>,
}

impl<T: Eq + Hash + Clone + 'static> DistinctStage<T> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, max_buffered: Option<usize>) -> BoxedStage<T> {
        Box::new(Self {
            upstream,
            seen: HashSet::new(),
            max_buffered,
        })
    }
}

impl<T: Eq + Hash + Clone> Stage<T> for DistinctStage<T> {
    fn next(&mut self) -> Result<Option<T>> {
        while let Some(item) = self.upstream.next()? {
            if self.seen.contains(&item) {
                continue;
            }
            reserve_buffered("distinct", self.seen.len(), self.max_buffered)?;
            self.seen.insert(item.clone());
            return Ok(Some(item));
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "distinct"
    }
}

pub(crate) struct TakeWhileStage<T, P> {
    upstream: BoxedStage<T>,
    predicate: P,
    done: bool,
}

impl<T: 'static, P: FnMut(&T) -> bool + 'static> TakeWhileStage<T, P> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, predicate: P) -> BoxedStage<T> {
        Box::new(Self {
            upstream,
            predicate,
            done: false,
        })
    }
}

impl<T, P: FnMut(&T) -> bool> Stage<T> for TakeWhileStage<T, P> {
    fn next(&mut self) -> Result<Option<T>> {
        if self.done {
            return Ok(None);
        }
        match self.upstream.next()? {
            Some(item) if (self.predicate)(&item) => Ok(Some(item)),
            _ => {
                self.done = true;
                Ok(None)
            }
        }
    }

    fn name(&self) -> &'static str {
        "take_while"
    }
}

pub(crate) struct DropWhileStage<T, P> {
    upstream: BoxedStage<T>,
    predicate: P,
    dropping: bool,
}

impl<T: 'static, P: FnMut(&T) -> bool + 'static> DropWhileStage<T, P> {
    pub(crate) fn boxed(upstream: BoxedStage<T>, predicate: P) -> BoxedStage<T> {
        Box::new(Self {
            upstream,
            predicate,
            dropping: true,
        })
    }
}

impl<T, P: FnMut(&T) -> bool> Stage<T> for DropWhileStage<T, P> {
    fn next(&mut self) -> Result<Option<T>> {
        if !self.dropping {
            return self.upstream.next();
        }
        while let Some(item) = self.upstream.next()? {
            if !(self.predicate)(&item) {
                self.dropping = false;
                return Ok(Some(item));
            }
        }
        Ok(None)
    }

    fn name(&self) -> &'static str {
        "drop_while"
    }
}

pub(crate) struct ConcatStage<T> {
    first: Option<BoxedStage<T>>,
    second: BoxedStage<T>,
}

impl<T: 'static> ConcatStage<T> {
    pub(crate) fn boxed(first: BoxedStage<T>, second: BoxedStage<T>) -> BoxedStage<T> {
        Box::new(Self {
            first: Some(first),
            second,
        })
    }
}

impl<T> Stage<T> for ConcatStage<T> {
    fn next(&mut self) -> Result<Option<T>> {
        if let Some(first) = self.first.as_mut() {
            if let Some(item) = first.next()? {
                return Ok(Some(item));
            }
            self.first = None;
        }
        self.second.next()
    }

    fn name(&self) -> &'static str {
        "concat"
    }
}
