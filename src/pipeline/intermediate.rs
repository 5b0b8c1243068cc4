//! Lazy intermediate operations.
//!
//! Each operation validates its arguments, consumes the receiving pipeline and
//! returns a new one with one more stage attached. No element is pulled here.

use super::stage::{
    DistinctStage, DropWhileStage, FilterStage, FlatMapStage, LimitStage, MapStage, PeekStage,
    SkipStage, SortedStage, TakeWhileStage,
};
use super::Pipeline;
use crate::errors::{require, Error, Result};
use crate::function::Comparator;
use std::hash::Hash;

/// Convert a signed element count, rejecting negatives.
fn element_count(n: i64, operation: &str) -> Result<usize> {
    usize::try_from(n).map_err(|_| {
        Error::illegal_argument(format!("{operation} count must not be negative, got {n}"))
    })
}

impl<T: 'static> Pipeline<T> {
    /// Keep only elements matching `predicate`.
    pub fn filter<P>(&self, predicate: impl Into<Option<P>>) -> Result<Pipeline<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        let predicate = require(predicate, "predicate")?;
        self.derive("filter", |upstream| FilterStage::boxed(upstream, predicate))
    }

    /// Transform every element with `mapper`.
    pub fn map<U, F>(&self, mapper: impl Into<Option<F>>) -> Result<Pipeline<U>>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        let mapper = require(mapper, "mapper")?;
        self.derive("map", |upstream| MapStage::boxed(upstream, mapper))
    }

    /// Replace every element with the contents of the pipeline `mapper`
    /// returns for it.
    ///
    /// Inner pipelines are drained one at a time, in order. Returning a
    /// pipeline that was already consumed fails the terminal operation with
    /// `IllegalState`.
    pub fn flat_map<U, F>(&self, mapper: impl Into<Option<F>>) -> Result<Pipeline<U>>
    where
        U: 'static,
        F: FnMut(T) -> Pipeline<U> + 'static,
    {
        let mapper = require(mapper, "mapper")?;
        self.derive("flat_map", |upstream| FlatMapStage::boxed(upstream, mapper))
    }

    /// Run `action` on each element as it flows past.
    pub fn peek<C>(&self, action: impl Into<Option<C>>) -> Result<Pipeline<T>>
    where
        C: FnMut(&T) + 'static,
    {
        let action = require(action, "action")?;
        self.derive("peek", |upstream| PeekStage::boxed(upstream, action))
    }

    /// Drop the first `n` elements, or all of them when fewer are produced.
    pub fn skip(&self, n: i64) -> Result<Pipeline<T>> {
        let n = element_count(n, "skip")?;
        self.derive("skip", |upstream| SkipStage::boxed(upstream, n))
    }

    /// Pass through at most `max_size` elements.
    pub fn limit(&self, max_size: i64) -> Result<Pipeline<T>> {
        let max_size = element_count(max_size, "limit")?;
        self.derive("limit", |upstream| LimitStage::boxed(upstream, max_size))
    }

    /// Sort by natural order. Buffers every upstream element on first pull.
    pub fn sorted(&self) -> Result<Pipeline<T>>
    where
        T: Ord,
    {
        self.sorted_by(Comparator::natural_order())
    }

    /// Sort with `comparator`; equal elements keep encounter order.
    pub fn sorted_by(&self, comparator: impl Into<Option<Comparator<T>>>) -> Result<Pipeline<T>> {
        let comparator = require(comparator, "comparator")?;
        let max_buffered = self.config.max_buffered;
        self.derive("sorted", |upstream| {
            SortedStage::boxed(upstream, comparator, max_buffered)
        })
    }

    /// Drop elements equal to an earlier one, keeping first-seen order.
    ///
    /// On an infinite source, a pull blocks forever once no unseen element
    /// is left to find; bound it with `limit` first.
    pub fn distinct(&self) -> Result<Pipeline<T>>
    where
        T: Eq + Hash + Clone,
    {
        let max_buffered = self.config.max_buffered;
        self.derive("distinct", |upstream| {
            DistinctStage::boxed(upstream, max_buffered)
        })
    }

    /// Pass elements through until `predicate` first fails.
    pub fn take_while<P>(&self, predicate: impl Into<Option<P>>) -> Result<Pipeline<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        let predicate = require(predicate, "predicate")?;
        self.derive("take_while", |upstream| {
            TakeWhileStage::boxed(upstream, predicate)
        })
    }

    /// Discard elements until `predicate` first fails, then pass everything.
    pub fn drop_while<P>(&self, predicate: impl Into<Option<P>>) -> Result<Pipeline<T>>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        let predicate = require(predicate, "predicate")?;
        self.derive("drop_while", |upstream| {
            DropWhileStage::boxed(upstream, predicate)
        })
    }
}
