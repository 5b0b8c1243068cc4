//! Lazy, single-use data pipelines.
//!
//! A [`Pipeline`] is built from a source, extended with intermediate
//! operations (`filter`, `map`, `sorted`, ...) and closed by exactly one
//! terminal operation (`count`, `to_array`, `reduce`, ...).
//!
//! Intermediate operations never pull elements; they attach a new stage and
//! return a new pipeline. Only a terminal operation drives evaluation, one
//! element at a time through the whole chain, and short-circuiting terminals
//! stop as soon as their answer is known.
//!
//! Every pipeline value is single-use. Calling *any* operation moves it to the
//! consumed state, even a purely lazy one, and every later call on the same
//! value fails with `IllegalState`:
//!
//! ```rust
//! use lazypipe::Pipeline;
//!
//! let letters = Pipeline::of(["a", "b", "c"]);
//! let only_a = letters.filter(|v: &&str| *v == "a").unwrap();
//!
//! assert!(letters.skip(1).unwrap_err().is_illegal_state());
//! assert_eq!(only_a.count().unwrap(), 1);
//! ```
//!
//! Infinite sources (`generate`, `iterate`) must be bounded with `limit` or
//! consumed by a short-circuiting terminal. `sorted`, `to_array` and `count`
//! on an unbounded infinite source never return. Neither does pulling from
//! `distinct` once the source stops producing unseen elements.

mod builder;
mod intermediate;
pub(crate) mod source;
pub(crate) mod stage;
mod terminal;

pub use builder::PipelineBuilder;
pub use terminal::PipelineIter;

use crate::config::PipelineConfig;
use crate::errors::{require, Error, Result};
use source::Source;
use stage::{BoxedStage, ConcatStage};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Consumption state of a pipeline value.
enum PipelineState<T> {
    Open(BoxedStage<T>),
    Consumed,
}

/// A lazy, single-use sequence of elements.
pub struct Pipeline<T> {
    state: Cell<PipelineState<T>>,
    config: Rc<PipelineConfig>,
}

impl<T: 'static> Pipeline<T> {
    pub(crate) fn from_stage(stage: BoxedStage<T>, config: Rc<PipelineConfig>) -> Self {
        Self {
            state: Cell::new(PipelineState::Open(stage)),
            config,
        }
    }

    fn from_source(source: Source<T>) -> Self {
        Self::from_stage(Box::new(source), Rc::new(PipelineConfig::default()))
    }

    pub fn empty() -> Self {
        Self::from_source(Source::Empty)
    }

    /// Pipeline over a fixed list of elements, in order.
    pub fn of(values: impl Into<Vec<T>>) -> Self {
        Self::from_source(Source::Elements(values.into().into_iter()))
    }

    /// Pipeline over `values[start..end]`.
    ///
    /// Fails with `IndexOutOfRange` when `end` exceeds the length and with
    /// `IllegalArgument` when `start > end`.
    pub fn of_range(values: impl Into<Vec<T>>, start: usize, end: usize) -> Result<Self> {
        let mut values = values.into();
        if end > values.len() {
            return Err(Error::index_out_of_range(end, values.len()));
        }
        if start > end {
            return Err(Error::illegal_argument(format!(
                "start index {start} is greater than end index {end}"
            )));
        }
        values.truncate(end);
        values.drain(..start);
        Ok(Self::of(values))
    }

    /// Lazy pipeline over an arbitrary iterator.
    pub fn from_iterator<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_source(Source::Iter(Box::new(iterable.into_iter())))
    }

    /// Infinite pipeline calling `supplier` once per pulled element.
    pub fn generate<S>(supplier: impl Into<Option<S>>) -> Result<Self>
    where
        S: FnMut() -> T + 'static,
    {
        let supplier = require(supplier, "supplier")?;
        Ok(Self::from_source(Source::Generate(Box::new(supplier))))
    }

    /// Infinite pipeline `seed, step(seed), step(step(seed)), ...`.
    pub fn iterate<F>(seed: T, step: impl Into<Option<F>>) -> Result<Self>
    where
        T: Clone,
        F: FnMut(&T) -> T + 'static,
    {
        let step = require(step, "step")?;
        Ok(Self::from_source(Source::iterate(seed, step)))
    }

    pub fn builder() -> PipelineBuilder<T> {
        PipelineBuilder::new()
    }

    /// All elements of `first`, then all elements of `second`.
    ///
    /// Consumes both pipelines; the result uses `first`'s configuration.
    pub fn concat(first: &Pipeline<T>, second: &Pipeline<T>) -> Result<Self> {
        let head = first.take_stage("concat")?;
        let tail = second.take_stage("concat")?;
        Ok(Self::from_stage(
            ConcatStage::boxed(head, tail),
            Rc::clone(&first.config),
        ))
    }

    /// Replace the evaluation settings. Stages derived later inherit them.
    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = Rc::new(config);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn is_consumed(&self) -> bool {
        let state = self.state.replace(PipelineState::Consumed);
        let consumed = matches!(state, PipelineState::Consumed);
        self.state.set(state);
        consumed
    }

    /// Take the stage chain out, marking this pipeline consumed.
    pub(crate) fn take_stage(&self, operation: &'static str) -> Result<BoxedStage<T>> {
        match self.state.replace(PipelineState::Consumed) {
            PipelineState::Open(stage) => Ok(stage),
            PipelineState::Consumed => Err(Error::illegal_state(format!(
                "pipeline has already been operated upon or closed (attempted {operation})"
            ))),
        }
    }

    pub(crate) fn into_stage(self, operation: &'static str) -> Result<BoxedStage<T>> {
        self.take_stage(operation)
    }

    /// Consume this pipeline and attach one more stage on top of it.
    pub(crate) fn derive<U: 'static>(
        &self,
        operation: &'static str,
        attach: impl FnOnce(BoxedStage<T>) -> BoxedStage<U>,
    ) -> Result<Pipeline<U>> {
        let upstream = self.take_stage(operation)?;
        tracing::trace!(operation, upstream = upstream.name(), "Attached pipeline stage");
        Ok(Pipeline::from_stage(attach(upstream), Rc::clone(&self.config)))
    }
}

impl Pipeline<i64> {
    /// `start, start + 1, ..., end - 1`
    pub fn range(start: i64, end: i64) -> Self {
        Self::from_iterator(start..end)
    }

    /// `start, start + 1, ..., end`
    pub fn range_closed(start: i64, end: i64) -> Self {
        Self::from_iterator(start..=end)
    }
}

impl<T: 'static> FromIterator<T> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: 'static> Default for Pipeline<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> fmt::Debug for Pipeline<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.replace(PipelineState::Consumed);
        let stage = match &state {
            PipelineState::Open(stage) => Some(stage.name()),
            PipelineState::Consumed => None,
        };
        self.state.set(state);

        f.debug_struct("Pipeline")
            .field("state", &if stage.is_some() { "open" } else { "consumed" })
            .field("stage", &stage)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_of_range() {
        let part = Pipeline::of_range(["a", "b", "c", "d", "f"], 0, 3).unwrap();
        assert_eq!(part.to_array().unwrap(), vec!["a", "b", "c"]);

        let middle = Pipeline::of_range(vec![1, 2, 3, 4], 1, 3).unwrap();
        assert_eq!(middle.to_array().unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_of_range_invalid() {
        let err = Pipeline::of_range(vec![1, 2, 3], 0, 4).unwrap_err();
        assert_eq!(err.category(), "IndexOutOfRange");

        let err = Pipeline::of_range(vec![1, 2, 3], 2, 1).unwrap_err();
        assert!(err.is_illegal_argument());
    }

    #[test]
    fn test_range_bounds() {
        assert_eq!(Pipeline::range(1, 3).to_array().unwrap(), vec![1, 2]);
        assert_eq!(Pipeline::range_closed(1, 3).to_array().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_is_consumed() {
        let pipeline = Pipeline::of(vec![1]);
        assert!(!pipeline.is_consumed());
        let _next = pipeline.limit(1).unwrap();
        assert!(pipeline.is_consumed());
    }

    #[test]
    fn test_debug_shows_state() {
        let pipeline = Pipeline::of(vec![1, 2]);
        assert!(format!("{:?}", pipeline).contains("open"));
        pipeline.count().unwrap();
        assert!(format!("{:?}", pipeline).contains("consumed"));
    }

    #[test]
    fn test_generate_absent_supplier() {
        let err = Pipeline::<i32>::generate::<fn() -> i32>(None).unwrap_err();
        assert!(err.is_null_argument());
    }

    #[test]
    fn test_concat_consumes_both() {
        let a = Pipeline::of(vec![1, 2]);
        let b = Pipeline::of(vec![3]);
        let joined = Pipeline::concat(&a, &b).unwrap();
        assert_eq!(joined.to_array().unwrap(), vec![1, 2, 3]);
        assert!(a.is_consumed() && b.is_consumed());
    }

    #[test]
    fn test_config_inherited() {
        let pipeline = Pipeline::of(vec![3, 1]).with_config(PipelineConfig::bounded(8));
        let sorted = pipeline.sorted().unwrap();
        assert_eq!(sorted.config().max_buffered, Some(8));
    }
}
