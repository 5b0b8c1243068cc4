//! Terminal operations: the only code that pulls elements.
//!
//! Every terminal consumes the pipeline, opens an [`Evaluation`] over its
//! stage chain and pulls until it has an answer. Short-circuiting terminals
//! (`any_match`, `all_match`, `none_match`, `find_first`, `find_any`) return
//! as soon as the answer is known and never pull another element.

use super::stage::BoxedStage;
use super::Pipeline;
use crate::errors::{require, Result};
use crate::function::{BinaryOperator, Comparator};
use crate::optional::Optional;
use tracing::Span;

/// One run of a terminal operation over a stage chain.
struct Evaluation<T> {
    stage: BoxedStage<T>,
    operation: &'static str,
    pulled: usize,
    trace_elements: bool,
    span: Span,
}

impl<T> Evaluation<T> {
    fn pull(&mut self) -> Result<Option<T>> {
        let _entered = self.span.enter();
        let item = self.stage.next()?;
        if item.is_some() {
            if self.trace_elements {
                tracing::trace!(index = self.pulled, "Pulled element");
            }
            self.pulled += 1;
        }
        Ok(item)
    }

    fn finish(self) {
        let _entered = self.span.enter();
        tracing::debug!(
            operation = self.operation,
            pulled = self.pulled,
            "Terminal operation finished"
        );
    }
}

impl<T: 'static> Pipeline<T> {
    fn evaluate(&self, operation: &'static str) -> Result<Evaluation<T>> {
        let stage = self.take_stage(operation)?;
        let span = tracing::debug_span!("pipeline", operation, stage = stage.name());
        span.in_scope(|| tracing::debug!("Terminal operation started"));
        Ok(Evaluation {
            stage,
            operation,
            pulled: 0,
            trace_elements: self.config.trace_elements,
            span,
        })
    }

    /// Number of elements. Pulls everything, so upstream `peek`s always run.
    pub fn count(&self) -> Result<usize> {
        let mut eval = self.evaluate("count")?;
        let mut count = 0;
        while eval.pull()?.is_some() {
            count += 1;
        }
        eval.finish();
        Ok(count)
    }

    pub fn to_array(&self) -> Result<Vec<T>> {
        let mut eval = self.evaluate("to_array")?;
        let mut elements = Vec::new();
        while let Some(item) = eval.pull()? {
            elements.push(item);
        }
        eval.finish();
        Ok(elements)
    }

    /// Gather every element into any [`FromIterator`] collection.
    pub fn collect<C: FromIterator<T>>(&self) -> Result<C> {
        let mut eval = self.evaluate("collect")?;
        let mut elements = Vec::new();
        while let Some(item) = eval.pull()? {
            elements.push(item);
        }
        eval.finish();
        Ok(elements.into_iter().collect())
    }

    pub fn for_each<C>(&self, action: impl Into<Option<C>>) -> Result<()>
    where
        C: FnMut(T),
    {
        let mut action = require(action, "action")?;
        let mut eval = self.evaluate("for_each")?;
        while let Some(item) = eval.pull()? {
            action(item);
        }
        eval.finish();
        Ok(())
    }

    /// Whether any element matches. `false` for an empty pipeline.
    pub fn any_match<P>(&self, predicate: impl Into<Option<P>>) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let mut predicate = require(predicate, "predicate")?;
        let mut eval = self.evaluate("any_match")?;
        let mut matched = false;
        while let Some(item) = eval.pull()? {
            if predicate(&item) {
                matched = true;
                break;
            }
        }
        eval.finish();
        Ok(matched)
    }

    /// Whether every element matches. `true` for an empty pipeline.
    pub fn all_match<P>(&self, predicate: impl Into<Option<P>>) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let mut predicate = require(predicate, "predicate")?;
        let mut eval = self.evaluate("all_match")?;
        let mut matched = true;
        while let Some(item) = eval.pull()? {
            if !predicate(&item) {
                matched = false;
                break;
            }
        }
        eval.finish();
        Ok(matched)
    }

    /// Whether no element matches. `true` for an empty pipeline.
    pub fn none_match<P>(&self, predicate: impl Into<Option<P>>) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        let mut predicate = require(predicate, "predicate")?;
        let mut eval = self.evaluate("none_match")?;
        let mut matched = false;
        while let Some(item) = eval.pull()? {
            if predicate(&item) {
                matched = true;
                break;
            }
        }
        eval.finish();
        Ok(!matched)
    }

    /// First element in encounter order, pulling only that one.
    pub fn find_first(&self) -> Result<Optional<T>> {
        self.find("find_first")
    }

    /// Some element of the pipeline. Evaluation is sequential, so this is
    /// always the first one.
    pub fn find_any(&self) -> Result<Optional<T>> {
        self.find("find_any")
    }

    fn find(&self, operation: &'static str) -> Result<Optional<T>> {
        let mut eval = self.evaluate(operation)?;
        let first = eval.pull()?;
        eval.finish();
        Ok(Optional::from(first))
    }

    /// Fold left to right, starting from the first element.
    ///
    /// Empty when there are no elements; a single element is returned as is
    /// without calling `accumulator`.
    pub fn reduce<F>(&self, accumulator: impl Into<Option<F>>) -> Result<Optional<T>>
    where
        F: FnMut(T, T) -> T,
    {
        let mut accumulator = require(accumulator, "accumulator")?;
        let mut eval = self.evaluate("reduce")?;
        let mut result = eval.pull()?;
        while let Some(item) = eval.pull()? {
            result = result.map(|acc| accumulator(acc, item));
        }
        eval.finish();
        Ok(Optional::from(result))
    }

    /// Fold left to right, starting from `identity`.
    pub fn reduce_with<F>(&self, identity: T, accumulator: impl Into<Option<F>>) -> Result<T>
    where
        F: FnMut(T, T) -> T,
    {
        let mut accumulator = require(accumulator, "accumulator")?;
        let mut eval = self.evaluate("reduce_with")?;
        let mut result = identity;
        while let Some(item) = eval.pull()? {
            result = accumulator(result, item);
        }
        eval.finish();
        Ok(result)
    }

    /// Greatest element per `comparator`; the first one wins ties.
    pub fn max(&self, comparator: impl Into<Option<Comparator<T>>>) -> Result<Optional<T>> {
        let operator = BinaryOperator::max_by(comparator)?;
        self.reduce(operator.into_fn())
    }

    /// Least element per `comparator`; the first one wins ties.
    pub fn min(&self, comparator: impl Into<Option<Comparator<T>>>) -> Result<Optional<T>> {
        let operator = BinaryOperator::min_by(comparator)?;
        self.reduce(operator.into_fn())
    }

    /// Pull elements one at a time through a standard iterator.
    ///
    /// Consumes the pipeline immediately, even if the iterator is never
    /// advanced. Yields `Err` at most once, after which it is exhausted.
    pub fn iter(&self) -> Result<PipelineIter<T>> {
        Ok(PipelineIter {
            eval: Some(self.evaluate("iter")?),
        })
    }
}

/// Iterator returned by [`Pipeline::iter`].
pub struct PipelineIter<T> {
    eval: Option<Evaluation<T>>,
}

impl<T> PipelineIter<T> {
    fn close(&mut self) {
        if let Some(eval) = self.eval.take() {
            eval.finish();
        }
    }
}

impl<T> Iterator for PipelineIter<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.eval.as_mut()?.pull();
        match result {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.close();
                None
            }
            Err(e) => {
                self.close();
                Some(Err(e))
            }
        }
    }
}

impl<T> std::fmt::Debug for PipelineIter<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineIter")
            .field("exhausted", &self.eval.is_none())
            .finish()
    }
}
