use crate::errors::{require, Result};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A shareable total ordering over `T`.
///
/// Used by `Pipeline::sorted_by`, `Pipeline::min`/`max` and
/// `BinaryOperator::max_by`/`min_by`.
pub struct Comparator<T> {
    cmp: Rc<dyn Fn(&T, &T) -> Ordering>,
}

impl<T: 'static> Comparator<T> {
    pub fn new(cmp: impl Fn(&T, &T) -> Ordering + 'static) -> Self {
        Self { cmp: Rc::new(cmp) }
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.cmp)(a, b)
    }

    /// Order by a key extracted from each element.
    pub fn comparing<K: Ord>(key: impl Fn(&T) -> K + 'static) -> Self {
        Self::new(move |a, b| key(a).cmp(&key(b)))
    }

    pub fn reversed(&self) -> Self {
        let cmp = Rc::clone(&self.cmp);
        Self::new(move |a, b| cmp(b, a))
    }

    /// Break ties of `self` with `other`.
    pub fn then_comparing(&self, other: impl Into<Option<Comparator<T>>>) -> Result<Self> {
        let other = require(other, "comparator")?;
        let cmp = Rc::clone(&self.cmp);
        Ok(Self::new(move |a, b| {
            cmp(a, b).then_with(|| other.compare(a, b))
        }))
    }
}

impl<T: Ord + 'static> Comparator<T> {
    pub fn natural_order() -> Self {
        Self::new(|a: &T, b: &T| a.cmp(b))
    }

    pub fn reverse_order() -> Self {
        Self::new(|a: &T, b: &T| b.cmp(a))
    }
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        Self {
            cmp: Rc::clone(&self.cmp),
        }
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator").finish_non_exhaustive()
    }
}
