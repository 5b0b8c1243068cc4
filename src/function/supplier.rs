use std::fmt;
use std::rc::Rc;

/// A zero-argument producer. Every `get` invokes the closure again; nothing
/// is memoized.
pub struct Supplier<T> {
    supply: Rc<dyn Fn() -> T>,
}

impl<T: 'static> Supplier<T> {
    pub fn new(supply: impl Fn() -> T + 'static) -> Self {
        Self {
            supply: Rc::new(supply),
        }
    }

    pub fn get(&self) -> T {
        (self.supply)()
    }

    pub fn into_fn(self) -> impl Fn() -> T {
        move || (self.supply)()
    }
}

impl<T> Clone for Supplier<T> {
    fn clone(&self) -> Self {
        Self {
            supply: Rc::clone(&self.supply),
        }
    }
}

impl<T> fmt::Debug for Supplier<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Supplier").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const PRE_LONG_TEXT: &str = "The text for the supplier test is: ";

    fn long_string(value: &Supplier<String>) -> String {
        format!("{PRE_LONG_TEXT}{}", value.get())
    }

    #[test]
    fn test_supplier_value() {
        let supplier = Supplier::new(|| "Really long sentence".to_string());
        assert_eq!(
            long_string(&supplier),
            "The text for the supplier test is: Really long sentence"
        );
    }

    #[test]
    fn test_supplier_not_memoized() {
        let counter = Rc::new(Cell::new(0));
        let c = Rc::clone(&counter);
        let supplier = Supplier::new(move || {
            c.set(c.get() + 1);
            c.get()
        });

        assert_eq!(supplier.get(), 1);
        assert_eq!(supplier.get(), 2);
        assert_eq!(supplier.clone().get(), 3);
    }
}
