//! Change notification for store consumers.
//!
//! The store exposes synchronous accessors plus this subscribable signal;
//! the UI layer owns its own re-render trigger. There is no
//! framework-specific property/binding machinery anywhere in the core.

/// Zero-payload change signal.
///
/// Listeners receive no arguments: the signal means "re-read profile
/// state", and consumers re-read every displayed property on receipt.
/// Listeners run synchronously, in subscription order, on the emitting
/// call stack. Single-threaded by design; there is no unsubscription
/// because consumers live for the process lifetime.
#[derive(Default)]
pub struct ChangeSignal {
    listeners: Vec<Box<dyn Fn()>>,
}

impl ChangeSignal {
    /// Create a signal with no listeners
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener invoked after every successful mutation
    pub fn subscribe(&mut self, listener: impl Fn() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Invoke every listener in subscription order
    pub fn emit(&self) {
        tracing::trace!(listeners = self.listeners.len(), "change signal emitted");
        for listener in &self.listeners {
            listener();
        }
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_all_listeners() {
        let mut signal = ChangeSignal::new();
        let count = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let count = Rc::clone(&count);
            signal.subscribe(move || count.set(count.get() + 1));
        }

        signal.emit();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_emit_without_listeners_is_noop() {
        let signal = ChangeSignal::new();
        signal.emit();
        assert_eq!(signal.listener_count(), 0);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let mut signal = ChangeSignal::new();
        let order = Rc::new(std::cell::RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            signal.subscribe(move || order.borrow_mut().push(tag));
        }

        signal.emit();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }
}
