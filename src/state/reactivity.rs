// ============================================================================
// REACTIVITY - Shared value + subscribers notified after each change
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Reactive cell. Clones share both the value and the subscriber list.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T: Clone> ReactiveState<T> {
    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Read without cloning
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn update<R>(&self, updater: impl FnOnce(&mut T) -> R) -> R {
        let result = updater(&mut self.value.borrow_mut());
        self.notify();
        result
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    // Callbacks run with no borrow held, so they may read or subscribe
    fn notify(&self) {
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_value_and_subscribers() {
        let state = ReactiveState::new(1);
        let seen = Rc::new(Cell::new(0));
        {
            let seen = seen.clone();
            let reader = state.clone();
            state.subscribe(move || seen.set(reader.get()));
        }

        let other = state.clone();
        other.set(5);
        assert_eq!(seen.get(), 5);

        let doubled = other.update(|v| {
            *v *= 2;
            *v
        });
        assert_eq!(doubled, 10);
        assert_eq!(seen.get(), 10);
        assert_eq!(state.get(), 10);
    }
}
