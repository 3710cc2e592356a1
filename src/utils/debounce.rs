use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;

/// Cancellable single-shot delay: each call replaces the pending one
#[derive(Clone)]
pub struct Debouncer {
    wait_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    pub fn call<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let pending = self.pending.clone();
        let timeout = Timeout::new(self.wait_ms, move || {
            pending.borrow_mut().take();
            f();
        });
        // Dropping the old Timeout clears it
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}
