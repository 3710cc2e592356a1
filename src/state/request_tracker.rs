use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    RequestOtp,
    SubmitOtp,
    Status,
}

/// Handle for one outbound request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    kind: RequestKind,
    seq: u64,
}

#[derive(Default)]
struct Tracked {
    latest: u64,
    in_flight: usize,
}

/// Monotonic per-kind sequence numbers; only the latest ticket may apply its response
#[derive(Clone, Default)]
pub struct RequestTracker {
    inner: Rc<RefCell<HashMap<RequestKind, Tracked>>>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, kind: RequestKind) -> Ticket {
        let mut inner = self.inner.borrow_mut();
        let tracked = inner.entry(kind).or_default();
        tracked.latest += 1;
        tracked.in_flight += 1;
        Ticket {
            kind,
            seq: tracked.latest,
        }
    }

    /// Mark the request done; returns whether its response is still current
    pub fn finish(&self, ticket: Ticket) -> bool {
        if let Some(tracked) = self.inner.borrow_mut().get_mut(&ticket.kind) {
            tracked.in_flight = tracked.in_flight.saturating_sub(1);
        }
        self.is_current(ticket)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.inner
            .borrow()
            .get(&ticket.kind)
            .is_some_and(|t| t.latest == ticket.seq)
    }

    pub fn in_flight(&self, kind: RequestKind) -> bool {
        self.inner
            .borrow()
            .get(&kind)
            .is_some_and(|t| t.in_flight > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn older_response_is_stale() {
        let tracker = RequestTracker::new();
        let first = tracker.begin(RequestKind::Status);
        let second = tracker.begin(RequestKind::Status);
        assert!(tracker.in_flight(RequestKind::Status));

        // Newer one resolves first, the slow one must be dropped
        assert!(tracker.finish(second));
        assert!(!tracker.finish(first));
        assert!(!tracker.in_flight(RequestKind::Status));
    }

    #[test]
    fn kinds_are_independent() {
        let tracker = RequestTracker::new();
        let status = tracker.begin(RequestKind::Status);
        let otp = tracker.begin(RequestKind::SubmitOtp);
        assert!(tracker.is_current(status));
        assert!(!tracker.in_flight(RequestKind::RequestOtp));
        assert!(tracker.finish(otp));
        assert!(tracker.finish(status));
    }
}
