//! Deferred navigation requests.
//!
//! The router runs one navigation at a time. Hooks and components that want
//! to redirect hold a [`Navigator`] and enqueue a fragment; the router drains
//! the queue in FIFO order once the running navigation completes.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use cape_carton::String;

/// Upper bound on queued navigations drained after a single request.
pub const MAX_QUEUED_NAVIGATIONS: usize = 16;

/// Cloneable handle for requesting navigation from inside a cycle.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    pending: Rc<RefCell<VecDeque<String>>>,
}

impl Navigator {
    /// Queue `fragment` for navigation after the current cycle.
    pub fn navigate(&self, fragment: &str) {
        self.pending.borrow_mut().push_back(String::from(fragment));
    }

    /// Get the number of queued requests.
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub(crate) fn take(&self) -> Option<String> {
        self.pending.borrow_mut().pop_front()
    }

    pub(crate) fn clear(&self) {
        self.pending.borrow_mut().clear();
    }
}
