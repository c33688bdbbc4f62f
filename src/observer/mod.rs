//! Scroll-position observers
//! Per-pane registry of callbacks notified with the scroll fraction as text
//!
//! ## observer/ Invariants
//!
//! - Observers belong to exactly one pane; there is no global registry.
//! - Dispatch is synchronous and runs observers in subscription order.
//! - Subscription ids are unique for the lifetime of the registry.

use tracing::debug;

/// Callback receiving the formatted scroll position
pub type ScrollCallback = Box<dyn FnMut(&str)>;

/// Handle returned by [`ScrollObservers::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

struct Subscription {
    id: SubscriptionId,
    callback: ScrollCallback,
}

/// Format a scroll fraction with the given number of decimals
pub fn format_scroll_position(position: f64, precision: usize) -> String {
    format!("{position:.precision$}")
}

/// Registry of scroll-position observers
pub struct ScrollObservers {
    subscriptions: Vec<Subscription>,
    /// Counter for generating unique IDs
    next_id: u64,
    /// Last text dispatched, if any
    last: Option<String>,
    /// Monotonic dispatch counter for change detection
    pub generation: u64,
}

impl ScrollObservers {
    pub fn new() -> Self {
        Self {
            subscriptions: Vec::new(),
            next_id: 0,
            last: None,
            generation: 0,
        }
    }

    /// Register an observer
    pub fn subscribe(&mut self, callback: impl FnMut(&str) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            callback: Box::new(callback),
        });
        debug!(id = id.0, observers = self.subscriptions.len(), "scroll observer subscribed");
        id
    }

    /// Remove an observer by id. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        match self.subscriptions.iter().position(|s| s.id == id) {
            Some(pos) => {
                self.subscriptions.remove(pos);
                debug!(id = id.0, "scroll observer unsubscribed");
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Last text dispatched to observers
    pub fn last_message(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Deliver `text` to every observer
    pub fn notify(&mut self, text: &str) {
        for subscription in &mut self.subscriptions {
            (subscription.callback)(text);
        }
        self.last = Some(text.to_string());
        self.generation += 1;
    }
}

impl Default for ScrollObservers {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ScrollObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollObservers")
            .field("observers", &self.subscriptions.len())
            .field("last", &self.last)
            .field("generation", &self.generation)
            .finish()
    }
}
