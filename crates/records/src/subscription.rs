//! Owned live-update subscription handles.
//!
//! A component that listens for remote changes keeps its handles in a
//! [`SubscriptionScope`] it owns. Replacing the set or dropping the scope
//! releases every handle exactly once; there is no shared registry.

use std::fmt;

use tracing::{debug, warn};

use crate::error::RecordError;

type Release = Box<dyn FnOnce() -> Result<(), RecordError> + Send>;

/// One live subscription. Releases itself when dropped.
pub struct Subscription {
    channel: String,
    release: Option<Release>,
}

impl Subscription {
    /// Wraps a release hook for the subscription on `channel`.
    pub fn new<F>(channel: impl Into<String>, release: F) -> Self
    where
        F: FnOnce() -> Result<(), RecordError> + Send + 'static,
    {
        Self {
            channel: channel.into(),
            release: Some(Box::new(release)),
        }
    }

    /// Channel name.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns `true` until the subscription has been released.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    /// Releases the subscription now. Later calls do nothing.
    ///
    /// # Errors
    ///
    /// Returns whatever the release hook reports.
    pub fn release(&mut self) -> Result<(), RecordError> {
        match self.release.take() {
            Some(release) => release(),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("channel", &self.channel)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Err(e) = self.release() {
            warn!(channel = %self.channel, error = %e, "subscription release failed");
        }
    }
}

/// The subscriptions owned by one component instance.
#[derive(Debug, Default)]
pub struct SubscriptionScope {
    active: Vec<Subscription>,
}

impl SubscriptionScope {
    /// Creates an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscription to the scope.
    pub fn push(&mut self, subscription: Subscription) {
        debug!(channel = subscription.channel(), "subscription added");
        self.active.push(subscription);
    }

    /// Releases every current subscription, then installs `subscriptions`.
    pub fn replace<I>(&mut self, subscriptions: I)
    where
        I: IntoIterator<Item = Subscription>,
    {
        self.clear();
        for subscription in subscriptions {
            self.push(subscription);
        }
    }

    /// Releases every subscription in insertion order.
    ///
    /// A failing release is logged and does not stop the others.
    pub fn clear(&mut self) {
        for mut subscription in self.active.drain(..) {
            match subscription.release() {
                Ok(()) => debug!(channel = subscription.channel(), "subscription released"),
                Err(e) => warn!(
                    channel = subscription.channel(),
                    error = %e,
                    "subscription release failed"
                ),
            }
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if the scope holds no subscriptions.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Channel names, insertion order.
    pub fn channels(&self) -> impl Iterator<Item = &str> {
        self.active.iter().map(Subscription::channel)
    }
}

impl Drop for SubscriptionScope {
    fn drop(&mut self) {
        self.clear();
    }
}
