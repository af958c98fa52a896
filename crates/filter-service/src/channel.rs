//! Broadcast channel that remembers its latest value.
//!
//! Observers are invoked synchronously, in registration order, on the
//! thread that publishes. A new subscriber receives the current value
//! before `subscribe` returns. Publication and that first delivery are
//! serialized, so no subscriber ever sees an older value after a newer one.
//!
//! ```ignore
//! let channel = SnapshotChannel::new(FilterSnapshot::default());
//! let id = channel.subscribe(|snapshot| println!("{snapshot:?}"));
//! channel.publish(next);
//! channel.unsubscribe(id);
//! ```

use parking_lot::{Mutex, ReentrantMutex};
use std::sync::{Arc, Weak};

type Observer<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Identifies one subscription on a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct ChannelState<T> {
    current: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: u64,
}

/// Latest-value broadcast channel.
///
/// Cloning yields another handle to the same channel.
pub struct SnapshotChannel<T> {
    state: Arc<Mutex<ChannelState<T>>>,
    // Held across a whole delivery. Reentrant so an observer may publish.
    delivery: Arc<ReentrantMutex<()>>,
}

impl<T> Clone for SnapshotChannel<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            delivery: self.delivery.clone(),
        }
    }
}

impl<T: Clone + Send + 'static> SnapshotChannel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            state: Arc::new(Mutex::new(ChannelState {
                current: initial,
                observers: Vec::new(),
                next_id: 0,
            })),
            delivery: Arc::new(ReentrantMutex::new(())),
        }
    }

    /// The most recently published value
    pub fn current(&self) -> T {
        self.state.lock().current.clone()
    }

    /// Store `value` and deliver it to every observer.
    ///
    /// The state lock is released before observers run, so an observer may
    /// read the channel or change subscriptions.
    pub fn publish(&self, value: T) {
        let _delivery = self.delivery.lock();
        let observers: Vec<Observer<T>> = {
            let mut state = self.state.lock();
            state.current = value.clone();
            state.observers.iter().map(|(_, o)| o.clone()).collect()
        };
        tracing::trace!(observer_count = observers.len(), "publishing snapshot");
        for observer in observers {
            observer(&value);
        }
    }

    /// Register `observer` and immediately deliver the current value to it.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let observer: Observer<T> = Arc::new(observer);
        let _delivery = self.delivery.lock();
        let (id, current) = {
            let mut state = self.state.lock();
            let id = SubscriptionId(state.next_id);
            state.next_id += 1;
            state.observers.push((id, observer.clone()));
            (id, state.current.clone())
        };
        observer(&current);
        id
    }

    /// Stop delivery to one subscription.
    ///
    /// Returns `true` if the subscription was found and removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.lock();
        let before = state.observers.len();
        state.observers.retain(|(existing, _)| *existing != id);
        state.observers.len() != before
    }

    /// Subscribe with automatic cancellation when the guard is dropped.
    pub fn subscribe_scoped<F>(&self, observer: F) -> Subscription<T>
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        let id = self.subscribe(observer);
        Subscription {
            state: Arc::downgrade(&self.state),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.state.lock().observers.len()
    }
}

/// RAII guard that cancels its subscription on drop.
///
/// Holds only a weak handle, so it never keeps the channel alive.
pub struct Subscription<T> {
    state: Weak<Mutex<ChannelState<T>>>,
    id: SubscriptionId,
}

impl<T> Subscription<T> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Cancel now rather than at drop
    pub fn cancel(self) {}
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(state) = self.state.upgrade() {
            state.lock().observers.retain(|(existing, _)| *existing != self.id);
        }
    }
}
