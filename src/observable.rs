//! Reactive container primitive
//!
//! A typed, subscriber-notifying cell. Setting the contents replaces
//! the value and synchronously notifies every subscriber with the new
//! value; the rendering side of the binding is out of scope here.

use std::fmt;
use std::sync::{Arc, Mutex};

type Subscriber<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Mutable reactive container
///
/// Handles are cheap to clone and all observe the same cell, which is
/// what keeps existing view bindings valid when a cache refresh writes
/// through an old handle.
pub struct Observable<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    value: Mutex<T>,
    subscribers: Mutex<Vec<Subscriber<T>>>,
}

impl<T: Clone> Observable<T> {
    /// Create a container holding `value`
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Inner {
                value: Mutex::new(value),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Snapshot of the current contents
    pub fn get(&self) -> T {
        self.inner.value.lock().expect("observable lock poisoned").clone()
    }

    /// Read through a borrow without cloning the contents
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.lock().expect("observable lock poisoned"))
    }

    /// Replace the contents and synchronously notify subscribers
    ///
    /// The value lock is released before notification so a subscriber
    /// may call `get` on the same container.
    pub fn set(&self, value: T) {
        let snapshot = {
            let mut guard = self.inner.value.lock().expect("observable lock poisoned");
            *guard = value;
            guard.clone()
        };
        let subscribers = self
            .inner
            .subscribers
            .lock()
            .expect("observable lock poisoned");
        for subscriber in subscribers.iter() {
            subscriber(&snapshot);
        }
    }

    /// Attach a subscriber invoked on every subsequent `set`
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        self.inner
            .subscribers
            .lock()
            .expect("observable lock poisoned")
            .push(Box::new(f));
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.value.lock().expect("observable lock poisoned");
        f.debug_tuple("Observable").field(&*guard).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_set_notifies_synchronously() {
        let cell = Observable::new(0_i64);
        let seen = Arc::new(AtomicUsize::new(0));

        let seen_by_sub = Arc::clone(&seen);
        cell.subscribe(move |value| {
            seen_by_sub.store(*value as usize, Ordering::SeqCst);
        });

        cell.set(42);
        // Notification already happened by the time set returns.
        assert_eq!(seen.load(Ordering::SeqCst), 42);
        assert_eq!(cell.get(), 42);
    }

    #[test]
    fn test_every_subscriber_fires_once_per_set() {
        let cell = Observable::new(String::new());
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls = Arc::clone(&calls);
            cell.subscribe(move |_| {
                calls.fetch_add(1, Ordering::SeqCst);
            });
        }

        cell.set("first".to_string());
        cell.set("second".to_string());
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_clone_observes_same_cell() {
        let cell = Observable::new(vec![1, 2]);
        let handle = cell.clone();

        handle.set(vec![3]);
        assert_eq!(cell.get(), vec![3]);
        assert!(cell.with(|v| v.len() == 1));
    }

    #[test]
    fn test_subscriber_may_read_back() {
        let cell = Observable::new(1_i64);
        let echo = Observable::new(0_i64);

        let cell_handle = cell.clone();
        let echo_handle = echo.clone();
        cell.subscribe(move |_| {
            // get on the same container must not deadlock
            let current = cell_handle.get();
            echo_handle.set(current);
        });

        cell.set(7);
        assert_eq!(echo.get(), 7);
    }
}
