//! 可订阅的值容器
//!
//! 订阅时立即收到当前值，之后每次 `set` 都会通知。
//! 回调在锁外执行，回调中可以再订阅或取消订阅。

use std::sync::{Arc, Mutex, PoisonError, Weak};

type Callback<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

pub struct Observable<T> {
    inner: Arc<Mutex<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn get(&self) -> T {
        self.lock().value.clone()
    }

    /// 更新值并通知所有订阅者
    pub fn set(&self, value: T) {
        let callbacks: Vec<Callback<T>> = {
            let mut inner = self.lock();
            inner.value = value.clone();
            inner.subscribers.iter().map(|(_, f)| Arc::clone(f)).collect()
        };
        for f in callbacks {
            f(&value);
        }
    }

    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) -> Subscription {
        let callback: Callback<T> = Arc::new(f);
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Arc::clone(&callback)));
            (id, inner.value.clone())
        };
        callback(&current);

        let weak: Weak<Mutex<Inner<T>>> = Arc::downgrade(&self.inner);
        Subscription {
            detach: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .subscribers
                        .retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    #[cfg(test)]
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// 订阅句柄，drop 或 `unsubscribe` 后不再收到通知
#[must_use = "dropping a Subscription detaches it immediately"]
pub struct Subscription {
    detach: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.detach_now();
    }

    fn detach_now(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.detach_now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscribe_receives_current_then_updates() {
        let obs = Observable::new(1);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let sub = obs.subscribe(move |v| sink.lock().unwrap().push(*v));

        obs.set(2);
        obs.set(3);
        assert_eq!(*seen.lock().unwrap(), vec![1, 2, 3]);
        drop(sub);
    }

    #[test]
    fn test_unsubscribe_and_drop_detach() {
        let obs = Observable::new(false);
        let hits = Arc::new(AtomicUsize::new(0));

        let h = Arc::clone(&hits);
        let a = obs.subscribe(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        let h = Arc::clone(&hits);
        let b = obs.subscribe(move |_| {
            h.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(obs.subscriber_count(), 2);

        a.unsubscribe();
        drop(b);
        assert_eq!(obs.subscriber_count(), 0);

        obs.set(true);
        // 只有订阅时的两次初始通知
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_subscribing_inside_callback_does_not_deadlock() {
        let obs = Observable::new(0);
        let nested: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

        let obs2 = obs.clone();
        let store = Arc::clone(&nested);
        let _outer = obs.subscribe(move |v| {
            if *v == 1 {
                let sub = obs2.subscribe(|_| {});
                store.lock().unwrap().push(sub);
            }
        });

        obs.set(1);
        assert_eq!(obs.subscriber_count(), 2);
    }

    #[test]
    fn test_subscription_outliving_observable_is_harmless() {
        let obs = Observable::new(0);
        let sub = obs.subscribe(|_| {});
        drop(obs);
        drop(sub);
    }
}
