use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

/// Handle returned by a [`Timers`] implementation; pass it to `clear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Single-threaded timer facility, the shape of the browser's
/// `setInterval` / `setTimeout` / `clearInterval`.
///
/// Clearing a handle before it fires guarantees its callback never runs.
/// Callbacks never run synchronously inside `set_*`.
pub trait Timers: Clone + 'static {
    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerId;
    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId;
    fn clear(&self, id: TimerId);
}

enum Callback {
    Once(Box<dyn FnOnce()>),
    Repeat(Box<dyn FnMut()>),
}

struct Entry {
    due: Duration,
    period: Duration,
    // Taken out while the callback runs so it may call back into the timers.
    callback: Option<Callback>,
}

#[derive(Default)]
struct ManualInner {
    now: Duration,
    next_id: u64,
    entries: BTreeMap<TimerId, Entry>,
}

/// Simulated clock. Nothing fires until [`ManualTimers::advance`] moves time
/// forward, at which point due timers run in deadline order.
#[derive(Clone, Default)]
pub struct ManualTimers {
    inner: Rc<RefCell<ManualInner>>,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of timers that are still scheduled.
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Move the clock forward by `by`, running every callback that falls due.
    /// Timers scheduled by callbacks also run if they fall inside the window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let inner = self.inner.borrow();
                inner
                    .entries
                    .iter()
                    .filter(|(_, e)| e.callback.is_some())
                    .min_by_key(|(id, e)| (e.due, **id))
                    .map(|(id, e)| (*id, e.due))
            };
            let Some((id, due)) = next else { break };
            if due > target {
                break;
            }

            let callback = {
                let mut inner = self.inner.borrow_mut();
                inner.now = due;
                inner.entries.get_mut(&id).and_then(|e| e.callback.take())
            };

            match callback {
                Some(Callback::Once(f)) => {
                    f();
                    self.inner.borrow_mut().entries.remove(&id);
                }
                Some(Callback::Repeat(mut f)) => {
                    f();
                    let mut inner = self.inner.borrow_mut();
                    // Gone if the callback cleared its own handle.
                    if let Some(entry) = inner.entries.get_mut(&id) {
                        entry.due += entry.period;
                        entry.callback = Some(Callback::Repeat(f));
                    }
                }
                None => {}
            }
        }
        self.inner.borrow_mut().now = target;
    }

    fn schedule(&self, delay: Duration, period: Duration, callback: Callback) -> TimerId {
        let mut inner = self.inner.borrow_mut();
        inner.next_id += 1;
        let id = TimerId(inner.next_id);
        let due = inner.now + delay;
        inner.entries.insert(
            id,
            Entry {
                due,
                period,
                callback: Some(callback),
            },
        );
        id
    }
}

impl Timers for ManualTimers {
    fn set_interval(&self, period: Duration, callback: Box<dyn FnMut()>) -> TimerId {
        let period = period.max(Duration::from_millis(1));
        self.schedule(period, period, Callback::Repeat(callback))
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        self.schedule(delay, Duration::ZERO, Callback::Once(callback))
    }

    fn clear(&self, id: TimerId) {
        self.inner.borrow_mut().entries.remove(&id);
    }
}

/// Last-write-wins delay: each call cancels the pending one and schedules a
/// fresh timeout. Dropping the debouncer cancels whatever is pending.
pub struct Debouncer<T: Timers> {
    timers: T,
    delay: Duration,
    pending: Rc<Cell<Option<TimerId>>>,
}

impl<T: Timers> Debouncer<T> {
    pub fn new(timers: T, delay: Duration) -> Self {
        Self {
            timers,
            delay,
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        self.cancel();
        let pending = Rc::clone(&self.pending);
        let id = self.timers.set_timeout(
            self.delay,
            Box::new(move || {
                pending.set(None);
                f();
            }),
        );
        self.pending.set(Some(id));
    }

    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            self.timers.clear(id);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl<T: Timers> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
