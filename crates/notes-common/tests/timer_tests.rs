use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use notes_common::timer::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn timeout_fires_once_when_due() {
    let timers = ManualTimers::new();
    let fired = Rc::new(Cell::new(0));
    let f = Rc::clone(&fired);
    timers.set_timeout(ms(300), Box::new(move || f.set(f.get() + 1)));

    timers.advance(ms(299));
    assert_eq!(fired.get(), 0);
    timers.advance(ms(1));
    assert_eq!(fired.get(), 1);
    timers.advance(ms(1_000));
    assert_eq!(fired.get(), 1);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn interval_repeats_until_cleared() {
    let timers = ManualTimers::new();
    let fired = Rc::new(Cell::new(0));
    let f = Rc::clone(&fired);
    let id = timers.set_interval(ms(100), Box::new(move || f.set(f.get() + 1)));
    timers.advance(ms(350));
    assert_eq!(fired.get(), 3);
    timers.clear(id);
    timers.advance(ms(1_000));
    assert_eq!(fired.get(), 3);
}

#[test]
fn cleared_timeout_never_runs() {
    let timers = ManualTimers::new();
    let fired = Rc::new(Cell::new(false));
    let f = Rc::clone(&fired);
    let id = timers.set_timeout(ms(10), Box::new(move || f.set(true)));
    timers.clear(id);
    timers.advance(ms(100));
    assert!(!fired.get());
}

#[test]
fn timers_fire_in_deadline_order() {
    let timers = ManualTimers::new();
    let order = Rc::new(RefCell::new(Vec::new()));
    for (delay, label) in [(30, "c"), (10, "a"), (20, "b")] {
        let o = Rc::clone(&order);
        timers.set_timeout(ms(delay), Box::new(move || o.borrow_mut().push(label)));
    }
    timers.advance(ms(50));
    assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    assert_eq!(timers.now(), ms(50));
}

#[test]
fn nested_timeout_inside_window_runs() {
    let timers = ManualTimers::new();
    let fired = Rc::new(Cell::new(false));
    let inner_timers = timers.clone();
    let f = Rc::clone(&fired);
    timers.set_timeout(
        ms(10),
        Box::new(move || {
            inner_timers.set_timeout(ms(10), Box::new(move || f.set(true)));
        }),
    );
    timers.advance(ms(25));
    assert!(fired.get());
}

#[test]
fn debouncer_keeps_only_last_call() {
    let timers = ManualTimers::new();
    let debouncer = Debouncer::new(timers.clone(), ms(300));
    let seen = Rc::new(RefCell::new(Vec::new()));

    for query in ["d", "da", "dat"] {
        let s = Rc::clone(&seen);
        debouncer.call(move || s.borrow_mut().push(query));
        timers.advance(ms(100));
    }
    assert!(seen.borrow().is_empty());
    assert!(debouncer.is_pending());

    timers.advance(ms(200));
    assert_eq!(*seen.borrow(), vec!["dat"]);
    assert!(!debouncer.is_pending());
}

#[test]
fn dropping_debouncer_cancels_pending_call() {
    let timers = ManualTimers::new();
    let fired = Rc::new(Cell::new(false));
    {
        let debouncer = Debouncer::new(timers.clone(), ms(300));
        let f = Rc::clone(&fired);
        debouncer.call(move || f.set(true));
    }
    timers.advance(ms(1_000));
    assert!(!fired.get());
    assert_eq!(timers.pending(), 0);
}
