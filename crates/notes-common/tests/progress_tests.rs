use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use notes_common::progress::*;
use notes_common::timer::ManualTimers;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

struct Recorder {
    ticks: Rc<RefCell<Vec<u8>>>,
    completions: Rc<Cell<u32>>,
}

impl Recorder {
    fn new() -> Self {
        Self {
            ticks: Rc::new(RefCell::new(Vec::new())),
            completions: Rc::new(Cell::new(0)),
        }
    }

    fn start(&self, controller: &ProgressController<ManualTimers, &'static str>, plan: ProgressPlan) {
        let ticks = Rc::clone(&self.ticks);
        let completions = Rc::clone(&self.completions);
        controller.start(
            plan,
            "summary",
            move |p| ticks.borrow_mut().push(p),
            move |_| completions.set(completions.get() + 1),
        );
    }
}

#[test]
fn plan_math() {
    let plan = ProgressPlan::from_millis(2_000, 5).unwrap();
    assert_eq!(plan.ticks(), 20);
    assert_eq!(plan.interval(), ms(100));

    let uneven = ProgressPlan::from_millis(3_000, 30).unwrap();
    assert_eq!(uneven.ticks(), 4);
    assert_eq!(uneven.interval(), ms(750));

    assert!(ProgressPlan::from_millis(1_000, 0).is_err());
    assert!(ProgressPlan::from_millis(0, 5).is_err());
    assert_eq!(ProgressPlan::from_millis(1_000, 250).unwrap().step(), 100);
}

#[test]
fn plan_rejects_durations_shorter_than_one_tick() {
    assert!(ProgressPlan::new(Duration::from_nanos(10), 5).is_err());
    assert!(ProgressPlan::new(Duration::from_nanos(19), 5).is_err());

    let shortest = ProgressPlan::new(Duration::from_nanos(20), 5).unwrap();
    assert_eq!(shortest.interval(), Duration::from_nanos(1));
}

#[test]
fn ramp_completes_exactly_once() {
    let timers = ManualTimers::new();
    let controller = ProgressController::new(timers.clone());
    let rec = Recorder::new();
    rec.start(&controller, ProgressPlan::from_millis(2_000, 5).unwrap());

    assert_eq!(controller.phase(), ProgressPhase::Running);
    assert_eq!(controller.result(), None);

    timers.advance(ms(1_000));
    assert_eq!(controller.percent(), 50);
    assert_eq!(rec.completions.get(), 0);

    timers.advance(ms(1_000));
    assert_eq!(controller.percent(), 100);
    assert_eq!(controller.phase(), ProgressPhase::Complete);
    assert_eq!(controller.result(), Some("summary"));
    assert_eq!(rec.completions.get(), 1);

    // No further ticks once complete.
    let seen = rec.ticks.borrow().len();
    timers.advance(ms(5_000));
    assert_eq!(rec.ticks.borrow().len(), seen);
    assert_eq!(rec.completions.get(), 1);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn percent_is_monotonic_and_ends_at_100() {
    let timers = ManualTimers::new();
    let controller = ProgressController::new(timers.clone());
    let rec = Recorder::new();
    rec.start(&controller, ProgressPlan::from_millis(1_000, 30).unwrap());
    timers.advance(ms(2_000));

    let ticks = rec.ticks.borrow();
    assert_eq!(*ticks, vec![30, 60, 90, 100]);
}

#[test]
fn cancel_stops_ticks_and_completion() {
    let timers = ManualTimers::new();
    let controller = ProgressController::new(timers.clone());
    let rec = Recorder::new();
    rec.start(&controller, ProgressPlan::from_millis(2_000, 5).unwrap());

    timers.advance(ms(500));
    controller.cancel();
    assert_eq!(controller.phase(), ProgressPhase::Idle);
    assert_eq!(controller.percent(), 0);

    let seen = rec.ticks.borrow().len();
    timers.advance(ms(5_000));
    assert_eq!(rec.ticks.borrow().len(), seen);
    assert_eq!(rec.completions.get(), 0);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn dropping_controller_clears_timer() {
    let timers = ManualTimers::new();
    let rec = Recorder::new();
    {
        let controller = ProgressController::new(timers.clone());
        rec.start(&controller, ProgressPlan::from_millis(2_000, 5).unwrap());
        timers.advance(ms(300));
        assert_eq!(timers.pending(), 1);
    }
    assert_eq!(timers.pending(), 0);
    timers.advance(ms(5_000));
    assert_eq!(rec.completions.get(), 0);
}

#[test]
fn fail_then_restart() {
    let timers = ManualTimers::new();
    let controller = ProgressController::new(timers.clone());
    let rec = Recorder::new();
    let plan = ProgressPlan::from_millis(1_000, 10).unwrap();
    rec.start(&controller, plan);

    timers.advance(ms(300));
    controller.fail("scanner offline");
    assert_eq!(controller.phase(), ProgressPhase::Failed);
    assert_eq!(controller.error().as_deref(), Some("scanner offline"));
    assert_eq!(controller.result(), None);
    timers.advance(ms(2_000));
    assert_eq!(rec.completions.get(), 0);

    rec.start(&controller, plan);
    assert_eq!(controller.percent(), 0);
    assert_eq!(controller.error(), None);
    timers.advance(ms(1_000));
    assert_eq!(controller.phase(), ProgressPhase::Complete);
    assert_eq!(rec.completions.get(), 1);
}

#[test]
fn restart_while_running_replaces_the_ramp() {
    let timers = ManualTimers::new();
    let controller = ProgressController::new(timers.clone());
    let rec = Recorder::new();
    let plan = ProgressPlan::from_millis(1_000, 10).unwrap();
    rec.start(&controller, plan);
    timers.advance(ms(500));
    rec.start(&controller, plan);
    assert_eq!(timers.pending(), 1);
    timers.advance(ms(1_000));
    assert_eq!(rec.completions.get(), 1);
}

#[test]
fn cancel_from_tick_callback_prevents_completion() {
    let timers = ManualTimers::new();
    let controller = Rc::new(ProgressController::<ManualTimers, u32>::new(timers.clone()));
    let completed = Rc::new(Cell::new(false));
    let weak = Rc::downgrade(&controller);
    let done = Rc::clone(&completed);
    controller.start(
        ProgressPlan::from_millis(100, 50).unwrap(),
        7,
        move |p| {
            if p == 100 {
                if let Some(c) = weak.upgrade() {
                    c.cancel();
                }
            }
        },
        move |_| done.set(true),
    );
    timers.advance(ms(200));
    assert!(!completed.get());
    assert_eq!(controller.phase(), ProgressPhase::Idle);
}

#[test]
fn operation_rejects_early_completion() {
    let mut op = ProgressOperation::new();
    assert!(op.complete(1).is_err());
    op.start();
    op.advance(40);
    assert!(op.complete(1).is_err());
    assert!(op.advance(80));
    assert_eq!(op.percent(), 100);
    op.complete(1).unwrap();
    assert_eq!(op.result(), Some(&1));
    // Advancing a finished operation changes nothing.
    assert!(!op.advance(5));
    op.reset();
    assert_eq!(op.phase(), ProgressPhase::Idle);
    assert_eq!(op.result(), None);
}
