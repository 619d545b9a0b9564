use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::{NotesError, Result};
use crate::timer::{TimerId, Timers};

/// Lifecycle of a simulated long-running task.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressPhase {
    #[default]
    Idle,
    Running,
    Complete,
    Failed,
}

/// State of one simulated task.
///
/// `percent` only grows while running and reaches exactly 100 before the
/// phase becomes `Complete`. The result is only observable once complete.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressOperation<R> {
    phase: ProgressPhase,
    percent: u8,
    result: Option<R>,
    error: Option<String>,
}

impl<R> Default for ProgressOperation<R> {
    fn default() -> Self {
        Self {
            phase: ProgressPhase::Idle,
            percent: 0,
            result: None,
            error: None,
        }
    }
}

impl<R> ProgressOperation<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn result(&self) -> Option<&R> {
        match self.phase {
            ProgressPhase::Complete => self.result.as_ref(),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self.phase {
            ProgressPhase::Failed => self.error.as_deref(),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == ProgressPhase::Running
    }

    /// `idle | complete | failed -> running`, percent back to 0.
    pub fn start(&mut self) {
        self.phase = ProgressPhase::Running;
        self.percent = 0;
        self.result = None;
        self.error = None;
    }

    /// Add `step`, clamped to 100. Returns true once 100 is reached.
    /// Ignored unless running.
    pub fn advance(&mut self, step: u8) -> bool {
        if self.phase != ProgressPhase::Running {
            return false;
        }
        self.percent = self.percent.saturating_add(step).min(100);
        self.percent == 100
    }

    /// `running -> complete`; only legal at 100 percent.
    pub fn complete(&mut self, result: R) -> Result<()> {
        if self.phase != ProgressPhase::Running || self.percent != 100 {
            return Err(NotesError::invalid_input(format!(
                "cannot complete an operation in phase {:?} at {}%",
                self.phase, self.percent
            )));
        }
        self.phase = ProgressPhase::Complete;
        self.result = Some(result);
        Ok(())
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.phase = ProgressPhase::Failed;
        self.result = None;
        self.error = Some(reason.into());
    }

    /// Back to idle, dropping any result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// How a progress ramp is paced: `step` percent every `interval()`, so that
/// 100 is reached after `total` has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressPlan {
    total: Duration,
    step: u8,
}

impl ProgressPlan {
    pub fn new(total: Duration, step: u8) -> Result<Self> {
        if step == 0 {
            return Err(NotesError::invalid_input("progress step must be at least 1"));
        }
        if total.is_zero() {
            return Err(NotesError::invalid_input("progress duration must be non-zero"));
        }
        let plan = Self {
            total,
            step: step.min(100),
        };
        if plan.interval().is_zero() {
            return Err(NotesError::invalid_input(format!(
                "progress duration {:?} is too short for {} ticks",
                total,
                plan.ticks()
            )));
        }
        Ok(plan)
    }

    pub fn from_millis(total_ms: u64, step: u8) -> Result<Self> {
        Self::new(Duration::from_millis(total_ms), step)
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn total(&self) -> Duration {
        self.total
    }

    /// Number of ticks needed to reach 100.
    pub fn ticks(&self) -> u32 {
        100u32.div_ceil(self.step as u32)
    }

    pub fn interval(&self) -> Duration {
        self.total / self.ticks()
    }
}

struct Shared<R> {
    operation: ProgressOperation<R>,
    timer: Option<TimerId>,
}

/// Drives a [`ProgressOperation`] from a repeating timer.
///
/// Owns at most one timer handle. `cancel`, `fail`, a new `start`, and drop
/// all clear it, after which no tick or completion callback runs.
pub struct ProgressController<T: Timers, R: Clone + 'static> {
    timers: T,
    shared: Rc<RefCell<Shared<R>>>,
}

impl<T: Timers, R: Clone + 'static> ProgressController<T, R> {
    pub fn new(timers: T) -> Self {
        Self {
            timers,
            shared: Rc::new(RefCell::new(Shared {
                operation: ProgressOperation::new(),
                timer: None,
            })),
        }
    }

    /// Begin a fresh ramp. Any ramp already in flight is cancelled first.
    /// `payload` is handed to `on_complete` when percent reaches 100.
    pub fn start(
        &self,
        plan: ProgressPlan,
        payload: R,
        mut on_tick: impl FnMut(u8) + 'static,
        on_complete: impl FnOnce(R) + 'static,
    ) {
        self.clear_timer();
        self.shared.borrow_mut().operation.start();
        tracing::info!(
            "Progress started: {} ticks of {}% every {:?}",
            plan.ticks(),
            plan.step(),
            plan.interval()
        );

        let weak = Rc::downgrade(&self.shared);
        let timers = self.timers.clone();
        let step = plan.step();
        let mut payload = Some(payload);
        let mut on_complete = Some(on_complete);

        let tick = move || {
            let Some(shared) = weak.upgrade() else { return };
            let (percent, done) = {
                let mut s = shared.borrow_mut();
                if !s.operation.is_running() {
                    return;
                }
                let done = s.operation.advance(step);
                (s.operation.percent(), done)
            };
            tracing::debug!("Progress tick: {}%", percent);
            on_tick(percent);

            if !done {
                return;
            }
            // on_tick may have cancelled or failed the operation.
            let timer = {
                let mut s = shared.borrow_mut();
                if !s.operation.is_running() {
                    return;
                }
                s.timer.take()
            };
            if let Some(id) = timer {
                timers.clear(id);
            }
            let (Some(result), Some(callback)) = (payload.take(), on_complete.take()) else {
                return;
            };
            if let Err(e) = shared.borrow_mut().operation.complete(result.clone()) {
                tracing::warn!("Progress completion rejected: {}", e);
                return;
            }
            tracing::info!("Progress complete");
            callback(result);
        };

        let id = self.timers.set_interval(plan.interval(), Box::new(tick));
        self.shared.borrow_mut().timer = Some(id);
    }

    /// Stop the ramp and return to idle. Safe to call at any time.
    pub fn cancel(&self) {
        if self.clear_timer() {
            tracing::info!("Progress cancelled");
        }
        let mut s = self.shared.borrow_mut();
        if s.operation.is_running() {
            s.operation.reset();
        }
    }

    /// Stop the ramp in the failed phase. `start` again is the retry path.
    pub fn fail(&self, reason: impl Into<String>) {
        self.clear_timer();
        let reason = reason.into();
        tracing::warn!("Progress failed: {}", reason);
        self.shared.borrow_mut().operation.fail(reason);
    }

    /// Forget a finished or failed result.
    pub fn reset(&self) {
        self.clear_timer();
        self.shared.borrow_mut().operation.reset();
    }

    pub fn phase(&self) -> ProgressPhase {
        self.shared.borrow().operation.phase()
    }

    pub fn percent(&self) -> u8 {
        self.shared.borrow().operation.percent()
    }

    pub fn result(&self) -> Option<R> {
        self.shared.borrow().operation.result().cloned()
    }

    pub fn error(&self) -> Option<String> {
        self.shared.borrow().operation.error().map(str::to_string)
    }

    pub fn snapshot(&self) -> ProgressOperation<R> {
        self.shared.borrow().operation.clone()
    }

    fn clear_timer(&self) -> bool {
        let timer = self.shared.borrow_mut().timer.take();
        match timer {
            Some(id) => {
                self.timers.clear(id);
                true
            }
            None => false,
        }
    }
}

impl<T: Timers, R: Clone + 'static> Drop for ProgressController<T, R> {
    fn drop(&mut self) {
        self.clear_timer();
    }
}
