#![allow(non_snake_case)]

use std::rc::Rc;

use dioxus::prelude::*;
use notes_common::progress::{ProgressController, ProgressPhase, ProgressPlan};

use crate::state::{toast_error, SETTINGS};
use crate::timers::BrowserTimers;

/// A progress controller bound to the component that owns it, mirrored into
/// signals so the bar re-renders on every tick.
#[derive(Clone)]
pub struct ProgressHandle<R: Clone + 'static> {
    controller: Rc<ProgressController<BrowserTimers, R>>,
    pub percent: Signal<u8>,
    pub phase: Signal<ProgressPhase>,
}

impl<R: Clone + 'static> ProgressHandle<R> {
    /// Ramp to 100 over `total_ms`, then hand `payload` to `on_complete`.
    pub fn start(&self, total_ms: u64, payload: R, on_complete: impl FnOnce(R) + 'static) {
        let step = SETTINGS.peek().step;
        let plan = match ProgressPlan::from_millis(total_ms, step) {
            Ok(plan) => plan,
            Err(e) => {
                toast_error(&e);
                return;
            }
        };
        let mut percent = self.percent;
        let mut phase = self.phase;
        percent.set(0);
        phase.set(ProgressPhase::Running);
        self.controller.start(
            plan,
            payload,
            move |p| percent.set(p),
            move |result| {
                phase.set(ProgressPhase::Complete);
                on_complete(result);
            },
        );
    }

    pub fn cancel(&self) {
        self.controller.cancel();
        self.sync();
    }

    pub fn reset(&self) {
        self.controller.reset();
        self.sync();
    }

    /// Stop in the failed phase; `start` again retries from zero.
    pub fn fail(&self, reason: impl Into<String>) {
        self.controller.fail(reason);
        self.sync();
    }

    pub fn result(&self) -> Option<R> {
        self.controller.result()
    }

    pub fn error(&self) -> Option<String> {
        self.controller.error()
    }

    fn sync(&self) {
        let mut percent = self.percent;
        let mut phase = self.phase;
        percent.set(self.controller.percent());
        phase.set(self.controller.phase());
    }
}

/// The controller is dropped with the component, which clears its timer.
pub fn use_progress<R: Clone + 'static>() -> ProgressHandle<R> {
    let percent = use_signal(|| 0u8);
    let phase = use_signal(ProgressPhase::default);
    let controller = use_hook(|| Rc::new(ProgressController::new(BrowserTimers::new())));
    use_drop({
        let controller = Rc::clone(&controller);
        move || controller.cancel()
    });
    ProgressHandle {
        controller,
        percent,
        phase,
    }
}

#[component]
pub fn ProgressBar(percent: u8, label: String) -> Element {
    rsx! {
        div { class: "progress",
            div { class: "progress-label",
                span { "{label}" }
                span { "{percent}%" }
            }
            div { class: "progress-track",
                div { class: "progress-fill", style: "width: {percent}%;" }
            }
        }
    }
}
