//! Runs a progress ramp against the manual clock, sleeping between ticks so
//! the terminal sees it at the same pace as the browser.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;
use std::thread;

use anyhow::{bail, Result};
use notes_common::progress::{ProgressController, ProgressPhase, ProgressPlan};
use notes_common::timer::ManualTimers;

pub fn run<R: Clone + 'static>(label: &str, plan: ProgressPlan, payload: R, realtime: bool) -> Result<R> {
    let timers = ManualTimers::new();
    let controller = ProgressController::new(timers.clone());
    let delivered = Rc::new(RefCell::new(None));

    let out = Rc::clone(&delivered);
    let label_owned = label.to_string();
    controller.start(
        plan,
        payload,
        move |percent| draw(&label_owned, percent),
        move |result| *out.borrow_mut() = Some(result),
    );

    while controller.phase() == ProgressPhase::Running {
        if realtime {
            thread::sleep(plan.interval());
        }
        timers.advance(plan.interval());
    }
    eprintln!();

    let result = delivered.borrow_mut().take();
    match (controller.phase(), result) {
        (ProgressPhase::Complete, Some(result)) => Ok(result),
        (phase, _) => bail!("{} ended in phase {:?}", label, phase),
    }
}

fn draw(label: &str, percent: u8) {
    const WIDTH: usize = 30;
    let filled = WIDTH * percent as usize / 100;
    eprint!(
        "\r{} [{}{}] {:>3}%",
        label,
        "#".repeat(filled),
        "-".repeat(WIDTH - filled),
        percent
    );
    let _ = std::io::stderr().flush();
}
