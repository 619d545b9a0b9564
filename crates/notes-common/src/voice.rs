use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{NotesError, Result};
use crate::timer::{TimerId, Timers};

pub const LISTEN_DURATION: Duration = Duration::from_millis(2_000);
pub const PROCESS_DURATION: Duration = Duration::from_millis(1_500);

/// Queries the simulated recognizer "hears".
pub const SAMPLE_QUERIES: &[&str] = &[
    "database management systems notes",
    "advanced algorithms study material",
    "marketing management lecture notes",
    "biotechnology research papers",
    "machine learning tutorials",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VoiceState {
    #[default]
    Idle,
    Listening,
    Processing,
}

/// Pick one of the sample queries.
pub fn recognize(rng: &mut impl Rng) -> &'static str {
    SAMPLE_QUERIES.choose(rng).copied().unwrap_or(SAMPLE_QUERIES[0])
}

/// Simulated voice search. Without speech recognition in the host the
/// control stays inert instead of failing.
pub struct VoiceCommands<T: Timers> {
    timers: T,
    supported: bool,
    state: Rc<Cell<VoiceState>>,
    timer: Rc<Cell<Option<TimerId>>>,
}

impl<T: Timers> VoiceCommands<T> {
    pub fn new(timers: T, speech_recognition_available: bool) -> Self {
        if !speech_recognition_available {
            tracing::info!("Speech recognition unavailable, voice search disabled");
        }
        Self {
            timers,
            supported: speech_recognition_available,
            state: Rc::new(Cell::new(VoiceState::Idle)),
            timer: Rc::new(Cell::new(None)),
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn state(&self) -> VoiceState {
        self.state.get()
    }

    pub fn ensure_supported(&self) -> Result<()> {
        if self.supported {
            Ok(())
        } else {
            Err(NotesError::UnsupportedEnvironment(
                "speech recognition is not available".to_string(),
            ))
        }
    }

    /// Start listening, or stop if already listening. No-op when unsupported.
    /// `on_query` receives the recognized text after listening and processing.
    pub fn toggle(&self, on_query: impl FnOnce(String) + 'static) {
        if !self.supported {
            return;
        }
        match self.state.get() {
            VoiceState::Idle => self.start(on_query),
            VoiceState::Listening => self.stop(),
            VoiceState::Processing => {}
        }
    }

    /// Abandon listening. Processing already under way is also dropped.
    pub fn stop(&self) {
        if let Some(id) = self.timer.take() {
            self.timers.clear(id);
        }
        self.state.set(VoiceState::Idle);
    }

    fn start(&self, on_query: impl FnOnce(String) + 'static) {
        self.state.set(VoiceState::Listening);
        let timers = self.timers.clone();
        let state = Rc::clone(&self.state);
        let timer = Rc::clone(&self.timer);

        let id = self.timers.set_timeout(
            LISTEN_DURATION,
            Box::new(move || {
                state.set(VoiceState::Processing);
                let state_done = Rc::clone(&state);
                let timer_done = Rc::clone(&timer);
                let id = timers.set_timeout(
                    PROCESS_DURATION,
                    Box::new(move || {
                        timer_done.set(None);
                        state_done.set(VoiceState::Idle);
                        let query = recognize(&mut rand::thread_rng());
                        tracing::info!("Voice query recognized: {}", query);
                        on_query(query.to_string());
                    }),
                );
                timer.set(Some(id));
            }),
        );
        self.timer.set(Some(id));
    }
}

impl<T: Timers> Drop for VoiceCommands<T> {
    fn drop(&mut self) {
        if let Some(id) = self.timer.take() {
            self.timers.clear(id);
        }
    }
}
