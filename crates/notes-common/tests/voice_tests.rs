use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use notes_common::timer::ManualTimers;
use notes_common::voice::*;
use notes_common::NotesError;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn unsupported_environment_is_inert() {
    let timers = ManualTimers::new();
    let voice = VoiceCommands::new(timers.clone(), false);
    assert!(matches!(
        voice.ensure_supported(),
        Err(NotesError::UnsupportedEnvironment(_))
    ));
    voice.toggle(|_| panic!("no query expected"));
    assert_eq!(voice.state(), VoiceState::Idle);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn listening_then_processing_then_query() {
    let timers = ManualTimers::new();
    let voice = VoiceCommands::new(timers.clone(), true);
    let heard = Rc::new(RefCell::new(None));
    let h = Rc::clone(&heard);
    voice.toggle(move |q| *h.borrow_mut() = Some(q));
    assert_eq!(voice.state(), VoiceState::Listening);

    timers.advance(LISTEN_DURATION);
    assert_eq!(voice.state(), VoiceState::Processing);

    timers.advance(PROCESS_DURATION);
    assert_eq!(voice.state(), VoiceState::Idle);
    let query = heard.borrow().clone().unwrap();
    assert!(SAMPLE_QUERIES.contains(&query.as_str()));
}

#[test]
fn toggling_while_listening_stops() {
    let timers = ManualTimers::new();
    let voice = VoiceCommands::new(timers.clone(), true);
    let heard = Rc::new(RefCell::new(false));
    let h = Rc::clone(&heard);
    voice.toggle(move |_| *h.borrow_mut() = true);
    voice.toggle(|_| {});
    assert_eq!(voice.state(), VoiceState::Idle);
    timers.advance(Duration::from_secs(10));
    assert!(!*heard.borrow());
}

#[test]
fn recognize_picks_a_sample() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        assert!(SAMPLE_QUERIES.contains(&recognize(&mut rng)));
    }
}
