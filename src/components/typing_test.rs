use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::scheduler::VirtualScheduler;

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str) + 'static) {
    let frames = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    (frames, move |visible: &str| sink.borrow_mut().push(visible.to_owned()))
}

#[test]
fn reveals_one_char_at_a_time() {
    let mut effect = TypingEffect::new("Ada");
    assert_eq!(effect.reveal_next().as_deref(), Some("A"));
    assert_eq!(effect.reveal_next().as_deref(), Some("Ad"));
    assert_eq!(effect.reveal_next().as_deref(), Some("Ada"));
    assert_eq!(effect.reveal_next(), None);
    assert!(effect.is_complete());
}

#[test]
fn multibyte_characters_are_never_split() {
    let mut effect = TypingEffect::new("Zoë");
    effect.reveal_next();
    effect.reveal_next();
    assert_eq!(effect.reveal_next().as_deref(), Some("Zoë"));
}

#[test]
fn clears_immediately_then_waits_for_start_delay() {
    let sched = VirtualScheduler::new();
    let (frames, render) = recorder();
    play(&sched, "Shaikh", 1500, 150, render).expect("play");

    assert_eq!(*frames.borrow(), vec![String::new()]);
    sched.advance(1499.0);
    assert_eq!(frames.borrow().len(), 1);
    sched.advance(1.0);
    assert_eq!(frames.borrow().last().map(String::as_str), Some("S"));
}

#[test]
fn types_full_text_on_cadence_and_stops() {
    let sched = VirtualScheduler::new();
    let (frames, render) = recorder();
    play(&sched, "Shaikh", 1500, 150, render).expect("play");

    sched.advance(1500.0 + 150.0 * 4.0);
    assert_eq!(frames.borrow().last().map(String::as_str), Some("Shaik"));
    sched.advance(150.0);
    assert_eq!(frames.borrow().last().map(String::as_str), Some("Shaikh"));
    assert_eq!(sched.pending_timers(), 0);

    sched.advance(10_000.0);
    assert_eq!(frames.borrow().len(), 7);
}

#[test]
fn empty_text_only_clears() {
    let sched = VirtualScheduler::new();
    let (frames, render) = recorder();
    play(&sched, "", 1500, 150, render).expect("play");

    sched.advance(5000.0);
    assert_eq!(*frames.borrow(), vec![String::new()]);
    assert_eq!(sched.pending_timers(), 0);
}
