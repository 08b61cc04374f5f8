#![allow(clippy::float_cmp)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;

use super::*;

#[test]
fn timeout_fires_once_deadline_passes() {
    let sched = VirtualScheduler::new();
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let _timer = sched.timeout(100, Box::new(move || flag.set(true)));

    sched.advance(99.0);
    assert!(!fired.get());
    sched.advance(1.0);
    assert!(fired.get());
    assert_eq!(sched.pending_timers(), 0);
}

#[test]
fn dropping_timer_guard_cancels_it() {
    let sched = VirtualScheduler::new();
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let timer = sched.timeout(10, Box::new(move || flag.set(true)));
    drop(timer);

    sched.advance(50.0);
    assert!(!fired.get());
}

#[test]
fn timers_fire_in_deadline_order_with_clock_at_deadline() {
    let sched = VirtualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for delay in [30_u32, 10, 20] {
        let log = Rc::clone(&log);
        let clock = sched.clone();
        sched
            .defer(delay, Box::new(move || log.borrow_mut().push((delay, clock.now()))))
            .expect("virtual defer never fails");
    }

    sched.advance(100.0);
    assert_eq!(*log.borrow(), vec![(10, 10.0), (20, 20.0), (30, 30.0)]);
    assert_eq!(sched.now(), 100.0);
}

#[test]
fn frame_loop_runs_until_cancelled() {
    let sched = VirtualScheduler::new();
    let token = CancelToken::new();
    let ticks = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&ticks);
    run_every_frame(&sched, &token, move |_ts| counter.set(counter.get() + 1)).expect("loop starts");

    sched.run_frame();
    sched.run_frame();
    sched.run_frame();
    assert_eq!(ticks.get(), 3);

    token.cancel();
    sched.run_frame();
    assert_eq!(ticks.get(), 3);
    assert_eq!(sched.pending_frames(), 0);
}

#[test]
fn frame_loop_stops_when_tick_cancels_token() {
    let sched = VirtualScheduler::new();
    let token = CancelToken::new();
    let inner = token.clone();
    let ticks = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&ticks);
    run_every_frame(&sched, &token, move |_ts| {
        counter.set(counter.get() + 1);
        if counter.get() == 2 {
            inner.cancel();
        }
    })
    .expect("loop starts");

    for _ in 0..5 {
        sched.run_frame();
    }
    assert_eq!(ticks.get(), 2);
}

#[test]
fn sleep_resolves_after_delay() {
    let sched = VirtualScheduler::new();
    let mut pool = LocalPool::new();
    let done = Rc::new(Cell::new(false));
    let flag = Rc::clone(&done);
    let wait = sleep(&sched, 2000);
    pool.spawner()
        .spawn_local(async move {
            if wait.await.is_ok() {
                flag.set(true);
            }
        })
        .expect("spawn");

    pool.run_until_stalled();
    assert!(!done.get());
    sched.advance(1999.0);
    pool.run_until_stalled();
    assert!(!done.get());
    sched.advance(1.0);
    pool.run_until_stalled();
    assert!(done.get());
}
