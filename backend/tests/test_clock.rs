//! Integration tests for tick sources and the threaded runner
//!
//! The wall-clock tests use millisecond intervals and generous waits so
//! they stay robust on slow CI machines.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use defense_simulator_core_rs::{
    AttackType, Difficulty, FixedRng, ManualClock, SessionStatus, SimulationConfig,
    SimulationEngine, SimulationRunner, TickFlow, TickSource, WallClock,
};

fn config(duration_seconds: u32) -> SimulationConfig {
    SimulationConfig::new(AttackType::Ddos, Difficulty::Medium, duration_seconds)
}

fn quiet_engine() -> SimulationEngine {
    SimulationEngine::with_rng(Box::new(FixedRng(0.0)))
}

/// Poll until the predicate holds or the deadline passes.
fn wait_until(timeout: Duration, mut predicate: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if predicate() {
            return true;
        }
        thread::sleep(Duration::from_millis(2));
    }
    predicate()
}

#[test]
fn test_wall_clock_fires_and_detaches_on_stop_flow() {
    let mut clock = WallClock::with_interval(Duration::from_millis(5));
    let fired = Arc::new(AtomicUsize::new(0));

    let counter = Arc::clone(&fired);
    clock.start(Box::new(move || {
        if counter.fetch_add(1, Ordering::SeqCst) + 1 >= 3 {
            TickFlow::Stop
        } else {
            TickFlow::Continue
        }
    }));

    assert!(wait_until(Duration::from_secs(2), || !clock.is_attached()));
    assert_eq!(fired.load(Ordering::SeqCst), 3, "no tick may fire after Stop");
}

#[test]
fn test_wall_clock_start_replaces_previous_worker() {
    let mut clock = WallClock::with_interval(Duration::from_millis(5));

    let old_ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&old_ticks);
    clock.start(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        TickFlow::Continue
    }));

    // Replacing joins the first worker before the second starts
    let new_ticks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&new_ticks);
    clock.start(Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        TickFlow::Continue
    }));

    let frozen = old_ticks.load(Ordering::SeqCst);
    thread::sleep(Duration::from_millis(50));
    assert_eq!(
        old_ticks.load(Ordering::SeqCst),
        frozen,
        "replaced worker must not keep ticking"
    );
    assert!(new_ticks.load(Ordering::SeqCst) > 0);

    clock.stop();
    assert!(!clock.is_attached());
}

#[test]
fn test_runner_completes_a_session_in_real_time() {
    let mut runner = SimulationRunner::new(
        quiet_engine(),
        WallClock::with_interval(Duration::from_millis(5)),
    );
    runner.start(config(4)).unwrap();
    assert!(runner.clock_attached());

    assert!(wait_until(Duration::from_secs(5), || {
        runner.snapshot().status == SessionStatus::Completed
    }));

    let snapshot = runner.snapshot();
    assert_eq!(snapshot.remaining_seconds, 0);
    assert_eq!(snapshot.final_score, Some(100.0));

    // The clock worker exits on its own once the session completes
    assert!(wait_until(Duration::from_secs(1), || !runner.clock_attached()));
}

#[test]
fn test_runner_abort_detaches_synchronously() {
    let mut runner = SimulationRunner::new(
        quiet_engine(),
        WallClock::with_interval(Duration::from_millis(5)),
    );
    runner.start(config(10_000)).unwrap();

    // Let a few ticks land first
    assert!(wait_until(Duration::from_secs(2), || {
        runner.snapshot().remaining_seconds < 10_000
    }));

    let snapshot = runner.abort();
    assert_eq!(snapshot.status, SessionStatus::Completed);
    assert!(!runner.clock_attached());

    // Frozen after abort: no late tick may touch the session
    let frozen = runner.snapshot();
    thread::sleep(Duration::from_millis(50));
    assert_eq!(runner.snapshot(), frozen);
}

#[test]
fn test_runner_restart_reuses_the_clock() {
    let mut runner = SimulationRunner::new(
        quiet_engine(),
        WallClock::with_interval(Duration::from_millis(5)),
    );

    runner.start(config(2)).unwrap();
    assert!(wait_until(Duration::from_secs(2), || {
        runner.snapshot().status == SessionStatus::Completed
    }));

    // Second start attaches a fresh worker on the same clock
    runner.start(config(3)).unwrap();
    assert!(runner.clock_attached());
    assert!(wait_until(Duration::from_secs(2), || {
        runner.snapshot().status == SessionStatus::Completed
    }));
    assert_eq!(runner.snapshot().final_score, Some(100.0));
}

#[test]
fn test_manual_clock_runner_steps_without_wall_time() {
    let mut runner = SimulationRunner::new(quiet_engine(), ManualClock::new());
    runner.start(config(2)).unwrap();

    runner.clock_mut().fire();
    assert_eq!(runner.snapshot().remaining_seconds, 1);

    runner.clock_mut().fire();
    assert_eq!(runner.snapshot().status, SessionStatus::Completed);
    assert!(!runner.clock_attached());
    assert!(!runner.clock_mut().fire(), "detached clock must not fire");
}
