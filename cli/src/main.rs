//! Demo driver for the defense simulation engine
//!
//! Runs one seeded session against the wall clock, scripts a couple of
//! defense toggles, and streams every snapshot to stdout as a JSON line,
//! the same feed a browser dashboard would subscribe to.
//!
//! Usage: defense-simulator [SEED] [DURATION_SECONDS] [TICK_MILLIS]
//!
//! The tick interval defaults to the nominal 1000 ms; pass a smaller value
//! to fast-forward a demo.

use std::env;
use std::thread;
use std::time::Duration;

use tracing::{info, warn};

use defense_simulator_core_rs::{
    AttackType, Difficulty, SessionStatus, SimulationConfig, SimulationEngine, SimulationRunner,
    WallClock,
};

fn arg_or<T: std::str::FromStr>(position: usize, default: T) -> T {
    env::args()
        .nth(position)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(default)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed: u64 = arg_or(1, 42);
    let duration_seconds: u32 = arg_or(2, 30).max(1);
    let tick_millis: u64 = arg_or(3, 1000).max(1);

    info!(seed, duration_seconds, tick_millis, "starting demo session");

    let engine = SimulationEngine::new(seed);
    let clock = WallClock::with_interval(Duration::from_millis(tick_millis));
    let mut runner = SimulationRunner::new(engine, clock);

    // The defense catalog heads the stream so a consumer can render the
    // toggle panel before the first snapshot arrives
    if let Ok(line) = serde_json::to_string(defense_simulator_core_rs::catalog()) {
        println!("{}", line);
    }

    // Stream every snapshot as a JSON line, like a dashboard would consume
    runner.subscribe(|snapshot| match serde_json::to_string(snapshot) {
        Ok(line) => println!("{}", line),
        Err(err) => warn!(%err, "snapshot serialization failed"),
    });

    let config = SimulationConfig::new(AttackType::Ddos, Difficulty::Medium, duration_seconds);
    if let Err(err) = runner.start(config) {
        warn!(%err, "could not start session");
        return;
    }

    // Scripted operator: raise defenses as the attack develops
    let tick = Duration::from_millis(tick_millis);
    let first_toggle = duration_seconds as u64 / 3;
    let second_toggle = 2 * duration_seconds as u64 / 3;

    thread::sleep(tick * first_toggle.max(1) as u32);
    runner.toggle_defense("firewall");

    thread::sleep(tick * (second_toggle - first_toggle).max(1) as u32);
    runner.toggle_defense("intrusion-detection");

    // Wait out the rest of the session
    while runner.snapshot().status == SessionStatus::Running {
        thread::sleep(tick);
    }

    let last = runner.snapshot();
    info!(
        attack_progress = last.attack_progress,
        final_score = last.final_score.unwrap_or_default(),
        "session completed"
    );
}
