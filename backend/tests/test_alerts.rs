//! Integration tests for alert synthesis and the bounded alert log

use defense_simulator_core_rs::{
    AttackType, Difficulty, FixedRng, SequenceRng, Severity, SimulationConfig, SimulationEngine,
    ALERT_LOG_CAP,
};

fn config(duration_seconds: u32) -> SimulationConfig {
    SimulationConfig::new(AttackType::Phishing, Difficulty::Easy, duration_seconds)
}

#[test]
fn test_alert_appended_with_elapsed_tick() {
    // Tick 1: no increment (0.0), alert gate crossed (0.9),
    // severity draw 0.81 → Danger, message draw 0.0 → first template
    let mut engine = SimulationEngine::with_rng(Box::new(SequenceRng::new(vec![
        0.0, 0.9, 0.81, 0.0,
    ])));
    engine.start(config(30)).unwrap();

    let snapshot = engine.tick();

    assert_eq!(snapshot.alert_log.len(), 2); // start alert + synthesized
    let alert = snapshot.alert_log.last().unwrap();
    assert_eq!(alert.message(), "Suspicious login attempt detected");
    assert_eq!(alert.severity(), Severity::Danger);
    assert_eq!(alert.tick(), 1);
}

#[test]
fn test_no_alert_at_gate_boundary() {
    // r3 exactly 0.85 must not synthesize
    let mut engine = SimulationEngine::with_rng(Box::new(SequenceRng::new(vec![0.0, 0.85])));
    engine.start(config(30)).unwrap();

    let snapshot = engine.tick();
    assert_eq!(snapshot.alert_log.len(), 1); // only the start alert
}

#[test]
fn test_alert_log_keeps_only_the_most_recent() {
    // A saturated RNG synthesizes one alert every tick
    let mut engine = SimulationEngine::with_rng(Box::new(FixedRng(0.9)));
    engine.start(config(20)).unwrap();

    for _ in 0..10 {
        engine.tick();
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.alert_log.len(), ALERT_LOG_CAP);

    // Oldest dropped first: the survivors are the alerts from ticks 5..=10,
    // in order (the start alert was evicted long ago)
    let ticks: Vec<u32> = snapshot.alert_log.iter().map(|a| a.tick()).collect();
    assert_eq!(ticks, vec![5, 6, 7, 8, 9, 10]);
}

#[test]
fn test_activation_alerts_respect_the_cap() {
    let mut engine = SimulationEngine::with_rng(Box::new(FixedRng(0.0)));
    engine.start(config(60)).unwrap();

    // Toggle all six defenses on: six activation alerts plus the start
    // alert must still fit the cap
    for id in [
        "firewall",
        "intrusion-detection",
        "antivirus",
        "web-app-firewall",
        "dns-filtering",
        "multi-factor-auth",
    ] {
        engine.toggle_defense(id);
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.alert_log.len(), ALERT_LOG_CAP);
    assert_eq!(
        snapshot.alert_log[0].message(),
        "Firewall Rules defense activated",
        "start alert should have been evicted, oldest activation first"
    );
    assert_eq!(
        snapshot.alert_log.last().unwrap().message(),
        "Multi-Factor Auth defense activated"
    );
}

#[test]
fn test_severity_distribution_over_a_long_run() {
    // Seeded engine, long session: the three severities all occur, and
    // Info dominates (60% of synthesized alerts in expectation)
    let mut engine = SimulationEngine::new(20260807);
    engine.start(config(5000)).unwrap();

    let mut info = 0usize;
    let mut warning = 0usize;
    let mut danger = 0usize;
    for _ in 0..5000 {
        let before_len = engine.snapshot().alert_log.len();
        let before_last = engine.snapshot().alert_log.last().map(|a| a.id().to_string());
        let snapshot = engine.tick();
        let last = snapshot.alert_log.last();
        let appended = match (before_len, last) {
            (0, Some(_)) => true,
            (_, Some(alert)) => before_last.as_deref() != Some(alert.id()),
            _ => false,
        };
        if appended {
            match last.unwrap().severity() {
                Severity::Info => info += 1,
                Severity::Warning => warning += 1,
                Severity::Danger => danger += 1,
            }
        }
    }

    let total = info + warning + danger;
    // ~15% of 5000 ticks
    assert!(total > 500, "expected a substantial alert count, got {}", total);
    assert!(info > warning, "Info should be the most common severity");
    assert!(info > danger, "Info should outnumber Danger");
    assert!(warning > 0 && danger > 0, "all severities should occur");
}
