//! Policy selector tests: the three control modes and mode switching.

use smartcity_core::{
    engine::SimEngine,
    error::SimError,
    policy::{select_flags, Mode},
    store::ZoneState,
};

fn zone(name: &str, traffic: i64, complaints: i64, signal_active: bool) -> ZoneState {
    ZoneState {
        name: name.into(),
        traffic,
        complaints,
        signal_active,
    }
}

/// Do Nothing forces every flag off, whatever the operator set before.
#[test]
fn no_intervention_forces_every_flag_false() {
    let zones = vec![
        zone("Zone 1", 200, 150, true),
        zone("Zone 2", 40, 0, true),
        zone("Zone 3", 120, 60, false),
    ];
    assert_eq!(
        select_flags(Mode::NoIntervention, &zones),
        vec![false, false, false]
    );
}

/// Auto-control thresholds the unrounded risk, strictly above 100.
#[test]
fn auto_control_thresholds_unrounded_risk() {
    // 0.6*100 + 0.4*100 = 100.0 exactly: on the threshold, stays off.
    let at = zone("Zone 1", 100, 100, false);
    // 0.6*101 + 0.4*100 = 100.6: above, switches on.
    let over = zone("Zone 2", 101, 100, false);
    let under = zone("Zone 3", 40, 0, true);
    assert_eq!(
        select_flags(Mode::AutoControl, &[at, over, under]),
        vec![false, true, false]
    );
}

/// Auto-control reads metrics only; prior flags never feed back in.
#[test]
fn auto_control_ignores_prior_flags() {
    let mut zones = vec![zone("Zone 1", 150, 100, false)];
    let decided = select_flags(Mode::AutoControl, &zones);
    zones[0].signal_active = true;
    assert_eq!(
        select_flags(Mode::AutoControl, &zones),
        decided,
        "auto decision must depend on metrics alone"
    );
}

/// Manual passes the operator's flags through untouched.
#[test]
fn manual_is_the_identity_over_operator_flags() {
    let zones = vec![
        zone("Zone 1", 150, 100, true),
        zone("Zone 2", 90, 20, false),
    ];
    assert_eq!(select_flags(Mode::Manual, &zones), vec![true, false]);
}

/// Entering Do Nothing clears live flags at once, before any step runs.
#[test]
fn entering_no_intervention_clears_flags_immediately() {
    let mut engine = SimEngine::build_test(7);
    engine
        .set_manual_flags(&[("Zone 1".into(), true), ("Zone 3".into(), true)])
        .expect("manual flags");
    assert!(engine.state().zones.iter().any(|z| z.signal_active));

    engine.set_mode(Mode::NoIntervention);
    assert!(
        engine.state().zones.iter().all(|z| !z.signal_active),
        "flags must drop the moment Do Nothing is entered"
    );
    assert_eq!(engine.state().tick, 0, "the switch itself must not tick");
}

/// Switching into auto leaves flags alone until the next step applies it.
#[test]
fn switching_to_auto_keeps_flags_until_next_step() {
    let mut engine = SimEngine::build_test(7);
    engine
        .set_manual_flags(&[("Zone 2".into(), true)])
        .expect("manual flags");
    engine.set_mode(Mode::AutoControl);

    let flags: Vec<bool> = engine.state().zones.iter().map(|z| z.signal_active).collect();
    assert!(
        flags[1],
        "flag must survive the switch; policy only applies on step"
    );
    assert_eq!(engine.mode(), Mode::AutoControl);
}

/// Mode names parse from their wire spelling; anything else is rejected.
#[test]
fn mode_parses_from_snake_case_names() {
    assert_eq!("manual".parse::<Mode>().unwrap(), Mode::Manual);
    assert_eq!(
        "no_intervention".parse::<Mode>().unwrap(),
        Mode::NoIntervention
    );
    assert_eq!("auto_control".parse::<Mode>().unwrap(), Mode::AutoControl);

    let err = "cruise_control".parse::<Mode>().unwrap_err();
    assert!(
        matches!(err, SimError::InvalidMode { ref given } if given == "cruise_control"),
        "unexpected parse error: {err}"
    );
}

/// Operator-facing labels are fixed strings the control surface shows.
#[test]
fn mode_labels_match_the_control_surface() {
    assert_eq!(Mode::Manual.label(), "Live Control");
    assert_eq!(Mode::NoIntervention.label(), "Do Nothing");
    assert_eq!(Mode::AutoControl.label(), "AI Auto-Control");
}
