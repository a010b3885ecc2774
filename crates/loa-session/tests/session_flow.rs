//! End-to-end session flow: the reference day of activity, entered the
//! way the presentation layer would enter it, one decision at a time.

use loa_engine::{CounterKey, ScoreChoice};
use loa_session::{EditField, HurdleSetup, Session, SessionMsg};

/// 100 pitches, 60 scores (30 qualified / 30 NQ), 10 booked — entered
/// through individual messages, as the buttons would produce them.
fn reference_day() -> Session {
    let mut session = Session::new();
    for _ in 0..100 {
        session.apply(SessionMsg::Increment(CounterKey::Pitches));
    }
    for i in 0..60 {
        let choice = if i % 2 == 0 {
            ScoreChoice::Qualified
        } else {
            ScoreChoice::Nq
        };
        session.apply(SessionMsg::ScorePromptResolved(Some(choice)));
    }
    for _ in 0..10 {
        session.apply(SessionMsg::Increment(CounterKey::Booked));
    }
    session
}

#[test]
fn reference_day_produces_the_reference_plan() {
    // Collect the debug/trace events the session emits while we drive it.
    let _guard = tracing::subscriber::set_default(tracing_subscriber::registry());

    let session = reference_day();
    let derived = session.derived();

    assert_eq!(derived.plan.per_person, 149.0);
    assert_eq!(derived.plan.booked_needed, 34);
    assert_eq!(derived.plan.qualified_needed, 136);
    assert_eq!(derived.plan.scores_needed, 272);
    assert_eq!(derived.plan.pitches_needed, 454);
    assert!(derived.plan.achievable);
    assert!(!derived.plan.uses_any_fallback());
    assert!(derived.assumptions_note().is_none());
}

#[test]
fn reference_day_display_strings() {
    let session = reference_day();
    let derived = session.derived();

    assert_eq!(derived.revenue_display(), "$1,490");
    assert_eq!(derived.per_person_display(), "$149");
    assert_eq!(derived.closing_ratio_display(), "33%"); // 10 / 30
}

#[test]
fn retargeting_mid_session_replans() {
    let mut session = reference_day();
    let derived = session.apply(SessionMsg::ValuePromptResolved {
        field: EditField::TargetRevenue,
        value: Some(10_000.0),
    });

    assert_eq!(derived.plan.booked_needed, 68); // ceil(10000 / 149)
    assert_eq!(derived.plan.qualified_needed, 272);
}

#[test]
fn hurdle_change_mid_session_reprices() {
    let mut session = reference_day();
    let derived = session.apply(SessionMsg::HurdlePromptResolved(Some(HurdleSetup {
        hurdle: 5,
        avg_gift_cost: 75.0,
    })));

    assert_eq!(derived.plan.per_person, 277.0); // 352 - 75
    assert_eq!(derived.revenue, 2770.0);
}

#[test]
fn score_removal_is_lifo_through_messages() {
    let mut session = Session::new();
    session.apply(SessionMsg::ScorePromptResolved(Some(
        ScoreChoice::Qualified,
    )));
    session.apply(SessionMsg::ScorePromptResolved(Some(ScoreChoice::Nq)));

    session.apply(SessionMsg::RemoveScore);
    assert_eq!(session.counts().nq(), 0);
    assert_eq!(session.counts().qualified(), 1);

    session.apply(SessionMsg::RemoveScore);
    assert_eq!(session.counts().scores(), 0);

    // Removing from empty is a no-op, not an underflow.
    session.apply(SessionMsg::RemoveScore);
    assert_eq!(session.counts().scores(), 0);
}

#[test]
fn reset_returns_to_fallback_planning() {
    let mut session = reference_day();
    let derived = session.apply(SessionMsg::Reset);

    assert!(derived.plan.uses_any_fallback());
    assert_eq!(derived.revenue, 0.0);
    assert_eq!(derived.closing_ratio_display(), "0%");
    // Config survives the reset, so the plan target is unchanged.
    assert_eq!(session.config().target_revenue, 5000.0);
}

#[test]
fn cancelled_dialogs_leave_the_plan_alone() {
    let mut session = reference_day();
    let before = *session.derived();

    session.apply(SessionMsg::ScorePromptResolved(None));
    session.apply(SessionMsg::HurdlePromptResolved(None));
    session.apply(SessionMsg::ValuePromptResolved {
        field: EditField::ClosingRatio,
        value: None,
    });

    assert_eq!(*session.derived(), before);
}
