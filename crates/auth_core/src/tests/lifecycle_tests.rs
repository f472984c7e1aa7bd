use super::*;

#[test]
fn begin_guards_reentry_while_submitting() {
    let mut lifecycle = SubmissionLifecycle::new();
    assert_eq!(lifecycle.state(), &SubmissionState::Idle);
    assert!(!lifecycle.is_in_flight());

    assert!(lifecycle.begin());
    assert!(lifecycle.is_in_flight());

    assert!(!lifecycle.begin());
    assert_eq!(lifecycle.state(), &SubmissionState::Submitting);
}

#[test]
fn success_resolution_is_terminal_for_the_attempt() {
    let mut lifecycle = SubmissionLifecycle::new();
    assert!(lifecycle.begin());
    lifecycle.resolve_success();
    assert_eq!(lifecycle.state(), &SubmissionState::Succeeded);
}

#[test]
fn failed_attempt_accepts_a_retry() {
    let mut lifecycle = SubmissionLifecycle::new();
    assert!(lifecycle.begin());
    lifecycle.resolve_failure("rejected");
    assert_eq!(
        lifecycle.state(),
        &SubmissionState::Failed("rejected".to_string())
    );

    assert!(lifecycle.begin());
    assert_eq!(lifecycle.state(), &SubmissionState::Submitting);
}

#[test]
fn resolutions_outside_submitting_are_ignored() {
    let mut lifecycle = SubmissionLifecycle::new();
    lifecycle.resolve_success();
    assert_eq!(lifecycle.state(), &SubmissionState::Idle);

    lifecycle.resolve_failure("late");
    assert_eq!(lifecycle.state(), &SubmissionState::Idle);

    assert!(lifecycle.begin());
    lifecycle.resolve_success();
    lifecycle.resolve_failure("late");
    assert_eq!(lifecycle.state(), &SubmissionState::Succeeded);
}
