//! Create User dialog flow tests.
//!
//! Drive the dialog through [`CreateUserDialog::submit`] against a
//! [`MockUserCreator`] and check the error slots, the callbacks and what was
//! sent.

mod common;

use admin_console::adapters::MockUserCreator;
use admin_console::dialog::{
    ErrorRouting, Field, SubmitBlocked, SubmitOutcome, MISSING_EMAIL_MESSAGE,
    MISSING_USERNAME_MESSAGE,
};
use admin_console::models::ServerError;
use admin_console::validation::policy_message;
use common::{dialog_with, empty_dialog, fill, filled_dialog, profile, server_error, strict_policy};

// ============================================================================
// Validation Pipeline
// ============================================================================

#[tokio::test]
async fn test_empty_email_blocks_submit_regardless_of_other_fields() {
    let creator = MockUserCreator::new();
    for (username, password) in [("", ""), ("admin", ""), ("admin", "hunter22"), ("", "x")] {
        let mut dialog = empty_dialog();
        fill(&mut dialog, "", username, password);

        let outcome = dialog.submit(&creator).await;

        assert_eq!(outcome, SubmitOutcome::Invalid(Field::Email));
        assert_eq!(dialog.errors().get(Field::Email), Some(MISSING_EMAIL_MESSAGE));
        assert_eq!(dialog.errors().get(Field::Username), None);
        assert_eq!(dialog.errors().get(Field::Password), None);
    }
    assert_eq!(creator.call_count(), 0);
}

#[tokio::test]
async fn test_empty_username_blocks_submit() {
    let creator = MockUserCreator::new();
    let mut dialog = empty_dialog();
    fill(&mut dialog, "a@b.com", "", "");

    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Invalid(Field::Username));
    assert_eq!(
        dialog.errors().get(Field::Username),
        Some(MISSING_USERNAME_MESSAGE)
    );
    // only one error per attempt
    assert_eq!(dialog.errors().get(Field::Password), None);
    assert_eq!(creator.call_count(), 0);
}

#[tokio::test]
async fn test_weak_password_sets_policy_message_then_clears() {
    let creator = MockUserCreator::new();
    let mut dialog = dialog_with(strict_policy(), None);
    fill(&mut dialog, "a@b.com", "admin", "short");

    let outcome = dialog.submit(&creator).await;
    assert_eq!(outcome, SubmitOutcome::Invalid(Field::Password));
    assert_eq!(
        dialog.errors().get(Field::Password),
        Some(policy_message(&strict_policy()).as_str())
    );
    assert_eq!(creator.call_count(), 0);

    dialog.form_mut().set(Field::Password, "Str0ng!pass");
    let outcome = dialog.submit(&creator).await;
    assert_eq!(outcome, SubmitOutcome::Submitted { unrouted: None });
    assert_eq!(dialog.errors().get(Field::Password), None);
    assert_eq!(creator.call_count(), 1);
}

#[tokio::test]
async fn test_submitted_record_is_normalized() {
    let creator = MockUserCreator::new();
    let mut dialog = empty_dialog();
    fill(&mut dialog, "a@b.com", " Admin ", "  hunter22  ");

    dialog.submit(&creator).await;

    let calls = creator.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].user.email, "a@b.com");
    assert_eq!(calls[0].user.username, "admin");
    assert_eq!(calls[0].user.password, "hunter22");
    assert_eq!(calls[0].token, "");
    assert_eq!(calls[0].invite_id, "");
    assert_eq!(calls[0].redirect, "");
}

// ============================================================================
// Legacy Reconciliation
// ============================================================================

#[tokio::test]
async fn test_email_failure_sets_email_error_and_keeps_dialog_open() {
    let creator = MockUserCreator::returning(Err(server_error("Invalid email format")));
    let mut dialog = filled_dialog(ErrorRouting::Legacy);

    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(Field::Email));
    assert_eq!(dialog.errors().get(Field::Email), Some("Invalid email format"));
    assert!(dialog.callbacks().submitted.is_empty());
    assert!(dialog.is_visible());
}

#[tokio::test]
async fn test_email_failure_leaves_username_error_untouched() {
    let creator = MockUserCreator::new();
    creator.push_result(Err(server_error("Username already taken")));
    creator.push_result(Err(server_error("Email already in use")));
    let mut dialog = filled_dialog(ErrorRouting::Legacy);

    dialog.submit(&creator).await;
    dialog.submit(&creator).await;

    assert_eq!(dialog.errors().get(Field::Email), Some("Email already in use"));
    assert_eq!(
        dialog.errors().get(Field::Username),
        Some("Username already taken")
    );
}

#[tokio::test]
async fn test_username_failure_clears_email_error() {
    let creator = MockUserCreator::new();
    creator.push_result(Err(server_error("Invalid email format")));
    creator.push_result(Err(server_error("Username already taken")));
    let mut dialog = filled_dialog(ErrorRouting::Legacy);

    dialog.submit(&creator).await;
    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(Field::Username));
    assert_eq!(dialog.errors().get(Field::Email), None);
    assert_eq!(
        dialog.errors().get(Field::Username),
        Some("Username already taken")
    );
    assert!(dialog.callbacks().submitted.is_empty());
}

#[tokio::test]
async fn test_success_clears_errors_and_passes_user_prop_through() {
    let existing = profile("existing-id", "someone");
    let creator = MockUserCreator::new();
    creator.push_result(Err(server_error("Username already taken")));
    let mut dialog = dialog_with(Default::default(), Some(existing.clone()));
    fill(&mut dialog, "new@b.com", "newbie", "hunter22");

    dialog.submit(&creator).await;
    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Submitted { unrouted: None });
    assert!(dialog.errors().is_empty());
    // the prop, not the record the server created
    assert_eq!(dialog.callbacks().submitted, vec![Some(existing)]);
}

#[tokio::test]
async fn test_unrouted_failure_is_reported_as_success_in_legacy_mode() {
    let failure = ServerError::new("Internal server error").with_status(500);
    let creator = MockUserCreator::returning(Err(failure.clone()));
    let mut dialog = filled_dialog(ErrorRouting::Legacy);

    let outcome = dialog.submit(&creator).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Submitted {
            unrouted: Some(failure)
        }
    );
    assert_eq!(dialog.callbacks().submitted.len(), 1);
}

// ============================================================================
// Structured Reconciliation
// ============================================================================

#[tokio::test]
async fn test_structured_routes_by_error_id() {
    let creator = MockUserCreator::returning(Err(ServerError::new("An account with that name exists")
        .with_id("app.user.save.username_exists.app_error")));
    let mut dialog = filled_dialog(ErrorRouting::Structured);

    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(Field::Username));
    assert_eq!(
        dialog.errors().get(Field::Username),
        Some("An account with that name exists")
    );
}

#[tokio::test]
async fn test_structured_username_failure_clears_email_error() {
    let creator = MockUserCreator::new();
    creator.push_result(Err(server_error("Invalid email format")));
    creator.push_result(Err(server_error("Username already taken")));
    let mut dialog = filled_dialog(ErrorRouting::Structured);

    dialog.submit(&creator).await;
    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Rejected(Field::Username));
    assert_eq!(dialog.errors().get(Field::Email), None);
    assert_eq!(
        dialog.errors().get(Field::Username),
        Some("Username already taken")
    );
}

#[tokio::test]
async fn test_structured_success_after_failures_clears_errors() {
    let creator = MockUserCreator::new();
    creator.push_result(Err(server_error("Invalid email format")));
    creator.push_result(Err(server_error("Username already taken")));
    let mut dialog = filled_dialog(ErrorRouting::Structured);

    dialog.submit(&creator).await;
    dialog.submit(&creator).await;
    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Submitted { unrouted: None });
    assert!(dialog.errors().is_empty());
    assert_eq!(dialog.callbacks().submitted.len(), 1);
}

#[tokio::test]
async fn test_structured_never_reports_failure_as_success() {
    let creator = MockUserCreator::returning(Err(server_error("Database unavailable")));
    let mut dialog = filled_dialog(ErrorRouting::Structured);

    let outcome = dialog.submit(&creator).await;

    assert_eq!(outcome, SubmitOutcome::Failed("Database unavailable".to_string()));
    assert_eq!(dialog.server_error(), Some("Database unavailable"));
    assert!(dialog.callbacks().submitted.is_empty());
    assert!(dialog.is_visible());
}

#[tokio::test]
async fn test_structured_password_rejection_from_message() {
    let creator = MockUserCreator::returning(Err(server_error("Password is too weak")));
    let mut dialog = filled_dialog(ErrorRouting::Structured);

    assert_eq!(
        dialog.submit(&creator).await,
        SubmitOutcome::Rejected(Field::Password)
    );
    assert_eq!(
        dialog.errors().get(Field::Password),
        Some("Password is too weak")
    );
}

// ============================================================================
// Cancel / Teardown / Busy
// ============================================================================

#[tokio::test]
async fn test_cancel_clears_every_slot_and_dismisses_once() {
    let creator = MockUserCreator::returning(Err(server_error("Invalid email format")));
    let mut dialog = dialog_with(strict_policy(), None);
    fill(&mut dialog, "a@b.com", "admin", "Str0ng!pass");
    dialog.submit(&creator).await;
    dialog.form_mut().set(Field::Username, "");
    dialog.submit(&creator).await;
    fill(&mut dialog, "a@b.com", "admin", "weak");
    dialog.submit(&creator).await;
    assert_eq!(dialog.errors().fields_with_errors().len(), 3);
    assert_eq!(creator.call_count(), 1);

    dialog.cancel();

    assert!(dialog.errors().is_empty());
    assert_eq!(dialog.callbacks().dismissed, 1);
    assert!(dialog.callbacks().submitted.is_empty());
}

#[tokio::test]
async fn test_overlapping_submit_is_refused() {
    let mut dialog = filled_dialog(ErrorRouting::Legacy);
    let first = dialog.begin_submit().unwrap();

    assert_eq!(dialog.begin_submit(), Err(SubmitBlocked::Busy));

    let outcome = dialog.finish_submit(first.ticket, Ok(profile("u1", "admin")));
    assert_eq!(outcome, SubmitOutcome::Submitted { unrouted: None });
    assert!(dialog.begin_submit().is_ok());
}

#[tokio::test]
async fn test_cancel_while_pending_discards_late_result() {
    let mut dialog = filled_dialog(ErrorRouting::Legacy);
    let abandoned = dialog.begin_submit().unwrap();

    dialog.cancel();
    dialog.set_show(true);

    assert!(!dialog.is_submitting());
    let late = dialog.finish_submit(abandoned.ticket, Err(server_error("Invalid email format")));
    assert_eq!(late, SubmitOutcome::Stale);
    assert!(dialog.errors().is_empty());

    let retry = dialog.begin_submit().unwrap();
    let late = dialog.finish_submit(abandoned.ticket, Ok(profile("u1", "admin")));
    assert_eq!(late, SubmitOutcome::Stale);
    assert!(dialog.callbacks().submitted.is_empty());
    assert_eq!(dialog.callbacks().dismissed, 1);

    let outcome = dialog.finish_submit(retry.ticket, Ok(profile("u2", "admin")));
    assert_eq!(outcome, SubmitOutcome::Submitted { unrouted: None });
    assert_eq!(dialog.callbacks().submitted.len(), 1);
}
