//! Create User dialog controller.
//!
//! Owns the form values and error slots and runs the submit flow:
//!
//! 1. [`CreateUserDialog::begin_submit`] validates email, username, then
//!    password, stopping at the first failure, and hands out a [`Submission`]
//!    carrying the [`NewUser`] and a ticket.
//! 2. The caller runs the create call (directly via [`CreateUserDialog::submit`],
//!    or on a background task).
//! 3. [`CreateUserDialog::finish_submit`] maps the result onto the error slots
//!    and fires [`DialogCallbacks::on_modal_submit`] on success. Results whose
//!    ticket was invalidated by cancel or teardown are dropped.

use tracing::{debug, info, warn};

use super::form::{Field, FieldErrors, FormState};
use super::routing::{legacy_field, CreateUserFailure, ErrorRouting};
use crate::models::{NewUser, PasswordPolicy, ServerError, UserProfile};
use crate::traits::{CreateUserResult, UserCreator};
use crate::validation::is_valid_password;

pub const MISSING_EMAIL_MESSAGE: &str = "Please enter your email.";
pub const MISSING_USERNAME_MESSAGE: &str = "Please enter your username.";

/// Invite-flow parameters passed to the create call. The admin dialog never
/// uses the invite flow, so all three are empty.
pub const INVITE_TOKEN: &str = "";
pub const INVITE_ID: &str = "";
pub const INVITE_REDIRECT: &str = "";

/// Inputs handed to the dialog by its owner.
#[derive(Debug, Clone, Default)]
pub struct CreateUserProps {
    /// Existing record, passed back unchanged to `on_modal_submit`.
    pub user: Option<UserProfile>,
    /// Id of the signed-in administrator. Not used by the submit flow.
    pub current_user_id: String,
    /// Visibility, owned by the caller.
    pub show: bool,
    pub password_config: PasswordPolicy,
}

/// Notifications from the dialog to its owner.
pub trait DialogCallbacks {
    /// The user was created. Receives the `user` prop, not the new record.
    fn on_modal_submit(&mut self, user: Option<&UserProfile>);

    /// The dialog was cancelled.
    fn on_modal_dismissed(&mut self);
}

/// A validated submission awaiting its create call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Hand back to [`CreateUserDialog::finish_submit`] with the result.
    pub ticket: u64,
    pub user: NewUser,
}

/// Why [`CreateUserDialog::begin_submit`] sent nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Client-side validation failed on this field.
    Invalid(Field),
    /// A submission is already awaiting its result.
    Busy,
}

impl From<SubmitBlocked> for SubmitOutcome {
    fn from(blocked: SubmitBlocked) -> Self {
        match blocked {
            SubmitBlocked::Invalid(field) => SubmitOutcome::Invalid(field),
            SubmitBlocked::Busy => SubmitOutcome::Busy,
        }
    }
}

/// What a submit attempt ended in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Client-side validation failed on this field; nothing was sent.
    Invalid(Field),
    /// A submission is already awaiting its result.
    Busy,
    /// The server refused and the message was placed on this field.
    Rejected(Field),
    /// Structured routing only: a failure no field owns, shown as a banner.
    Failed(String),
    /// `on_modal_submit` fired. In legacy routing `unrouted` carries a failure
    /// that matched no field and was treated as success anyway.
    Submitted { unrouted: Option<ServerError> },
    /// The result belonged to a submission abandoned by cancel or teardown
    /// and was discarded without touching any state.
    Stale,
}

/// The Create User dialog state machine.
pub struct CreateUserDialog<C: DialogCallbacks> {
    props: CreateUserProps,
    form: FormState,
    errors: FieldErrors,
    server_error: Option<String>,
    routing: ErrorRouting,
    in_flight: bool,
    /// Ticket of the newest submission; bumped on every submit, cancel and teardown.
    ticket: u64,
    callbacks: C,
}

impl<C: DialogCallbacks> CreateUserDialog<C> {
    pub fn new(props: CreateUserProps, callbacks: C) -> Self {
        Self {
            props,
            form: FormState::new(),
            errors: FieldErrors::new(),
            server_error: None,
            routing: ErrorRouting::default(),
            in_flight: false,
            ticket: 0,
            callbacks,
        }
    }

    pub fn with_routing(mut self, routing: ErrorRouting) -> Self {
        self.routing = routing;
        self
    }

    pub fn props(&self) -> &CreateUserProps {
        &self.props
    }

    pub fn routing(&self) -> ErrorRouting {
        self.routing
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Dialog-level failure banner (structured routing only).
    pub fn server_error(&self) -> Option<&str> {
        self.server_error.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.props.show
    }

    /// Apply the caller's visibility flag.
    pub fn set_show(&mut self, show: bool) {
        self.props.show = show;
    }

    /// Whether a create call is awaiting its result.
    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    /// Validate the form and mark a submission as in flight.
    ///
    /// On `Err` nothing should be sent; for `Invalid` the error slot of the
    /// offending field has been set. Only one field is reported per attempt.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.in_flight {
            debug!("create user submit ignored, previous request still pending");
            return Err(SubmitBlocked::Busy);
        }

        if self.form.email.is_empty() {
            self.errors.set(Field::Email, MISSING_EMAIL_MESSAGE);
            debug!(field = %Field::Email, "create user validation failed");
            return Err(SubmitBlocked::Invalid(Field::Email));
        }

        if self.form.username.is_empty() {
            self.errors.set(Field::Username, MISSING_USERNAME_MESSAGE);
            debug!(field = %Field::Username, "create user validation failed");
            return Err(SubmitBlocked::Invalid(Field::Username));
        }

        let check = is_valid_password(&self.form.password, &self.props.password_config);
        if let (false, Some(message)) = (check.valid, check.error) {
            self.errors.set(Field::Password, message);
            debug!(field = %Field::Password, "create user validation failed");
            return Err(SubmitBlocked::Invalid(Field::Password));
        }

        self.errors.clear(Field::Password);
        self.server_error = None;
        self.in_flight = true;
        self.ticket += 1;

        let user = NewUser::normalized(&self.form.email, &self.form.username, &self.form.password);
        info!(
            email = %user.email,
            username = %user.username,
            ticket = self.ticket,
            "submitting create user"
        );
        Ok(Submission {
            ticket: self.ticket,
            user,
        })
    }

    /// Reconcile the create call's result with the error slots.
    ///
    /// A result for any ticket other than the pending one is discarded.
    pub fn finish_submit(&mut self, ticket: u64, result: CreateUserResult) -> SubmitOutcome {
        if !self.in_flight || ticket != self.ticket {
            debug!(ticket, current = self.ticket, "discarding stale create user result");
            return SubmitOutcome::Stale;
        }

        self.in_flight = false;
        match self.routing {
            ErrorRouting::Legacy => self.reconcile_legacy(result),
            ErrorRouting::Structured => self.reconcile_structured(result),
        }
    }

    /// Validate, call `creator`, and reconcile, in one step.
    pub async fn submit<U>(&mut self, creator: &U) -> SubmitOutcome
    where
        U: UserCreator + ?Sized,
    {
        let submission = match self.begin_submit() {
            Ok(submission) => submission,
            Err(blocked) => return blocked.into(),
        };
        let result = creator
            .create_user(&submission.user, INVITE_TOKEN, INVITE_ID, INVITE_REDIRECT)
            .await;
        self.finish_submit(submission.ticket, result)
    }

    /// Cancel: clear every error slot, abandon any pending submission and
    /// notify the owner.
    pub fn cancel(&mut self) {
        self.reset();
        debug!("create user dialog dismissed");
        self.callbacks.on_modal_dismissed();
    }

    /// Owner is discarding the dialog: clear every error slot and abandon any
    /// pending submission. Also runs on drop.
    pub fn teardown(&mut self) {
        self.reset();
        debug!("create user dialog torn down");
    }

    /// Clear the error slots and abandon any pending submission.
    fn reset(&mut self) {
        self.errors.reset();
        self.server_error = None;
        if self.in_flight {
            debug!(ticket = self.ticket, "abandoning pending create user request");
        }
        self.in_flight = false;
        self.ticket += 1;
    }

    fn reconcile_legacy(&mut self, result: CreateUserResult) -> SubmitOutcome {
        let failure = result.err();
        let routed = failure.as_ref().and_then(|err| legacy_field(&err.message));

        if let (Some(Field::Email), Some(err)) = (routed, failure.as_ref()) {
            info!(message = %err.message, "create user rejected, routed to email");
            self.errors.set(Field::Email, err.message.clone());
            return SubmitOutcome::Rejected(Field::Email);
        }
        self.errors.clear(Field::Email);

        if let (Some(Field::Username), Some(err)) = (routed, failure.as_ref()) {
            info!(message = %err.message, "create user rejected, routed to username");
            self.errors.set(Field::Username, err.message.clone());
            return SubmitOutcome::Rejected(Field::Username);
        }
        self.errors.clear(Field::Username);

        if let Some(err) = failure.as_ref() {
            warn!(
                message = %err.message,
                "create user failed with an error no field owns, reporting success"
            );
        } else {
            info!("user created");
        }
        self.callbacks.on_modal_submit(self.props.user.as_ref());
        SubmitOutcome::Submitted { unrouted: failure }
    }

    fn reconcile_structured(&mut self, result: CreateUserResult) -> SubmitOutcome {
        let err = match result {
            Ok(_) => {
                self.errors.clear(Field::Email);
                self.errors.clear(Field::Username);
                info!("user created");
                self.callbacks.on_modal_submit(self.props.user.as_ref());
                return SubmitOutcome::Submitted { unrouted: None };
            }
            Err(err) => err,
        };

        let failure = CreateUserFailure::classify(&err);
        let field = failure.field();

        // Same clearing order as legacy: email, then username.
        if field != Some(Field::Email) {
            self.errors.clear(Field::Email);
        }
        if !matches!(field, Some(Field::Email) | Some(Field::Username)) {
            self.errors.clear(Field::Username);
        }

        match field {
            Some(field) => {
                info!(?failure, %field, message = %err.message, "create user rejected");
                self.errors.set(field, err.message);
                SubmitOutcome::Rejected(field)
            }
            None => {
                warn!(message = %err.message, "create user failed");
                self.server_error = Some(err.message.clone());
                SubmitOutcome::Failed(err.message)
            }
        }
    }
}

impl<C: DialogCallbacks> Drop for CreateUserDialog<C> {
    fn drop(&mut self) {
        self.teardown();
    }
}
