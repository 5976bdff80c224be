//! The Create User dialog: form state, validation pipeline and remote error
//! reconciliation, independent of any rendering.

pub mod controller;
pub mod form;
pub mod routing;

pub use controller::{
    CreateUserDialog, CreateUserProps, DialogCallbacks, SubmitBlocked, SubmitOutcome, Submission,
    INVITE_ID, INVITE_REDIRECT, INVITE_TOKEN, MISSING_EMAIL_MESSAGE, MISSING_USERNAME_MESSAGE,
};
pub use form::{Field, FieldErrors, FormState};
pub use routing::{legacy_field, CreateUserFailure, ErrorRouting};
