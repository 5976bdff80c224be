//! Application state for the admin console TUI.
//!
//! The [`App`] owns one [`CreateUserDialog`] and bridges it to the event loop:
//! key presses edit the form, Enter spawns the create call on tokio, and the
//! result comes back as an [`AppMessage`] on the app's channel.

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

use crate::dialog::{CreateUserDialog, CreateUserProps, DialogCallbacks, ErrorRouting, Field};
use crate::models::UserProfile;
use crate::startup::DialogContext;
use crate::traits::UserCreator;

/// Dialog callbacks that post to the app's message channel.
pub struct AppCallbacks {
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl AppCallbacks {
    pub fn new(tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }
}

impl DialogCallbacks for AppCallbacks {
    fn on_modal_submit(&mut self, user: Option<&UserProfile>) {
        let _ = self.tx.send(AppMessage::DialogSubmitted(user.cloned()));
    }

    fn on_modal_dismissed(&mut self) {
        let _ = self.tx.send(AppMessage::DialogDismissed);
    }
}

/// Tone of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Pending,
    Success,
    Warning,
    Error,
}

/// One-line message at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Main application state
pub struct App {
    pub should_quit: bool,
    /// Set when visible state changed; cleared after each draw
    pub needs_redraw: bool,
    /// Field receiving key input
    pub focus: Field,
    pub dialog: CreateUserDialog<AppCallbacks>,
    /// Remote create operation, shared with spawned tasks
    pub creator: Arc<dyn UserCreator>,
    pub status: Option<Status>,
    /// Usernames created during this session, oldest first
    pub created: Vec<String>,
    /// Server base URL, for the header
    pub server_url: String,
    /// Signed-in administrator, for the header
    pub current_user_name: Option<String>,
    /// Receiver for async messages; taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Username of the submission in flight
    pending_username: Option<String>,
}

impl App {
    /// Build the app with the dialog already open.
    pub fn new(
        creator: Arc<dyn UserCreator>,
        context: DialogContext,
        routing: ErrorRouting,
        server_url: impl Into<String>,
    ) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        let props = CreateUserProps {
            user: None,
            current_user_id: context.current_user_id,
            show: true,
            password_config: context.password_config,
        };
        let dialog = CreateUserDialog::new(props, AppCallbacks::new(message_tx.clone()))
            .with_routing(routing);

        Self {
            should_quit: false,
            needs_redraw: true,
            focus: Field::Email,
            dialog,
            creator,
            status: None,
            created: Vec::new(),
            server_url: server_url.into(),
            current_user_name: context.current_user_name,
            message_rx: Some(message_rx),
            message_tx,
            pending_username: None,
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        debug!("quit requested");
        self.should_quit = true;
    }

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status::new(kind, text));
        self.mark_dirty();
    }

    /// Show the dialog with an empty form.
    pub fn open_dialog(&mut self) {
        self.dialog.form_mut().clear();
        self.focus = Field::Email;
        self.dialog.set_show(true);
        self.mark_dirty();
    }

    /// Hide the dialog and forget what was typed.
    fn close_dialog(&mut self) {
        self.dialog.set_show(false);
        self.dialog.form_mut().clear();
        self.focus = Field::Email;
        self.mark_dirty();
    }
}
