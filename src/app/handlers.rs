//! Key and message handling for the App.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::{App, AppMessage, StatusKind};
use crate::dialog::{SubmitBlocked, SubmitOutcome, INVITE_ID, INVITE_REDIRECT, INVITE_TOKEN};

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.dialog.is_visible() {
            self.handle_dialog_key(key);
        } else {
            match key.code {
                KeyCode::Char('n') | KeyCode::Enter => self.open_dialog(),
                KeyCode::Char('q') | KeyCode::Esc => self.quit(),
                _ => {}
            }
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dialog.cancel(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Backspace => self.dialog.form_mut().pop_char(self.focus),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.dialog.form_mut().push_char(self.focus, c);
            }
            _ => {}
        }
    }

    /// Insert pasted text into the focused field. Line breaks are dropped.
    pub fn handle_paste(&mut self, text: &str) {
        if !self.dialog.is_visible() {
            return;
        }
        for c in text.chars().filter(|c| !matches!(c, '\r' | '\n')) {
            self.dialog.form_mut().push_char(self.focus, c);
        }
        self.mark_dirty();
    }

    /// Validate and, if valid, spawn the create call.
    ///
    /// Must run inside a tokio runtime.
    pub fn submit(&mut self) {
        let submission = match self.dialog.begin_submit() {
            Ok(submission) => submission,
            Err(SubmitBlocked::Invalid(field)) => {
                self.focus = field;
                return;
            }
            Err(SubmitBlocked::Busy) => {
                self.set_status(StatusKind::Pending, "Still creating the previous user");
                return;
            }
        };

        let username = submission.user.username.clone();
        self.pending_username = Some(username.clone());
        self.set_status(StatusKind::Pending, format!("Creating {}\u{2026}", username));

        let creator = Arc::clone(&self.creator);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = creator
                .create_user(&submission.user, INVITE_TOKEN, INVITE_ID, INVITE_REDIRECT)
                .await;
            let ticket = submission.ticket;
            if tx.send(AppMessage::CreateUserFinished { ticket, result }).is_err() {
                debug!("app closed before create user finished");
            }
        });
    }

    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::CreateUserFinished { ticket, result } => {
                let created = result.as_ref().ok().map(|profile| profile.username.clone());
                let outcome = self.dialog.finish_submit(ticket, result);
                if outcome == SubmitOutcome::Stale {
                    debug!(ticket, "ignoring result of an abandoned submission");
                    return;
                }
                let pending = self.pending_username.take();

                match outcome {
                    SubmitOutcome::Rejected(field) => {
                        self.focus = field;
                        self.set_status(StatusKind::Error, format!("Check the {} field", field));
                    }
                    SubmitOutcome::Failed(message) => {
                        self.set_status(StatusKind::Error, message);
                    }
                    SubmitOutcome::Submitted { unrouted: Some(err) } => {
                        self.set_status(
                            StatusKind::Warning,
                            format!("Server reported \"{}\" but the dialog closed", err.message),
                        );
                    }
                    SubmitOutcome::Submitted { unrouted: None } => {
                        let name = created.or(pending).unwrap_or_default();
                        self.set_status(StatusKind::Success, format!("Created user {}", name));
                        self.created.push(name);
                    }
                    SubmitOutcome::Invalid(_) | SubmitOutcome::Busy | SubmitOutcome::Stale => {}
                }
            }
            AppMessage::DialogSubmitted(_) => self.close_dialog(),
            AppMessage::DialogDismissed => {
                self.close_dialog();
                self.set_status(StatusKind::Info, "Cancelled");
            }
        }
    }
}
