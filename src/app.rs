//! Application state and core logic

use crate::api::{self, RegistrationClient, RegistrationClientTrait};
use crate::state::{AppState, Control, FieldName, SubmissionStatus};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Main application struct
pub struct App<C = RegistrationClient> {
    /// Current application state
    pub state: AppState,
    /// Client used for submissions
    client: Arc<C>,
    /// Endpoint shown in the status bar
    pub endpoint: String,
    /// Whether the app should quit
    quit: bool,
    /// Outcomes of spawned submissions
    outcome_tx: mpsc::UnboundedSender<SubmissionStatus>,
    outcome_rx: mpsc::UnboundedReceiver<SubmissionStatus>,
}

impl App<RegistrationClient> {
    /// Create an app posting to `endpoint`
    pub fn new(endpoint: String) -> Self {
        let client = RegistrationClient::new(endpoint);
        let endpoint = client.endpoint().to_string();
        Self::with_client(client, endpoint)
    }
}

impl<C> App<C>
where
    C: RegistrationClientTrait + 'static,
{
    /// Create an app around an existing client
    pub fn with_client(client: C, endpoint: String) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            client: Arc::new(client),
            endpoint,
            quit: false,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press on the registration screen
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let control = self.state.active_control();

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.press_submit();
            }
            _ => match control {
                Control::Field(FieldName::SelectedBatch) => match key.code {
                    KeyCode::Right | KeyCode::Char('l') => self.state.cycle_batch(true)?,
                    KeyCode::Left | KeyCode::Char('h') => self.state.cycle_batch(false)?,
                    KeyCode::Enter => self.state.next_form_field(),
                    _ => {}
                },
                Control::Field(FieldName::AgreeTerms) => {
                    if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
                        self.state.toggle_terms()?;
                    }
                }
                Control::Field(_) => match key.code {
                    KeyCode::Char(c) => self.state.form_input_char(c)?,
                    KeyCode::Backspace => self.state.form_backspace()?,
                    KeyCode::Enter => self.state.next_form_field(),
                    _ => {}
                },
                Control::SubmitButton => {
                    if key.code == KeyCode::Enter {
                        self.press_submit();
                    }
                }
            },
        }
        Ok(())
    }

    /// Submit through the button, which is disabled until terms are agreed
    fn press_submit(&mut self) {
        if self.state.can_submit() {
            self.submit();
        } else {
            tracing::debug!("Submit ignored: terms not agreed");
        }
    }

    /// Validate and, when clean, post the form in the background.
    ///
    /// Returns whether a request was started. Nothing prevents a second
    /// submit while one is in flight.
    pub fn submit(&mut self) -> bool {
        if !self.state.validate_form() {
            tracing::debug!(
                errors = self.state.form_errors.len(),
                "Validation failed, not submitting"
            );
            return false;
        }

        self.state.pending_submissions += 1;
        let client = Arc::clone(&self.client);
        let form = self.state.form.clone();
        let tx = self.outcome_tx.clone();

        tokio::spawn(async move {
            let status = api::submit(client.as_ref(), &form).await;
            // Receiver only goes away on shutdown
            let _ = tx.send(status);
        });
        true
    }

    /// Apply any submission outcomes that have arrived
    pub fn poll_submission(&mut self) {
        while let Ok(status) = self.outcome_rx.try_recv() {
            self.record_outcome(status);
        }
    }

    /// Wait for the next submission outcome and apply it
    #[cfg(test)]
    pub async fn wait_for_submission(&mut self) -> Option<SubmissionStatus> {
        if !self.state.is_submitting() {
            return None;
        }
        let status = self.outcome_rx.recv().await?;
        self.record_outcome(status);
        Some(status)
    }

    fn record_outcome(&mut self, status: SubmissionStatus) {
        self.state.pending_submissions = self.state.pending_submissions.saturating_sub(1);
        self.state.submission_status = status;
    }
}
