//! Application state and core logic

use crate::api::{HttpTransport, LeadTransport};
use crate::config::AppConfig;
use crate::state::AppState;
use crate::submit::{SubmitController, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Runs submit attempts
    controller: SubmitController,
    /// Completed submit attempts are sent here by the request task
    outcomes_tx: UnboundedSender<SubmitOutcome>,
    outcomes_rx: UnboundedReceiver<SubmitOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Frame counter driving the busy spinner
    pub spinner_frame: usize,
}

impl App {
    /// Create a new App posting to the submission endpoint
    pub fn new(config: &AppConfig) -> Result<Self> {
        let transport = HttpTransport::new()?;
        debug!("Submitting to {}", transport.endpoint());
        Ok(Self::with_transport(Arc::new(transport), config.show_hints()))
    }

    /// Create an App around any transport
    pub fn with_transport(transport: Arc<dyn LeadTransport>, show_hints: bool) -> Self {
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(show_hints),
            controller: SubmitController::new(transport),
            outcomes_tx,
            outcomes_rx,
            quit: false,
            spinner_frame: 0,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance animations; called once per loop iteration
    pub fn tick(&mut self) {
        if self.state.form.is_submitting() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    /// Apply a finished submit attempt to the form
    pub fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        self.state.form.finish_submit(outcome);
        if self.state.form.status.is_success() {
            self.state.focus = Default::default();
        } else if self.state.form.status.is_error() {
            debug!("Submit failed; input kept for another attempt");
        }
    }

    /// Apply every outcome that has arrived since the last call
    pub fn drain_outcomes(&mut self) {
        loop {
            match self.outcomes_rx.try_recv() {
                Ok(outcome) => self.apply_outcome(outcome),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    /// Submit if the button is enabled
    pub fn submit(&mut self) {
        if !self.state.form.can_submit() {
            debug!(
                submitting = self.state.form.is_submitting(),
                "Submit unavailable"
            );
            return;
        }
        // Completion arrives on `outcomes_rx`; the task handle is not needed
        let _ = self
            .controller
            .spawn(&mut self.state.form, self.outcomes_tx.clone());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.state.picker.is_some() {
            self.handle_picker_key(key);
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_choice = self
            .state
            .focused_field()
            .is_some_and(|f| f.kind().is_choice());
        let on_button = self.state.focused_field().is_none();

        match key.code {
            KeyCode::Char('q') if ctrl => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('u') if ctrl => self.state.clear_focused(),
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter if on_button => self.submit(),
            KeyCode::Enter | KeyCode::Char(' ') if on_choice => {
                self.state.open_picker();
            }
            KeyCode::Right if on_choice => self.state.cycle_choice(true),
            KeyCode::Left if on_choice => self.state.cycle_choice(false),
            KeyCode::Enter => self.state.next_focus(),
            KeyCode::Backspace => self.state.backspace(),
            KeyCode::Char(c) if !ctrl => self.state.input_char(c),
            _ => {}
        }
    }

    /// Handle keys while the option list is open
    fn handle_picker_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state.close_picker(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.confirm_picker(),
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.move_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(picker) = self.state.picker.as_mut() {
                    picker.move_down();
                }
            }
            _ => {}
        }
    }
}
