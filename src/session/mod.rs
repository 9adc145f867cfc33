//! A scripted form-edit session built on [`EditableWebData`](crate::wrapper::EditableWebData).
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete session state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Drives a message script, performing save side effects

mod effects;
mod model;
mod update;

pub use effects::perform_save;
pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::Outcome;

/// Runs one edit session: enter edit mode, type, then save or cancel.
pub struct App {
    initial: String,
    edit: Option<String>,
    outcome: Outcome,
    cancel: bool,
    json: bool,
}

impl App {
    /// Create a session for a field starting at `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            edit: None,
            outcome: Outcome::Success,
            cancel: false,
            json: false,
        }
    }

    /// Text typed into the field while editing.
    pub fn with_edit(mut self, text: Option<String>) -> Self {
        self.edit = text;
        self
    }

    /// How the simulated backend answers the save.
    pub const fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = outcome;
        self
    }

    /// Discard the edit instead of saving it.
    pub const fn with_cancel(mut self, cancel: bool) -> Self {
        self.cancel = cancel;
        self
    }

    /// Print the final field as JSON after the transcript.
    pub const fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// The messages this session sends, in order.
    pub fn script(&self) -> Vec<Message> {
        let mut script = vec![Message::StartEdit];
        if let Some(text) = &self.edit {
            script.push(Message::Input(text.clone()));
        }
        script.push(if self.cancel {
            Message::Cancel
        } else {
            Message::Save
        });
        script
    }

    /// Play the script, writing one transcript line per applied message.
    pub fn run(&self, out: &mut impl Write) -> Result<Model> {
        let mut model = Model::new(self.initial.clone());
        writeln!(out, "{:<16} {}", "start", model.describe())?;

        for msg in self.script() {
            model = self.step(model, msg, out)?;
        }

        if let Some((message, level)) = model.active_toast() {
            writeln!(out, "[{level:?}] {message}")?;
        }
        if self.json {
            serde_json::to_writer_pretty(&mut *out, &model.field)
                .context("Failed to serialize field")?;
            writeln!(out)?;
        }
        Ok(model)
    }

    fn step(&self, model: Model, msg: Message, out: &mut impl Write) -> Result<Model> {
        let label = label(&msg);
        let was_loading = model.field.status().is_loading();
        let model = update(model, msg.clone());
        writeln!(out, "{label:<16} {}", model.describe())?;

        match self.handle_message_side_effects(was_loading, &model, &msg) {
            Some(follow_up) => self.step(model, follow_up, out),
            None => Ok(model),
        }
    }
}

fn label(msg: &Message) -> &'static str {
    match msg {
        Message::StartEdit => "start_edit",
        Message::Input(_) => "input",
        Message::Cancel => "cancel",
        Message::Save => "save",
        Message::SaveCompleted(Ok(())) => "save_ok",
        Message::SaveCompleted(Err(_)) => "save_err",
    }
}
