use crate::error::WebDataError;
use crate::session::{Model, ToastLevel};
use crate::status::RemoteStatus;

/// Everything that can happen to the edited field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Enter edit mode
    StartEdit,
    /// Replace the in-progress value
    Input(String),
    /// Discard the edit
    Cancel,
    /// Request a save of the in-progress value
    Save,
    /// The save request finished
    SaveCompleted(Result<(), WebDataError>),
}

/// Pure function that updates the model based on a message.
///
/// Saving itself is a side effect handled outside; only its request and
/// completion flow through here.
pub fn update(mut model: Model, msg: Message) -> Model {
    tracing::debug!(?msg, status = model.field.status().kind(), "update");

    match msg {
        Message::StartEdit => {
            model.field = model.field.edit();
        }
        Message::Input(text) => {
            model.field = model.field.update(text);
        }
        Message::Cancel => {
            if model.field.editable().is_dirty() {
                model.show_toast(ToastLevel::Warning, "Changes discarded");
            } else {
                model.clear_toast();
            }
            model.field = model.field.cancel().update_status(RemoteStatus::NotAsked);
        }
        Message::Save => {
            // Nothing to save outside edit mode, and one request at a time.
            if model.field.editable().is_editing() && !model.field.status().is_loading() {
                model.clear_toast();
                model.field = model.field.update_status(RemoteStatus::Loading);
            }
        }
        Message::SaveCompleted(result) => {
            // A completion that arrives after a cancel is stale.
            if !model.field.status().is_loading() {
                return model;
            }
            match result {
                Ok(()) => {
                    model.show_toast(ToastLevel::Info, "Saved");
                    model.field = model.field.save().update_status(RemoteStatus::Success(()));
                }
                Err(err) => {
                    model.show_toast(ToastLevel::Error, format!("Save failed: {err}"));
                    model.field = model.field.update_status(RemoteStatus::Failure(err));
                }
            }
        }
    }

    model
}
