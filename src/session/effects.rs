use crate::config::Outcome;
use crate::error::WebDataError;
use crate::session::{App, Message, Model};

/// Status code reported by the simulated backend for [`Outcome::BadStatus`].
const SIMULATED_SERVER_ERROR: u16 = 500;

/// Simulate persisting `value` against a backend that behaves per `outcome`.
pub fn perform_save(outcome: Outcome, value: &str) -> Result<(), WebDataError> {
    if value.trim().is_empty() {
        return Err(WebDataError::BadPayload("value is empty".to_string()));
    }
    match outcome {
        Outcome::Success => Ok(()),
        Outcome::Timeout => Err(WebDataError::Timeout),
        Outcome::Network => Err(WebDataError::NetworkError),
        Outcome::BadStatus => Err(WebDataError::BadStatus(SIMULATED_SERVER_ERROR)),
    }
}

impl App {
    /// Run the side effect a message requests, returning the follow-up message.
    ///
    /// `was_loading` is the status before `msg` was applied; a save is only
    /// issued when this `Save` is the one that moved the field into `Loading`.
    pub(super) fn handle_message_side_effects(
        &self,
        was_loading: bool,
        model: &Model,
        msg: &Message,
    ) -> Option<Message> {
        match msg {
            Message::Save if !was_loading && model.field.status().is_loading() => {
                let result = perform_save(self.outcome, model.field.value());
                if let Err(err) = &result {
                    tracing::warn!(%err, "save failed");
                }
                Some(Message::SaveCompleted(result))
            }
            _ => None,
        }
    }
}
