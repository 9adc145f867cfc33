use crate::wrapper::EditableWebData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Toast {
    level: ToastLevel,
    message: String,
}

/// The complete session state.
///
/// All state lives here - the edited field and the last notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    /// The edited value together with the status of saving it
    pub field: EditableWebData<String>,
    toast: Option<Toast>,
}

impl Model {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            field: EditableWebData::create(initial.into()),
            toast: None,
        }
    }

    pub(super) fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
        });
    }

    pub(super) fn clear_toast(&mut self) {
        self.toast = None;
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// One-line summary of the field: edit state, current value, save status.
    pub fn describe(&self) -> String {
        let mode = if self.field.editable().is_editing() {
            "editing"
        } else {
            "read_only"
        };
        format!(
            "editable={mode} value={:?} status={}",
            self.field.value(),
            self.field.status()
        )
    }
}
