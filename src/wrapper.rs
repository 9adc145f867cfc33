//! An editable value bundled with the status of persisting it.
//!
//! [`EditableWebDataWrapper`] is an immutable pair: every operation consumes
//! the wrapper and returns a new one, and each operation touches exactly one
//! side of the pair. The only way in is [`EditableWebDataWrapper::create`],
//! which always starts read-only and not-asked.

use serde::Serialize;

use crate::editable::Editable;
use crate::error::WebDataError;
use crate::status::RemoteStatus;

/// Editable value of type `A` plus the remote status of saving it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EditableWebDataWrapper<A, B, E = WebDataError> {
    editable: Editable<A>,
    status: RemoteStatus<B, E>,
}

/// The common case: a save that only reports completion.
pub type EditableWebData<A> = EditableWebDataWrapper<A, ()>;

impl<A, B, E> EditableWebDataWrapper<A, B, E> {
    /// Start from `ReadOnly(initial)` with a `NotAsked` status.
    pub const fn create(initial: A) -> Self {
        Self {
            editable: Editable::ReadOnly(initial),
            status: RemoteStatus::NotAsked,
        }
    }

    /// Alias for [`create`](Self::create).
    pub const fn new(initial: A) -> Self {
        Self::create(initial)
    }

    /// Transform the editable side; the status is carried through unchanged.
    pub fn map_editable<A2, F>(self, f: F) -> EditableWebDataWrapper<A2, B, E>
    where
        F: FnOnce(Editable<A>) -> Editable<A2>,
    {
        EditableWebDataWrapper {
            editable: f(self.editable),
            status: self.status,
        }
    }

    /// Replace the status; the editable side is carried through unchanged.
    #[must_use]
    pub fn update_status(self, status: RemoteStatus<B, E>) -> Self {
        tracing::trace!(from = self.status.kind(), to = status.kind(), "status transition");
        Self {
            editable: self.editable,
            status,
        }
    }

    /// Transform the status side; the editable side is carried through unchanged.
    pub fn map_status<B2, E2, F>(self, f: F) -> EditableWebDataWrapper<A, B2, E2>
    where
        F: FnOnce(RemoteStatus<B, E>) -> RemoteStatus<B2, E2>,
    {
        EditableWebDataWrapper {
            editable: self.editable,
            status: f(self.status),
        }
    }

    pub fn to_editable(self) -> Editable<A> {
        self.editable
    }

    pub fn to_status(self) -> RemoteStatus<B, E> {
        self.status
    }

    pub const fn editable(&self) -> &Editable<A> {
        &self.editable
    }

    pub const fn status(&self) -> &RemoteStatus<B, E> {
        &self.status
    }

    pub fn into_parts(self) -> (Editable<A>, RemoteStatus<B, E>) {
        (self.editable, self.status)
    }

    /// The current value of the editable side.
    pub const fn value(&self) -> &A {
        self.editable.value()
    }

    /// Replace the in-progress value. Ignored when not editing.
    #[must_use]
    pub fn update(self, value: A) -> Self {
        self.map_editable(|e| e.update(value))
    }

    /// Commit the in-progress value.
    #[must_use]
    pub fn save(self) -> Self {
        self.map_editable(Editable::save)
    }

    /// Drop the in-progress value and restore the original.
    #[must_use]
    pub fn cancel(self) -> Self {
        self.map_editable(Editable::cancel)
    }
}

impl<A: Clone, B, E> EditableWebDataWrapper<A, B, E> {
    /// Enter edit mode.
    #[must_use]
    pub fn edit(self) -> Self {
        self.map_editable(Editable::edit)
    }
}

impl<A: Default, B, E> Default for EditableWebDataWrapper<A, B, E> {
    fn default() -> Self {
        Self::create(A::default())
    }
}
