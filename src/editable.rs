//! A value that is either read-only or being edited.
//!
//! While editing, the pristine original is retained next to the
//! in-progress current value so the edit can be committed or discarded.

use serde::Serialize;

/// Read-only or editing state of a single value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", content = "content")]
pub enum Editable<A> {
    /// Not being edited.
    ReadOnly(A),
    /// Being edited; `original` is the value edit mode was entered with.
    Editing { original: A, current: A },
}

impl<A> Editable<A> {
    /// Create a read-only value.
    pub const fn read_only(value: A) -> Self {
        Self::ReadOnly(value)
    }

    /// Commit the current value and leave edit mode.
    #[must_use]
    pub fn save(self) -> Self {
        match self {
            Self::Editing { current, .. } => Self::ReadOnly(current),
            read_only @ Self::ReadOnly(_) => read_only,
        }
    }

    /// Discard the current value and leave edit mode.
    #[must_use]
    pub fn cancel(self) -> Self {
        match self {
            Self::Editing { original, .. } => Self::ReadOnly(original),
            read_only @ Self::ReadOnly(_) => read_only,
        }
    }

    /// Replace the current value. Ignored when not editing.
    #[must_use]
    pub fn update(self, value: A) -> Self {
        match self {
            Self::Editing { original, .. } => Self::Editing {
                original,
                current: value,
            },
            read_only @ Self::ReadOnly(_) => read_only,
        }
    }

    /// The current value (the only value when read-only).
    pub const fn value(&self) -> &A {
        match self {
            Self::ReadOnly(value) | Self::Editing { current: value, .. } => value,
        }
    }

    /// The value edit mode was entered with.
    pub const fn original(&self) -> &A {
        match self {
            Self::ReadOnly(value) | Self::Editing { original: value, .. } => value,
        }
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self, Self::Editing { .. })
    }

    pub const fn is_read_only(&self) -> bool {
        matches!(self, Self::ReadOnly(_))
    }

    /// Apply `f` to every carried value, keeping the variant.
    pub fn map<A2, F>(self, mut f: F) -> Editable<A2>
    where
        F: FnMut(A) -> A2,
    {
        match self {
            Self::ReadOnly(value) => Editable::ReadOnly(f(value)),
            Self::Editing { original, current } => Editable::Editing {
                original: f(original),
                current: f(current),
            },
        }
    }
}

impl<A: Clone> Editable<A> {
    /// Enter edit mode. Already-editing values are returned unchanged.
    #[must_use]
    pub fn edit(self) -> Self {
        match self {
            Self::ReadOnly(value) => Self::Editing {
                original: value.clone(),
                current: value,
            },
            editing @ Self::Editing { .. } => editing,
        }
    }
}

impl<A: PartialEq> Editable<A> {
    /// Whether an edit is open and differs from the original.
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::ReadOnly(_) => false,
            Self::Editing { original, current } => original != current,
        }
    }
}

impl<A: Default> Default for Editable<A> {
    fn default() -> Self {
        Self::ReadOnly(A::default())
    }
}
