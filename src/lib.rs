// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. error::WebDataError)
    clippy::module_name_repetitions
)]

//! # editable-webdata
//!
//! An editable value paired with the status of persisting it.
//!
//! Form UIs usually need two independent pieces of state per field:
//! - whether the field is read-only or being edited (keeping the original
//!   around so an edit can be cancelled)
//! - where the save request stands: not asked, loading, succeeded, failed
//!
//! [`EditableWebDataWrapper`](wrapper::EditableWebDataWrapper) bundles both
//! into one immutable value. Every operation consumes the wrapper and returns
//! a new one, touching only one side of the pair.
//!
//! ```
//! use editable_webdata::prelude::*;
//!
//! let field = EditableWebData::create("old".to_string())
//!     .map_editable(Editable::edit)
//!     .map_editable(|e| e.update("new".to_string()))
//!     .update_status(RemoteStatus::Loading);
//!
//! assert_eq!(field.value(), "new");
//! assert!(field.status().is_loading());
//! ```
//!
//! ## Modules
//!
//! - [`wrapper`]: The editable/status pair and its combinators
//! - [`editable`]: Read-only or editing value
//! - [`status`]: Remote request lifecycle
//! - [`error`]: Save failure reasons
//! - [`session`]: A TEA-style edit session driving the wrapper
//! - [`config`]: Flags file handling for the demo binary

pub mod config;
pub mod editable;
pub mod error;
pub mod session;
pub mod status;
pub mod wrapper;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::editable::Editable;
    pub use crate::error::WebDataError;
    pub use crate::status::RemoteStatus;
    pub use crate::wrapper::{EditableWebData, EditableWebDataWrapper};
}
