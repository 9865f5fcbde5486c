//! Tutorial operations on top of a [`TutorialStore`].
//!
//! [`TutorialStore`]: tutorials_core::storage::TutorialStore

mod error;
mod tutorials;

pub use error::ServiceError;
pub use tutorials::{DeleteAllReport, TutorialService};
