mod error;
pub mod keys;
mod operations;
mod requests;
mod types;

pub use error::TutorialError;
pub use operations::{
    delete_batches, id_rows, into_tutorials, merge_entity, next_id, parse_id,
};
pub use requests::{CreateTutorialRequest, UpdateTutorialRequest};
pub use types::{EntityKey, Tutorial, TutorialEntity};
