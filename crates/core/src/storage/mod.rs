mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use http_mapping::store_error_to_status_code;
pub use traits::{validate_batch, TutorialStore};
pub use types::{ContinuationToken, Page, ScanQuery, MAX_BATCH_SIZE};
