pub mod error;
pub mod health;
pub mod tutorials;

pub use error::AppError;
