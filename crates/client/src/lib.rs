//! tutorials_client - HTTP client and CLI for the tutorials API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::TutorialsClient;
pub use error::{ClientError, Result};
