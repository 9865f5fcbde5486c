//! tutorials_core - shared types, pure operations and the storage contract
//! for the tutorials service.

pub mod serde;
pub mod storage;
pub mod tutorial;
