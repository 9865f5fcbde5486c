//! In-memory storage backend for testing and local development.
//!
//! This module provides an in-memory implementation of [`TutorialStore`]
//! that keeps rows in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, ordered by
//! (partition, row) key the same way the table service orders them. Data is
//! not persisted.
//!
//! # Example
//!
//! ```rust,ignore
//! use tutorials::storage::inmemory::InMemoryStore;
//!
//! let store = InMemoryStore::with_page_size(10);
//! // Use store for testing...
//! ```
//!
//! [`TutorialStore`]: tutorials_core::storage::TutorialStore

mod store;

pub use store::InMemoryStore;
