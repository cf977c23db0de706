pub mod engine;
pub mod entities;
pub mod reconciler;
pub mod stores;

pub use crate::engine::SyncEngine;
pub use crate::entities::{OrderRecord, RunMode, RunSummary, SyncState};
pub use crate::reconciler::StatusReconciler;
pub use crate::stores::{FileLocalStore, InMemoryLocalStore, LocalStore};
