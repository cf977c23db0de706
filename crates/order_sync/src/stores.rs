pub mod file_local_store;
pub mod in_memory_local_store;
pub mod local_store;

pub use file_local_store::FileLocalStore;
pub use in_memory_local_store::InMemoryLocalStore;
pub use local_store::LocalStore;
