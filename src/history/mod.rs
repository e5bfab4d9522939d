//! Persistence of the generated-profile history.

mod store;

pub use store::{FileStore, HISTORY_KEY, HistoryStore, MemoryStore};
