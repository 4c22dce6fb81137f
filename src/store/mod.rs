//! Sleep-record persistence
//!
//! All session metadata lives in a single JSON array on disk. The store
//! reads the full collection, validates entry shapes on load, and rewrites
//! the whole blob on every mutation. There is no locking: two concurrent
//! writers race and the last one wins, which is accepted for a single-user
//! local app.

mod record;
mod store;

pub use record::SleepRecord;
pub use store::RecordStore;
